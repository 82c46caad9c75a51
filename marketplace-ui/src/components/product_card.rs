//! Product Card Components
//!
//! The looked-up product and one card per recommendation.

use leptos::*;
use marketplace_dashboard::model::RecommendationResult;
use marketplace_dashboard::view::RecommendationCard;

/// Panel for the product the recommendations were computed from
#[component]
pub fn SelectedProduct(product: RecommendationResult) -> impl IntoView {
    let id = product
        .product_id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    view! {
        <section class="bg-gray-800 rounded-xl p-6 border-l-4 border-primary-500">
            <p class="text-sm text-gray-400">"Producto seleccionado"</p>
            <h2 class="text-2xl font-semibold mt-1">{product.title}</h2>
            <div class="flex items-center space-x-4 mt-2 text-sm text-gray-400">
                <span>{product.category}</span>
                <span>"ID: "{id}</span>
            </div>
        </section>
    }
}

/// A single recommended product
#[component]
pub fn RecommendationItem(card: RecommendationCard) -> impl IntoView {
    view! {
        <article class="bg-gray-800 rounded-xl p-5 flex flex-col space-y-3 hover:bg-gray-750 transition-colors">
            <div class="flex items-start justify-between">
                <h3 class="font-semibold leading-snug">{card.title}</h3>
                <span class="text-xs text-gray-500 ml-2">"#"{card.product_id}</span>
            </div>
            <span class="text-sm text-gray-400">{card.category}</span>

            <div class="flex items-center justify-between">
                <span class="text-xl font-bold">{card.price}</span>
                <span class="text-yellow-400">{card.rating}</span>
            </div>

            <div class="flex items-center justify-between text-sm text-gray-400">
                <span>{card.reviews}" reseñas"</span>
                <span>
                    "Similitud: "
                    <span class="text-primary-400 font-medium">{card.similarity}</span>
                </span>
            </div>
        </article>
    }
}
