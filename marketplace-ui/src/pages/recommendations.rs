//! Recommendations Page
//!
//! Product lookup by id with similar-product cards.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use marketplace_dashboard::api::MarketplaceApi;
use marketplace_dashboard::route::Route as Screen;
use marketplace_dashboard::view::{InFlight, RecommendationCard, RecommendationState};

use crate::components::{InlineLoading, RecommendationItem, SelectedProduct};
use crate::settings::use_app_context;

/// Recommendations page component
#[component]
pub fn Recommendations() -> impl IntoView {
    let ctx = use_app_context();
    let locale = ctx.locale;
    let state = create_rw_signal(RecommendationState::new());
    let inflight = Rc::new(RefCell::new(InFlight::new()));

    let on_submit = {
        let inflight = inflight.clone();
        let api = ctx.api.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();

            let Some(request) = state.try_update(|s| s.begin_search()) else {
                return;
            };

            let api = api.clone();
            let product_id = request.product_id;
            let pending = inflight
                .borrow_mut()
                .track(async move { api.get_recommendations(&product_id).await });
            let ticket = request.ticket;

            spawn_local(async move {
                if let Ok(outcome) = pending.await {
                    state.update(|s| {
                        s.resolve(ticket, outcome);
                    });
                }
            });
        }
    };

    on_cleanup(move || inflight.borrow_mut().cancel());

    let loading = move || state.with(|s| s.is_loading());
    let error = move || state.with(|s| s.error());

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">{Screen::Recommendations.title()}</h1>
                <p class="text-gray-400 mt-1">"Busca un producto para ver artículos similares"</p>
            </div>

            // Search form
            <form class="bg-gray-800 rounded-xl p-6 space-y-3" on:submit=on_submit>
                <label for="product-id" class="block text-sm text-gray-400">"ID del Producto"</label>
                <div class="flex space-x-3">
                    <input
                        id="product-id"
                        type="text"
                        placeholder="Ej. 42"
                        class=move || if error().is_some() {
                            "flex-1 bg-gray-900 border border-red-500 rounded-lg px-4 py-2 focus:outline-none"
                        } else {
                            "flex-1 bg-gray-900 border border-gray-700 rounded-lg px-4 py-2 focus:outline-none focus:border-primary-500"
                        }
                        prop:value=move || state.with(|s| s.query().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_query(value));
                        }
                    />
                    <button
                        type="submit"
                        class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:opacity-50 rounded-lg font-medium transition-colors flex items-center space-x-2"
                        disabled=loading
                    >
                        <Show when=loading>
                            <InlineLoading />
                        </Show>
                        <span>"Buscar"</span>
                    </button>
                </div>

                {move || error().map(|e| view! {
                    <p role="alert" class="text-sm text-red-400">{e.to_string()}</p>
                })}
            </form>

            // Queried product
            {move || state.with(|s| s.selected_product().cloned()).map(|product| view! {
                <SelectedProduct product=product />
            })}

            // Recommendation cards
            {move || {
                let cards: Vec<RecommendationCard> = state.with(|s| {
                    s.recommendations()
                        .iter()
                        .map(|product| RecommendationCard::new(product, locale))
                        .collect()
                });

                if cards.is_empty() {
                    ().into_view()
                } else {
                    view! {
                        <section>
                            <h2 class="text-xl font-semibold mb-4">"Productos Recomendados"</h2>
                            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {cards.into_iter()
                                    .map(|card| view! { <RecommendationItem card=card /> })
                                    .collect_view()}
                            </div>
                        </section>
                    }.into_view()
                }
            }}
        </div>
    }
}
