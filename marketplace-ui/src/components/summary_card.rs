//! Summary Card Component
//!
//! Totals shown next to the category chart.

use leptos::*;
use marketplace_dashboard::format::{format_count, NumberLocale};
use marketplace_dashboard::model::DistributionSummary;

/// Category and product totals
#[component]
pub fn SummaryCard(
    summary: DistributionSummary,
    locale: NumberLocale,
) -> impl IntoView {
    let categories = format_count(summary.category_count as u64, locale);
    let products = format_count(summary.total_items, locale);

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Resumen"</h2>
            <div class="grid grid-cols-2 gap-4">
                <Stat label="Total de Categorías" value=categories />
                <Stat label="Total de Productos" value=products />
            </div>
        </div>
    }
}

#[component]
fn Stat(
    label: &'static str,
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-900 rounded-lg p-4">
            <div class="text-sm text-gray-400">{label}</div>
            <div class="text-2xl font-bold mt-1">{value}</div>
        </div>
    }
}
