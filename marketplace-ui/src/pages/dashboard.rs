//! Dashboard Page
//!
//! Category distribution chart and totals.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use marketplace_dashboard::route::Route as Screen;
use marketplace_dashboard::view::{load_dashboard, DashboardState, InFlight};

use crate::components::{BarChart, ErrorBanner, Loading, SummaryCard};
use crate::settings::use_app_context;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let locale = ctx.locale;
    let state = create_rw_signal(DashboardState::Loading);
    let inflight = Rc::new(RefCell::new(InFlight::new()));

    // Fetch once on mount
    let api = ctx.api.clone();
    let request = inflight
        .borrow_mut()
        .track(async move { load_dashboard(&api).await });
    spawn_local(async move {
        if let Ok(next) = request.await {
            state.set(next);
        }
    });

    on_cleanup(move || inflight.borrow_mut().cancel());

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">{Screen::Dashboard.title()}</h1>
                <p class="text-gray-400 mt-1">"Productos del catálogo por categoría"</p>
            </div>

            {move || match state.get() {
                DashboardState::Loading => view! { <Loading /> }.into_view(),
                DashboardState::Error(e) => view! { <ErrorBanner message=e.to_string() /> }.into_view(),
                DashboardState::Loaded(data) => view! {
                    <div class="grid lg:grid-cols-3 gap-8">
                        <section class="lg:col-span-2 bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"Distribución por Categoría"</h2>
                            <BarChart data=data.chart locale=locale />
                        </section>

                        <SummaryCard summary=data.summary locale=locale />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
