//! App Root Component
//!
//! Main application component with routing and the shared API context.

use leptos::*;
use leptos_router::*;
use marketplace_dashboard::config::Config;
use marketplace_dashboard::route::Route as Screen;

use crate::components::Nav;
use crate::pages::{Dashboard, Recommendations};
use crate::settings::{provide_app_context, use_app_context};

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_app_context(&config);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path=Screen::Dashboard.path() view=Dashboard />
                        <Route path=Screen::Recommendations.path() view=Recommendations />
                        <Route path=Screen::NotFound.path() view=NotFound />
                    </Routes>
                </main>

                // Footer with API status
                <Footer />
            </div>
        </Router>
    }
}

/// Footer component showing whether the API answers
#[component]
fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let base_url = ctx.api.base_url().to_string();
    let (online, set_online) = create_signal(None::<bool>);

    let api = ctx.api.clone();
    spawn_local(async move {
        set_online.set(Some(api.ping().await));
    });

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                {move || match online.get() {
                    Some(true) => view! {
                        <span class="flex items-center space-x-1 text-green-400">
                            <span class="w-2 h-2 bg-green-400 rounded-full" />
                            <span>"API conectada"</span>
                        </span>
                    }.into_view(),
                    Some(false) => view! {
                        <span class="flex items-center space-x-1 text-red-400">
                            <span class="w-2 h-2 bg-red-400 rounded-full" />
                            <span>"API no disponible"</span>
                        </span>
                    }.into_view(),
                    None => view! {
                        <span class="flex items-center space-x-2 text-gray-400">
                            <span class="inline-block loading-spinner w-4 h-4" />
                            <span>"Comprobando API..."</span>
                        </span>
                    }.into_view(),
                }}

                <div class="text-gray-400">{base_url}</div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">{Screen::NotFound.title()}</h1>
            <p class="text-gray-400 mb-6">"La página que buscas no existe."</p>
            <A
                href=Screen::Dashboard.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Ir al Dashboard"
            </A>
        </div>
    }
}
