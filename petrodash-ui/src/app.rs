//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use petrodash::shell::Route as AppRoute;

use crate::components::{Nav, Toast};
use crate::pages::{Admin, Dashboard};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area. Each route mounts a fresh page.
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=AppRoute::Dashboard.path().to_string() view=Dashboard />
                        <Route path=AppRoute::Admin.path().to_string() view=Admin />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🛢️"</div>
            <h1 class="text-3xl font-bold mb-2">"404"</h1>
            <p class="text-gray-400 mb-6">
                "La página "
                <code class="text-gray-300">{move || location.pathname.get()}</code>
                " no existe."
            </p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Volver al Dashboard"
            </A>
        </div>
    }
}
