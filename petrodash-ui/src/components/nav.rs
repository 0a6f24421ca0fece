//! Navigation Components
//!
//! Header navigation bar and the tab strip used by both pages.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🛢️"</span>
                        <span class="text-xl font-bold text-white">"Petrodash"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/admin" label="Administración" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Single-selection tab strip. Tabs are `(key, label)` pairs.
#[component]
pub fn TabBar(
    tabs: Vec<(&'static str, &'static str)>,
    #[prop(into)]
    active: Signal<&'static str>,
    #[prop(into)]
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 border-b border-gray-700 pb-2">
            {tabs.into_iter().map(|(key, label)| view! {
                <button
                    type="button"
                    on:click=move |_| on_select.call(key)
                    class=move || {
                        let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                        if active.get() == key {
                            format!("{} bg-primary-600 text-white", base)
                        } else {
                            format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                        }
                    }
                >
                    {label}
                </button>
            }).collect_view()}
        </div>
    }
}
