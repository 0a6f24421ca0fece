//! Toast Notification Component
//!
//! Shows the current notification.

use leptos::*;
use petrodash::forms::Variant;

use crate::state::global::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                state.toast.get().map(|toast| {
                    let notification = toast.notification;
                    let (icon, bg_class) = match notification.variant {
                        Variant::Success => ("✓", "bg-green-600"),
                        Variant::Info => ("ℹ", "bg-blue-600"),
                        Variant::Error => ("✕", "bg-red-600"),
                    };

                    view! {
                        <div
                            on:click=move |_| state.dismiss()
                            class=format!(
                                "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                                 cursor-pointer transform transition-all duration-300 ease-out animate-slide-in",
                                bg_class
                            )
                        >
                            <span class="text-lg">{icon}</span>
                            <div>
                                <p class="text-sm font-semibold">{notification.title}</p>
                                <p class="text-sm">{notification.description}</p>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
