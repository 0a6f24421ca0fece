//! Admin Page
//!
//! Data-entry forms, one mounted at a time. Switching tabs discards any
//! unsaved input.

use leptos::*;
use petrodash::shell::{AdminShell, AdminTab, ADMIN_SUBTITLE, ADMIN_TITLE};

use crate::components::{FileUpload, FormPanel, TabBar};

/// Admin page component
#[component]
pub fn Admin() -> impl IntoView {
    let shell = create_rw_signal(AdminShell::new());
    let tab = create_memo(move |_| shell.with(|s| s.tab()));

    let on_select = move |key: &'static str| {
        if let Some(tab) = AdminTab::all().iter().find(|t| t.key() == key) {
            shell.update(|s| {
                s.select(*tab);
            });
        }
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">{ADMIN_TITLE}</h1>
                <p class="text-gray-400 mt-1">{ADMIN_SUBTITLE}</p>
            </div>

            <TabBar
                tabs=AdminTab::all().iter().map(|t| (t.key(), t.label())).collect()
                active=Signal::derive(move || tab.get().key())
                on_select=on_select
            />

            // Mounted form; rebuilt only when the tab changes
            {move || {
                let tab = tab.get();
                view! {
                    <div class="grid gap-8">
                        <FormPanel shell=shell />
                        {(tab == AdminTab::Historical).then(|| view! { <FileUpload /> })}
                    </div>
                }
            }}
        </div>
    }
}
