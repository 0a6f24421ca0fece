//! Historical bulk-upload picker

use leptos::*;
use petrodash::forms::{acknowledge_upload, EXPECTED_COLUMNS};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::state::global::use_global_state;

/// File picker that acknowledges a spreadsheet by name. The file is not read.
#[component]
pub fn FileUpload() -> impl IntoView {
    let state = use_global_state();

    let on_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        match acknowledge_upload(&file.name()) {
            Ok(notification) => state.show(notification),
            Err(e) => state.show_error("Archivo no válido", e.to_string()),
        }
        input.set_value("");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-2">"Carga Masiva"</h2>
            <p class="text-gray-400 text-sm mb-4">
                "Seleccione un archivo Excel o CSV con las columnas: "
                {EXPECTED_COLUMNS.join(", ")}
            </p>
            <input
                type="file"
                accept=".xlsx,.xls,.csv"
                on:change=on_change
                class="block w-full text-sm text-gray-300 file:mr-4 file:py-2 file:px-4
                       file:rounded-lg file:border-0 file:bg-primary-600 file:text-white"
            />
        </section>
    }
}
