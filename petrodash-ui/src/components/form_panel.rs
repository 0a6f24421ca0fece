//! Form Panel Component
//!
//! Renders the mounted admin form from its schema and submits it.

use leptos::*;
use petrodash::forms::{FieldKind, FieldSpec, FormError, Notification};
use petrodash::shell::AdminShell;
use serde_json::Value;

use crate::state::global::use_global_state;
use crate::state::ConsoleSink;

/// Schema-driven form for the admin shell's mounted form
#[component]
pub fn FormPanel(shell: RwSignal<AdminShell>) -> impl IntoView {
    let state = use_global_state();
    let (title, fields) = shell.with_untracked(|s| {
        let schema = s.form().schema();
        (schema.title, schema.fields.clone())
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let outcome = shell.try_update(|s| {
            let mut sent: Vec<Notification> = Vec::new();
            let result = s.form_mut().submit(&ConsoleSink, &mut sent);
            (result, sent)
        });

        let Some((result, sent)) = outcome else {
            return;
        };
        for notification in sent {
            state.show(notification);
        }
        if let Err(FormError::Sink(e)) = result {
            state.show_error("Error al guardar", e.to_string());
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>

            <form on:submit=on_submit class="space-y-4" novalidate=true>
                <div class="grid md:grid-cols-2 gap-4">
                    {fields.into_iter().map(|field| view! { <FieldInput shell=shell field=field /> }).collect_view()}
                </div>

                <div class="flex space-x-2">
                    <button
                        type="submit"
                        class="flex-1 bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                    >
                        "Guardar"
                    </button>
                    <button
                        type="button"
                        on:click=move |_| shell.update(|s| s.form_mut().reset())
                        class="px-6 bg-gray-700 hover:bg-gray-600 rounded-lg py-3 transition-colors"
                    >
                        "Limpiar"
                    </button>
                </div>
            </form>
        </section>
    }
}

/// One labelled control with its inline error
#[component]
fn FieldInput(shell: RwSignal<AdminShell>, field: FieldSpec) -> impl IntoView {
    let name = field.name;
    let kind = field.kind.clone();

    let value = move || shell.with(|s| display_value(s.form().values().get(name)));
    let error = move || shell.with(|s| s.form().errors().get(name).map(str::to_string));

    let on_input = move |ev: ev::Event| {
        let raw = event_target_value(&ev);
        shell.update(|s| {
            let form = s.form_mut();
            if raw.is_empty() && kind != FieldKind::Text {
                form.clear(name);
            } else {
                form.set(name, raw);
            }
        });
    };

    let input_class = move || {
        let base = "w-full bg-gray-700 rounded-lg px-4 py-3 text-white border focus:outline-none";
        if error().is_some() {
            format!("{} border-red-500", base)
        } else {
            format!("{} border-gray-600 focus:border-primary-500", base)
        }
    };

    let control = match field.kind {
        FieldKind::Date => view! {
            <input type="date" prop:value=value on:input=on_input class=input_class />
        }
        .into_view(),
        FieldKind::Number { step } => view! {
            <input
                type="number"
                step=step.to_string()
                prop:value=value
                on:input=on_input
                class=input_class
            />
        }
        .into_view(),
        FieldKind::Choice { options } => view! {
            <select prop:value=value on:change=on_input class=input_class>
                <option value="">"Seleccione..."</option>
                {options.iter().map(|option| view! {
                    <option value=*option>{*option}</option>
                }).collect_view()}
            </select>
        }
        .into_view(),
        FieldKind::Text if !field.is_required() => view! {
            <textarea rows="3" prop:value=value on:input=on_input class=input_class />
        }
        .into_view(),
        FieldKind::Text => view! {
            <input type="text" prop:value=value on:input=on_input class=input_class />
        }
        .into_view(),
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{field.label}</label>
            {control}
            {move || error().map(|message| view! {
                <p class="text-red-400 text-sm mt-1">{message}</p>
            })}
        </div>
    }
}

/// Control text for a raw field value
fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(None), "");
        assert_eq!(display_value(Some(&Value::Null)), "");
        assert_eq!(display_value(Some(&json!("Campo Norte"))), "Campo Norte");
        assert_eq!(display_value(Some(&json!(0))), "0");
        assert_eq!(display_value(Some(&json!(16.5))), "16.5");
    }
}
