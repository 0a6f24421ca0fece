//! Global Application State
//!
//! Reactive state shared by both pages. View filters and form input are not
//! kept here; each page owns its own shell and drops it on unmount.

use chrono::NaiveDate;
use leptos::*;
use petrodash::forms::{Notification, Variant};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Date the dashboard opens on
    pub today: NaiveDate,
    /// Seed for the synthetic history, fixed for the page session
    pub seed: u64,
    /// Notification currently on screen
    pub toast: RwSignal<Option<Toast>>,
    /// Id for the next toast, never reused within a session
    next_toast_id: StoredValue<u64>,
}

/// A notification on screen, tagged so a stale timer cannot dismiss a newer one
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        today: chrono::Local::now().date_naive(),
        seed: js_sys::Date::now() as u64,
        toast: create_rw_signal(None),
        next_toast_id: store_value(0),
    };

    provide_context(state);
}

/// Global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Show a notification (auto-clears after timeout)
    pub fn show(&self, notification: Notification) {
        let timeout = match notification.variant {
            Variant::Error => 5000,
            Variant::Success | Variant::Info => 3000,
        };
        let id = self.put(notification);

        let state = *self;
        gloo_timers::callback::Timeout::new(timeout, move || state.expire(id)).forget();
    }

    /// Put a notification on screen under a fresh id
    fn put(&self, notification: Notification) -> u64 {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.toast.set(Some(Toast { id, notification }));
        id
    }

    /// Timer callback: clear the toast only if `id` is still the one shown
    fn expire(&self, id: u64) {
        if self.toast.with_untracked(|t| t.as_ref().map(|t| t.id)) == Some(id) {
            self.toast.set(None);
        }
    }

    /// Show an error message
    pub fn show_error(&self, title: &str, description: impl Into<String>) {
        self.show(Notification::new(title, description, Variant::Error));
    }

    pub fn dismiss(&self) {
        self.toast.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GlobalState {
        GlobalState {
            today: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            seed: 1,
            toast: create_rw_signal(None),
            next_toast_id: store_value(0),
        }
    }

    #[test]
    fn test_stale_timer_keeps_newer_toast() {
        let runtime = create_runtime();
        let state = test_state();

        let first = state.put(Notification::new("Uno", "", Variant::Info));
        state.dismiss();
        let second = state.put(Notification::new("Dos", "", Variant::Info));
        assert_ne!(first, second);

        state.expire(first);
        assert_eq!(state.toast.get_untracked().map(|t| t.id), Some(second));

        state.expire(second);
        assert!(state.toast.get_untracked().is_none());

        runtime.dispose();
    }
}
