//! Transient toast notifications.

use esn_form::{Notification, Severity};
use leptos::*;
use std::time::Duration;

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(5);

/// Context handle for pushing toasts from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<(u64, Notification)>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Show `notification`, dismissing it automatically after a few
    /// seconds.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.entries.update(|entries| entries.push((id, notification)));

        let entries = self.entries;
        set_timeout(
            move || entries.update(|entries| entries.retain(|(entry_id, _)| *entry_id != id)),
            TOAST_TTL,
        );
    }
}

fn severity_classes(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "border-emerald-500/60 bg-emerald-950/95",
        Severity::Warning => "border-amber-500/60 bg-amber-950/95",
        Severity::Error => "border-red-500/60 bg-red-950/95",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-3">
            <For
                each=move || toasts.entries.get()
                key=|(id, _)| *id
                children=move |(_, notification)| {
                    view! {
                        <div class=format!(
                            "rounded-lg border p-4 shadow-lg {}",
                            severity_classes(notification.severity),
                        )>
                            <p class="font-semibold">{notification.title.clone()}</p>
                            <p class="mt-1 text-sm text-slate-300">
                                {notification.description.clone()}
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}
