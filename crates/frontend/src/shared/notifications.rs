//! Transient notifications
//!
//! Context-provided service: any component can push a success or error
//! notice, the tray renders them and they dismiss themselves after a few
//! seconds (or on click).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a notice stays on screen unless dismissed by hand.
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    pub notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.notices
            .try_update(|notices| notices.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);

        // try_update: a notice fired from a late async callback after the
        // app was torn down is simply dropped.
        let pushed = self
            .notices
            .try_update(|notices| notices.push(Notice { id, kind, text }));
        if pushed.is_none() {
            return;
        }

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            service.dismiss(id);
        });
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NotificationTray() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService context not found");

    view! {
        <div style="position: fixed; top: 16px; right: 16px; z-index: 1000; display: flex; flex-direction: column; gap: 8px; max-width: 360px;">
            <For each=move || service.notices.get() key=|notice| notice.id let:notice>
                {{
                    let accent = match notice.kind {
                        NoticeKind::Success => "border-left: 4px solid #4caf50;",
                        NoticeKind::Error => "border-left: 4px solid #f44336;",
                    };
                    let id = notice.id;
                    view! {
                        <div style=format!(
                            "padding: 10px 12px; background: white; box-shadow: 0 2px 8px rgba(0,0,0,0.15); border-radius: 4px; display: flex; justify-content: space-between; align-items: flex-start; gap: 12px; {}",
                            accent,
                        )>
                            <span style="white-space: pre-wrap; word-break: break-word;">
                                {notice.text.clone()}
                            </span>
                            <button
                                style="background: none; border: none; cursor: pointer; padding: 2px; color: #666;"
                                on:click=move |_| service.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }}
            </For>
        </div>
    }
}
