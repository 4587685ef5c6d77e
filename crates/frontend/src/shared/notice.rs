//! Inline notices replacing toasts. Successes and warnings fade after a few
//! seconds; errors stay until the next action.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert--success",
            NoticeKind::Warning => "alert alert--warning",
            NoticeKind::Error => "alert alert--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy)]
pub struct NoticeHandle {
    current: RwSignal<Option<Notice>>,
    ticket: RwSignal<u64>,
}

impl Default for NoticeHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeHandle {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            ticket: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.show(NoticeKind::Warning, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn clear(&self) {
        self.current.set(None);
    }

    fn show(&self, kind: NoticeKind, text: String) {
        self.ticket.update(|t| *t += 1);
        let mine = self.ticket.get_untracked();
        self.current.set(Some(Notice { kind, text }));
        if kind == NoticeKind::Error {
            return;
        }
        let handle = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            if handle.ticket.try_get_untracked() == Some(mine) {
                handle.current.try_set(None);
            }
        });
    }
}

#[component]
pub fn NoticeBar(handle: NoticeHandle) -> impl IntoView {
    view! {
        {move || handle.current.get().map(|notice| view! {
            <div class=notice.kind.class() role="status">
                <span>{notice.text}</span>
                <button class="alert__close" title="Cerrar" on:click=move |_| handle.clear()>
                    {icon("x")}
                </button>
            </div>
        })}
    }
}

/// Native confirmation dialog; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
