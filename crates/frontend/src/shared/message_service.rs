use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Сервис для централизованного показа всплывающих сообщений
///
/// One message at a time, latest wins, auto-dismissed after a short delay.
#[derive(Clone, Copy)]
pub struct MessageService {
    current: RwSignal<Option<Message>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(MessageKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(MessageKind::Error, text.into());
    }

    fn show(&self, kind: MessageKind, text: String) {
        let message = Message { kind, text };
        self.current.set(Some(message.clone()));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            // Only dismiss if a newer message has not replaced this one
            current.update(|m| {
                if m.as_ref() == Some(&message) {
                    *m = None;
                }
            });
        });
    }
}

/// Hook to access the message service
pub fn use_messages() -> MessageService {
    use_context::<MessageService>().expect("MessageService not provided in context")
}

/// Renders the current message as a floating toast
#[component]
pub fn MessageHost() -> impl IntoView {
    let messages = use_messages();

    view! {
        {move || messages.current.get().map(|m| {
            let class = match m.kind {
                MessageKind::Success => "toast toast--success",
                MessageKind::Error => "toast toast--error",
            };
            view! { <div class=class role="status">{m.text}</div> }
        })}
    }
}
