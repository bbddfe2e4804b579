use crate::domain::post::ui::manager::PostManagerPage;
use crate::shared::message_service::{MessageHost, MessageService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide MessageService for centralized toast notifications
    provide_context(MessageService::new());

    view! {
        <PostManagerPage />
        <MessageHost />
    }
}
