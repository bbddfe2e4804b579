use contracts::enums::post_status::PostStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Moderation badge for a post's raw status code.
///
/// Canceled posts render neutral, approved ones green; everything else,
/// including codes the closed set does not know, renders as pending.
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let (label, variant) = PostStatus::display_for_code(&status);

    view! {
        <span class=format!("badge badge--{}", variant)>
            {label}
        </span>
    }
}
