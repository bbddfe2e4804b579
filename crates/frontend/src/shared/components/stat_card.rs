use crate::shared::icons::icon;
use leptos::prelude::*;

/// Single aggregate figure with a label, rendered in the statistics row.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Count to display
    value: usize,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value.to_string()}</div>
            </div>
        </div>
    }
}
