use contracts::domain::post::aggregate::{Post, PostDraft};
use contracts::enums::category::Category;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Client-side checks only; the server re-validates everything it persists.
fn validate(draft: &PostDraft) -> Result<(), &'static str> {
    if draft.title.trim().is_empty() {
        return Err("Tiêu đề không được để trống");
    }
    if draft.price <= 0.0 {
        return Err("Giá phải lớn hơn 0");
    }
    if draft.area <= 0.0 {
        return Err("Diện tích phải lớn hơn 0");
    }
    if draft.location.trim().is_empty() {
        return Err("Địa chỉ không được để trống");
    }
    Ok(())
}

/// Numeric pre-fill for text inputs; whole numbers drop the fraction
fn plain_number(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if (value - value.round()).abs() < f64::EPSILON {
        format!("{}", value.round() as i64)
    } else {
        format!("{}", value)
    }
}

/// Create-or-edit form for a post.
///
/// Collects the fields of a `PostDraft` and hands a clean payload to the
/// parent via `on_finish`; the parent decides between create and update.
#[component]
pub fn PostForm(
    /// Post being edited, or `None` when creating
    initial: Option<Post>,
    /// True while the parent has a submission in flight
    #[prop(into)]
    saving: Signal<bool>,
    #[prop(into)] on_finish: Callback<PostDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let prefill = initial
        .as_ref()
        .map(PostDraft::from_post)
        .unwrap_or_default();

    let title = RwSignal::new(prefill.title.clone());
    let price_input = RwSignal::new(plain_number(prefill.price));
    let category = RwSignal::new(prefill.category);
    let area_input = RwSignal::new(plain_number(prefill.area));
    let location = RwSignal::new(prefill.location.clone());
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_save = move |_| {
        let draft = PostDraft {
            title: title.get(),
            price: price_input.get().trim().parse::<f64>().unwrap_or(0.0),
            category: category.get(),
            area: area_input.get().trim().parse::<f64>().unwrap_or(0.0),
            location: location.get(),
        };

        if let Err(msg) = validate(&draft) {
            set_error.set(Some(msg.to_string()));
            return;
        }

        set_error.set(None);
        on_finish.run(draft);
    };

    view! {
        <div class="details-container post-details" id="post-manager--details">
            <div class="details-header">
                <h3>{if is_edit { "Chỉnh sửa bài viết" } else { "Đăng bài viết mới" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form__group">
                    <Label>"Tiêu đề"</Label>
                    <Input
                        value=title
                        placeholder="VD: Phòng trọ giá rẻ gần ĐH Bách Khoa"
                        disabled=saving
                    />
                </div>

                <div class="form__group">
                    <Label>"Giá (VNĐ/tháng)"</Label>
                    <Input
                        value=price_input
                        placeholder="VD: 3500000"
                        disabled=saving
                    />
                </div>

                <div class="form__group">
                    <Label>"Loại hình"</Label>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            if let Some(c) = Category::from_code(&event_target_value(&ev)) {
                                category.set(c);
                            }
                        }
                    >
                        {Category::all()
                            .into_iter()
                            .map(|c| view! {
                                <option value=c.code() selected={prefill.category == c}>
                                    {c.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <Label>"Diện tích (m²)"</Label>
                    <Input
                        value=area_input
                        placeholder="VD: 25"
                        disabled=saving
                    />
                </div>

                <div class="form__group">
                    <Label>"Địa chỉ"</Label>
                    <Input
                        value=location
                        placeholder="VD: Quận Bình Thạnh, TP.HCM"
                        disabled=saving
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=saving
                >
                    {icon("save")}
                    {move || {
                        if saving.get() {
                            " Đang lưu..."
                        } else if is_edit {
                            " Cập nhật"
                        } else {
                            " Đăng bài"
                        }
                    }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=saving
                >
                    {icon("x")}
                    " Hủy"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Phòng trọ mới xây".to_string(),
            price: 3500000.0,
            category: Category::PhongTro,
            area: 25.0,
            location: "Quận 10".to_string(),
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate(&draft()).is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(validate(&d).is_err());
    }

    #[test]
    fn non_positive_price_and_area_are_rejected() {
        let mut d = draft();
        d.price = 0.0;
        assert!(validate(&d).is_err());

        let mut d = draft();
        d.area = -5.0;
        assert!(validate(&d).is_err());
    }

    #[test]
    fn blank_location_is_rejected() {
        let mut d = draft();
        d.location = String::new();
        assert!(validate(&d).is_err());
    }

    #[test]
    fn plain_number_prefill() {
        assert_eq!(plain_number(0.0), "");
        assert_eq!(plain_number(3500000.0), "3500000");
        assert_eq!(plain_number(25.5), "25.5");
    }
}
