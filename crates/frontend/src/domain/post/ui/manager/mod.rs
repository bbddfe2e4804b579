mod state;

use contracts::domain::post::aggregate::{Post, PostDraft};
use contracts::enums::category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::post::api;
use crate::domain::post::ui::details::PostForm;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::message_service::use_messages;
use crate::shared::number_format::{format_area, format_price};
use crate::system::auth;
use state::{create_state, derive_stats};

#[component]
pub fn PostManagerPage() -> impl IntoView {
    let state = create_state();
    let messages = use_messages();
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_my_posts().await {
                Ok(posts) => {
                    state.update(|s| s.replace_posts(posts));
                }
                Err(e) => {
                    // Stale snapshot stays on screen; the operator is not interrupted
                    log::error!("failed to load posts: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let stats = Memo::new(move |_| state.with(|s| derive_stats(&s.posts)));

    let handle_delete = move |post_id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Bạn chắc chắn muốn xóa?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_post(&post_id).await {
                Ok(()) => {
                    messages.success("Xóa bài thành công");
                    load_data();
                    // The posting quota lives in the session; re-sync it after
                    // a destructive change, without blocking the UI on it.
                    wasm_bindgen_futures::spawn_local(async {
                        if let Err(e) = auth::api::refresh_session().await {
                            log::warn!("session refresh after delete failed: {}", e);
                        }
                    });
                }
                Err(e) => {
                    messages.error(e.user_message("Lỗi xóa bài"));
                }
            }
        });
    };

    let handle_submit = move |draft: PostDraft| {
        let editing = state.with_untracked(|s| s.editing_post.clone());
        set_saving.set(true);
        spawn_local(async move {
            let result = match &editing {
                Some(post) => api::update_post(&post.id, &draft).await,
                None => api::create_post(&draft).await,
            };
            match result {
                Ok(()) => {
                    if editing.is_some() {
                        messages.success("Cập nhật bài viết thành công!");
                    } else {
                        messages.success("Đăng bài viết mới thành công!");
                    }
                    state.update(|s| s.close_form());
                    load_data();
                }
                Err(e) => {
                    log::error!("failed to save post: {}", e);
                    messages.error(format!(
                        "Có lỗi xảy ra: {}",
                        e.user_message("Không thể lưu bài viết")
                    ));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        {move || {
            if state.with(|s| s.form_visible) {
                let initial = state.with(|s| s.editing_post.clone());
                view! {
                    <PostForm
                        initial=initial
                        saving=saving
                        on_finish=Callback::new(move |draft| handle_submit(draft))
                        on_cancel=Callback::new(move |_| state.update(|s| s.close_form()))
                    />
                }
                .into_any()
            } else {
                view! {
                    <div class="page" id="post-manager--list">
                        <div class="page__header">
                            <div class="page__header-left">
                                <h1 class="page__title">"Thống kê bài viết"</h1>
                                <Badge>
                                    {move || stats.get().total.to_string()}
                                </Badge>
                            </div>
                            <div class="page__header-right">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| state.update(|s| s.begin_create())
                                >
                                    {icon("plus")}
                                    " Thêm bài viết mới"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| load_data()
                                    disabled=Signal::derive(move || loading.get())
                                >
                                    {icon("refresh")}
                                    {move || if loading.get() { " Đang tải..." } else { " Tải lại" }}
                                </Button>
                            </div>
                        </div>

                        <div class="page__content">
                            {move || {
                                let s = stats.get();
                                (s.total > 0).then(|| view! {
                                    <div class="stat-row">
                                        <StatCard
                                            label="Tổng số bài viết".to_string()
                                            icon_name="file-text".to_string()
                                            value=s.total
                                        />
                                        {s.by_category
                                            .into_iter()
                                            .map(|(category, count)| view! {
                                                <StatCard
                                                    label=category.label().to_string()
                                                    icon_name="home".to_string()
                                                    value=count
                                                />
                                            })
                                            .collect_view()}
                                    </div>
                                })
                            }}

                            {move || {
                                if state.with(|s| s.posts.is_empty()) {
                                    view! {
                                        <div class="empty-state">
                                            <div class="empty-state__icon">{icon("file-text")}</div>
                                            <h2 class="empty-state__title">"Chưa có bài viết nào"</h2>
                                            <p class="empty-state__hint">
                                                "Nhấn \"Thêm bài viết mới\" để bắt đầu đăng tin."
                                            </p>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <h2 class="page__subtitle">"Danh sách chi tiết"</h2>
                                        <div class="table-wrapper">
                                            <Table attr:id="post-manager-table" attr:style="width: 100%;">
                                                <TableHeader>
                                                    <TableRow>
                                                        <TableHeaderCell>"Tiêu đề"</TableHeaderCell>
                                                        <TableHeaderCell>"Giá (VNĐ)"</TableHeaderCell>
                                                        <TableHeaderCell>"Loại hình"</TableHeaderCell>
                                                        <TableHeaderCell>"Diện tích (m²)"</TableHeaderCell>
                                                        <TableHeaderCell>"Địa chỉ"</TableHeaderCell>
                                                        <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                                        <TableHeaderCell>"Hành động"</TableHeaderCell>
                                                    </TableRow>
                                                </TableHeader>
                                                <TableBody>
                                                    <For
                                                        each=move || state.with(|s| s.posts.clone())
                                                        key=|p| p.id.clone()
                                                        children=move |post: Post| {
                                                            let post_for_edit = post.clone();
                                                            let post_id = post.id.clone();
                                                            let category_label = Category::from_code(&post.category)
                                                                .map(|c| c.label().to_string())
                                                                .unwrap_or_else(|| post.category.clone());
                                                            view! {
                                                                <TableRow>
                                                                    <TableCell>
                                                                        <TableCellLayout truncate=true>
                                                                            {post.title.clone()}
                                                                        </TableCellLayout>
                                                                    </TableCell>
                                                                    <TableCell>
                                                                        <TableCellLayout>
                                                                            {format_price(post.price)}
                                                                        </TableCellLayout>
                                                                    </TableCell>
                                                                    <TableCell>
                                                                        <TableCellLayout>
                                                                            {category_label}
                                                                        </TableCellLayout>
                                                                    </TableCell>
                                                                    <TableCell>
                                                                        <TableCellLayout>
                                                                            {format_area(post.area)}
                                                                        </TableCellLayout>
                                                                    </TableCell>
                                                                    <TableCell>
                                                                        <TableCellLayout truncate=true>
                                                                            {post.location.clone()}
                                                                        </TableCellLayout>
                                                                    </TableCell>
                                                                    <TableCell>
                                                                        <TableCellLayout>
                                                                            <StatusBadge status=post.status.clone() />
                                                                        </TableCellLayout>
                                                                    </TableCell>
                                                                    <TableCell>
                                                                        <Button
                                                                            appearance=ButtonAppearance::Subtle
                                                                            on_click=move |_| state.update(|s| s.begin_edit(post_for_edit.clone()))
                                                                            attr:title="Sửa"
                                                                        >
                                                                            {icon("edit")}
                                                                        </Button>
                                                                        <Button
                                                                            appearance=ButtonAppearance::Subtle
                                                                            on_click=move |_| handle_delete(post_id.clone())
                                                                            attr:title="Xóa"
                                                                        >
                                                                            {icon("delete")}
                                                                        </Button>
                                                                    </TableCell>
                                                                </TableRow>
                                                            }
                                                        }
                                                    />
                                                </TableBody>
                                            </Table>
                                        </div>
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
