use contracts::domain::post::aggregate::Post;
use contracts::enums::category::Category;
use leptos::prelude::*;

/// View state of the post manager.
///
/// The post list is a full snapshot of the last successful fetch;
/// mutations never patch it locally, they trigger a re-fetch. The view
/// region is a two-state machine: list when `form_visible` is false,
/// form otherwise.
#[derive(Clone, Debug, Default)]
pub struct PostManagerState {
    pub posts: Vec<Post>,
    pub form_visible: bool,
    /// `None` = create mode, `Some` = edit mode pre-filling the form
    pub editing_post: Option<Post>,
    pub is_loaded: bool,
}

impl PostManagerState {
    /// Open the form in create mode
    pub fn begin_create(&mut self) {
        self.editing_post = None;
        self.form_visible = true;
    }

    /// Open the form pre-filled with an existing post
    pub fn begin_edit(&mut self, post: Post) {
        self.editing_post = Some(post);
        self.form_visible = true;
    }

    /// Back to the list; used for both cancel and successful submit
    pub fn close_form(&mut self) {
        self.form_visible = false;
        self.editing_post = None;
    }

    /// Replace the snapshot after a successful fetch
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.is_loaded = true;
    }
}

pub fn create_state() -> RwSignal<PostManagerState> {
    RwSignal::new(PostManagerState::default())
}

/// Aggregate figures shown above the table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostStats {
    pub total: usize,
    /// One bucket per closed category, in display order
    pub by_category: Vec<(Category, usize)>,
}

/// Single linear pass over the snapshot. Posts whose category code is not
/// in the closed set count toward the total but land in no bucket.
pub fn derive_stats(posts: &[Post]) -> PostStats {
    let mut by_category: Vec<(Category, usize)> =
        Category::all().into_iter().map(|c| (c, 0)).collect();

    for post in posts {
        if let Some(category) = Category::from_code(&post.category) {
            if let Some(bucket) = by_category.iter_mut().find(|(c, _)| *c == category) {
                bucket.1 += 1;
            }
        }
    }

    PostStats {
        total: posts.len(),
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, category: &str) -> Post {
        Post {
            id: id.to_string(),
            title: "Phòng trọ".to_string(),
            price: 2500000.0,
            category: category.to_string(),
            area: 20.0,
            location: "Thủ Đức".to_string(),
            status: "inactive".to_string(),
        }
    }

    #[test]
    fn stats_count_total_and_buckets() {
        let posts = vec![
            post("1", "phong-tro"),
            post("2", "phong-tro"),
            post("3", "can-ho-mini"),
        ];
        let stats = derive_stats(&posts);
        assert_eq!(stats.total, 3);
        assert_eq!(
            stats.by_category,
            vec![
                (Category::PhongTro, 2),
                (Category::NhaNguyenCan, 0),
                (Category::CanHoChungCu, 0),
                (Category::CanHoMini, 1),
            ]
        );
    }

    #[test]
    fn unrecognized_category_counts_toward_total_only() {
        let posts = vec![post("1", "van-phong"), post("2", "phong-tro")];
        let stats = derive_stats(&posts);
        assert_eq!(stats.total, 2);
        let bucket_sum: usize = stats.by_category.iter().map(|(_, n)| n).sum();
        assert_eq!(bucket_sum, 1);
    }

    #[test]
    fn empty_list_has_zeroed_stats() {
        let stats = derive_stats(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.by_category.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn begin_create_clears_editing_target() {
        let mut state = PostManagerState::default();
        state.begin_edit(post("1", "phong-tro"));
        state.begin_create();
        assert!(state.form_visible);
        assert!(state.editing_post.is_none());
    }

    #[test]
    fn begin_edit_sets_editing_target() {
        let mut state = PostManagerState::default();
        state.begin_edit(post("7", "can-ho-mini"));
        assert!(state.form_visible);
        assert_eq!(state.editing_post.as_ref().map(|p| p.id.as_str()), Some("7"));
    }

    #[test]
    fn close_form_returns_to_list_with_empty_target() {
        let mut state = PostManagerState::default();
        state.begin_edit(post("1", "phong-tro"));
        state.close_form();
        assert!(!state.form_visible);
        assert!(state.editing_post.is_none());
    }

    #[test]
    fn replace_posts_swaps_the_whole_snapshot() {
        let mut state = PostManagerState::default();
        state.replace_posts(vec![post("1", "phong-tro")]);
        state.replace_posts(vec![post("2", "can-ho-mini")]);
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].id, "2");
        assert!(state.is_loaded);
    }
}
