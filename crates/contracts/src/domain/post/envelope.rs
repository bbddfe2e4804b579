use serde::Deserialize;

use super::aggregate::Post;

/// Response envelope of the post-list endpoint.
///
/// The backend has shipped two shapes over time: `{"metadata": [...]}` and
/// `{"data": [...]}`. Parse priority is fixed and documented here:
/// `metadata` first, then `data`, else the empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListEnvelope {
    #[serde(default)]
    pub metadata: Option<Vec<Post>>,
    #[serde(default)]
    pub data: Option<Vec<Post>>,
}

impl PostListEnvelope {
    /// Unwrap the envelope into the post list it carries.
    pub fn into_posts(self) -> Vec<Post> {
        self.metadata.or(self.data).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_json(id: &str) -> String {
        format!(
            r#"{{"_id": "{id}", "title": "t", "price": 1000000, "category": "phong-tro", "area": 20, "location": "Gò Vấp", "status": "active"}}"#
        )
    }

    #[test]
    fn metadata_shape_is_preferred() {
        let body = format!(
            r#"{{"metadata": [{}], "data": [{}, {}]}}"#,
            post_json("a"),
            post_json("b"),
            post_json("c")
        );
        let envelope: PostListEnvelope = serde_json::from_str(&body).unwrap();
        let posts = envelope.into_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "a");
    }

    #[test]
    fn data_shape_is_the_fallback() {
        let body = format!(r#"{{"data": [{}]}}"#, post_json("b"));
        let envelope: PostListEnvelope = serde_json::from_str(&body).unwrap();
        let posts = envelope.into_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "b");
    }

    #[test]
    fn neither_field_means_empty() {
        let envelope: PostListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_posts().is_empty());
    }

    #[test]
    fn explicit_null_metadata_falls_through_to_data() {
        let body = format!(r#"{{"metadata": null, "data": [{}]}}"#, post_json("d"));
        let envelope: PostListEnvelope = serde_json::from_str(&body).unwrap();
        assert_eq!(envelope.into_posts()[0].id, "d");
    }
}
