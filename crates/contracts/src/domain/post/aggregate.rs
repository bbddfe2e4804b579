use serde::{Deserialize, Serialize};

use crate::enums::category::Category;

/// A rental listing owned by the remote service.
///
/// The frontend only ever holds an ephemeral snapshot of these; the server
/// is the source of truth and assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    /// Price in VNĐ
    pub price: f64,

    /// Raw category code. Parse with `Category::from_code` for display;
    /// codes outside the closed set stay representable here.
    pub category: String,

    /// Area in m²
    pub area: f64,

    pub location: String,

    /// Raw moderation status code. Unknown or missing values render as
    /// not-yet-moderated, see `PostStatus::display_for_code`.
    #[serde(default)]
    pub status: String,
}

/// Form payload for create and update requests.
///
/// Category is the closed enum here — the form can only submit known
/// housing types, so an unmapped code is unrepresentable in outgoing
/// payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub price: f64,
    pub category: Category,
    pub area: f64,
    pub location: String,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: 0.0,
            category: Category::PhongTro,
            area: 0.0,
            location: String::new(),
        }
    }
}

impl PostDraft {
    /// Pre-fill a draft from an existing post for the edit form. A stored
    /// code outside the closed category set falls back to the first
    /// housing type rather than failing the whole form.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            price: post.price,
            category: Category::from_code(&post.category).unwrap_or(Category::PhongTro),
            area: post.area,
            location: post.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_underscore_id_and_missing_status() {
        let post: Post = serde_json::from_str(
            r#"{
                "_id": "66b1",
                "title": "Phòng trọ Quận 10",
                "price": 3500000,
                "category": "phong-tro",
                "area": 25,
                "location": "Quận 10, TP.HCM"
            }"#,
        )
        .unwrap();
        assert_eq!(post.id, "66b1");
        assert_eq!(post.status, "");
    }

    #[test]
    fn draft_serializes_category_as_code() {
        let draft = PostDraft {
            title: "Căn hộ mini".to_string(),
            price: 5000000.0,
            category: Category::CanHoMini,
            area: 30.0,
            location: "Bình Thạnh".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["category"], "can-ho-mini");
    }

    #[test]
    fn from_post_keeps_known_category() {
        let post = Post {
            id: "1".to_string(),
            title: "t".to_string(),
            price: 1.0,
            category: "nha-nguyen-can".to_string(),
            area: 2.0,
            location: "l".to_string(),
            status: "active".to_string(),
        };
        assert_eq!(PostDraft::from_post(&post).category, Category::NhaNguyenCan);
    }

    #[test]
    fn from_post_falls_back_on_unknown_category() {
        let post = Post {
            id: "1".to_string(),
            title: "t".to_string(),
            price: 1.0,
            category: "van-phong".to_string(),
            area: 2.0,
            location: "l".to_string(),
            status: String::new(),
        };
        assert_eq!(PostDraft::from_post(&post).category, Category::PhongTro);
    }
}
