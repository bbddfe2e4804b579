use serde::{Deserialize, Serialize};

/// Moderation state of a post, as assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Waiting for moderation
    Inactive,
    /// Approved and visible to visitors
    Active,
    /// Canceled by the owner or a moderator
    Cancel,
}

impl PostStatus {
    /// Wire code of the status
    pub fn code(&self) -> &'static str {
        match self {
            PostStatus::Inactive => "inactive",
            PostStatus::Active => "active",
            PostStatus::Cancel => "cancel",
        }
    }

    /// Human-readable display label
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Inactive => "Chưa duyệt",
            PostStatus::Active => "Đã duyệt",
            PostStatus::Cancel => "Đã hủy",
        }
    }

    /// Badge variant used when rendering the status
    pub fn badge_variant(&self) -> &'static str {
        match self {
            PostStatus::Inactive => "error",
            PostStatus::Active => "success",
            PostStatus::Cancel => "neutral",
        }
    }

    /// Parse from a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "inactive" => Some(PostStatus::Inactive),
            "active" => Some(PostStatus::Active),
            "cancel" => Some(PostStatus::Cancel),
            _ => None,
        }
    }

    /// Display mapping for a raw wire value. Codes outside the closed set
    /// render as not-yet-moderated; the server never confirms them as
    /// anything else.
    pub fn display_for_code(code: &str) -> (&'static str, &'static str) {
        let status = Self::from_code(code).unwrap_or(PostStatus::Inactive);
        (status.label(), status.badge_variant())
    }
}

impl ToString for PostStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_renders_neutral() {
        assert_eq!(PostStatus::display_for_code("cancel"), ("Đã hủy", "neutral"));
    }

    #[test]
    fn active_renders_success() {
        assert_eq!(PostStatus::display_for_code("active"), ("Đã duyệt", "success"));
    }

    #[test]
    fn inactive_and_unknown_render_pending() {
        assert_eq!(
            PostStatus::display_for_code("inactive"),
            ("Chưa duyệt", "error")
        );
        assert_eq!(
            PostStatus::display_for_code("something-else"),
            ("Chưa duyệt", "error")
        );
        assert_eq!(PostStatus::display_for_code(""), ("Chưa duyệt", "error"));
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&PostStatus::Cancel).unwrap();
        assert_eq!(json, "\"cancel\"");
        let parsed: PostStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, PostStatus::Active);
    }
}
