use serde::{Deserialize, Serialize};

/// Housing types a post can be listed under.
///
/// The set is closed: the form only offers these four, and the statistics
/// row has one bucket per variant. Wire codes are kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PhongTro,
    NhaNguyenCan,
    CanHoChungCu,
    CanHoMini,
}

impl Category {
    /// Wire code of the category
    pub fn code(&self) -> &'static str {
        match self {
            Category::PhongTro => "phong-tro",
            Category::NhaNguyenCan => "nha-nguyen-can",
            Category::CanHoChungCu => "can-ho-chung-cu",
            Category::CanHoMini => "can-ho-mini",
        }
    }

    /// Human-readable display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::PhongTro => "Phòng trọ",
            Category::NhaNguyenCan => "Nhà nguyên căn",
            Category::CanHoChungCu => "Căn hộ chung cư",
            Category::CanHoMini => "Căn hộ mini",
        }
    }

    /// All categories, in display order
    pub fn all() -> Vec<Category> {
        vec![
            Category::PhongTro,
            Category::NhaNguyenCan,
            Category::CanHoChungCu,
            Category::CanHoMini,
        ]
    }

    /// Parse from a wire code. Codes outside the closed set return `None`;
    /// callers decide how to render those (the table falls back to the raw
    /// code, statistics skip them).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "phong-tro" => Some(Category::PhongTro),
            "nha-nguyen-can" => Some(Category::NhaNguyenCan),
            "can-ho-chung-cu" => Some(Category::CanHoChungCu),
            "can-ho-mini" => Some(Category::CanHoMini),
            _ => None,
        }
    }
}

impl ToString for Category {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_through_from_code() {
        for category in Category::all() {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(Category::from_code("biet-thu"), None);
        assert_eq!(Category::from_code(""), None);
    }

    #[test]
    fn serde_uses_kebab_case_codes() {
        let json = serde_json::to_string(&Category::CanHoChungCu).unwrap();
        assert_eq!(json, "\"can-ho-chung-cu\"");
        let parsed: Category = serde_json::from_str("\"phong-tro\"").unwrap();
        assert_eq!(parsed, Category::PhongTro);
    }

    #[test]
    fn labels_are_mapped() {
        assert_eq!(Category::PhongTro.label(), "Phòng trọ");
        assert_eq!(Category::NhaNguyenCan.label(), "Nhà nguyên căn");
        assert_eq!(Category::CanHoChungCu.label(), "Căn hộ chung cư");
        assert_eq!(Category::CanHoMini.label(), "Căn hộ mini");
    }
}
