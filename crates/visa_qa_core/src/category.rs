use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse topic of a Q/A record, derived from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "eVisa")]
    EVisa,
    #[serde(rename = "APEC")]
    Apec,
    #[serde(rename = "Resident Visa")]
    Resident,
    #[serde(rename = "Visitor Visa")]
    Visitor,
    #[serde(rename = "Visa")]
    General,
}

impl Category {
    /// Label written to the state file and the Q/A export.
    pub fn label(self) -> &'static str {
        match self {
            Category::EVisa => "eVisa",
            Category::Apec => "APEC",
            Category::Resident => "Resident Visa",
            Category::Visitor => "Visitor Visa",
            Category::General => "Visa",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checked in order; the first keyword found in the lowercased title wins.
const RULES: &[(&str, Category)] = &[
    ("evisa", Category::EVisa),
    ("apec", Category::Apec),
    ("resident", Category::Resident),
    ("visitor", Category::Visitor),
];

pub fn detect_category(title: &str) -> Category {
    let lowered = title.to_lowercase();
    RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evisa_is_checked_before_apec() {
        assert_eq!(
            detect_category("APEC 商務旅行卡持卡人可否申請 eVisa"),
            Category::EVisa
        );
    }

    #[test]
    fn apec_is_checked_before_resident_and_visitor() {
        assert_eq!(detect_category("APEC card for Resident or Visitor"), Category::Apec);
        assert_eq!(detect_category("Resident or Visitor?"), Category::Resident);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(detect_category("EVISA fees"), Category::EVisa);
        assert_eq!(detect_category("apec business travel card"), Category::Apec);
        assert_eq!(detect_category("VISITOR visa extension"), Category::Visitor);
    }

    #[test]
    fn unmatched_titles_fall_back_to_general() {
        assert_eq!(detect_category("停留簽證申請須知"), Category::General);
        assert_eq!(detect_category(""), Category::General);
    }

    #[test]
    fn serialized_form_uses_export_labels() {
        let json = serde_json::to_string(&Category::Resident).unwrap();
        assert_eq!(json, "\"Resident Visa\"");
        let back: Category = serde_json::from_str("\"Visa\"").unwrap();
        assert_eq!(back, Category::General);
        assert_eq!(Category::General.to_string(), "Visa");
    }
}
