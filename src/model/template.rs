use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Every template identifier the resume builder ships, in gallery order.
pub const KNOWN_TEMPLATE_IDS: [&str; 16] = [
    "modern",
    "classic",
    "creative",
    "executive",
    "minimalist",
    "tech",
    "modern-developer",
    "medical-doctor",
    "academic-professor",
    "creative-designer",
    "executive-manager",
    "professional-chef",
    "research-scientist",
    "hr-manager",
    "civil-engineer",
    "artist-musician",
];

static TEMPLATE_ID_RE: Lazy<Regex> = Lazy::new(|| {
    // lowercase kebab-case: "hr-manager", "tech"
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap()
});

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TemplateLocalization {
    pub name: String,
    pub description: String,
}

impl TemplateLocalization {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

pub fn is_valid_template_id(id: &str) -> bool {
    TEMPLATE_ID_RE.is_match(id)
}

pub fn is_known_template_id(id: &str) -> bool {
    KNOWN_TEMPLATE_IDS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_validation() {
        assert!(is_valid_template_id("creative-designer"));
        assert!(is_valid_template_id("tech"));
        assert!(!is_valid_template_id(""));
        assert!(!is_valid_template_id("Creative-Designer"));
        assert!(!is_valid_template_id("creative--designer"));
        assert!(!is_valid_template_id("-tech"));
        assert!(!is_valid_template_id("hr manager"));
    }

    #[test]
    fn master_list_ids_are_valid_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for id in KNOWN_TEMPLATE_IDS {
            assert!(is_valid_template_id(id), "{id}");
            assert!(seen.insert(id), "duplicate {id}");
        }
    }
}
