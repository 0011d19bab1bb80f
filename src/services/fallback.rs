use serde::Serialize;

use crate::catalog::LocalizationTable;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum ResolvedSource {
    /// Position of the table in the chain that answered.
    Locale(usize),
    RawId,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    pub description: String,
    pub source: ResolvedSource,
}

/// Try each table in order; if none has the id, show the id itself.
pub fn resolve(template_id: &str, chain: &[&LocalizationTable]) -> Resolved {
    for (i, table) in chain.iter().enumerate() {
        if let Ok(hit) = table.lookup(template_id) {
            return Resolved {
                name: hit.name.clone(),
                description: hit.description.clone(),
                source: ResolvedSource::Locale(i),
            };
        }
    }

    tracing::warn!(template_id, "missing translation, falling back to raw id");

    Resolved {
        name: template_id.to_string(),
        description: String::new(),
        source: ResolvedSource::RawId,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::french;

    fn english() -> LocalizationTable {
        LocalizationTable::from_entries([
            ("modern", "Modern", "Clean, contemporary layout."),
            ("hr-manager", "HR Manager", "People-focused design."),
        ])
        .unwrap()
    }

    #[test]
    fn first_table_wins() {
        let en = english();
        let r = resolve("hr-manager", &[french(), &en]);
        assert_eq!(r.name, "Responsable RH");
        assert_eq!(r.source, ResolvedSource::Locale(0));
    }

    #[test]
    fn falls_through_to_default_language() {
        let en = english();
        let r = resolve("modern", &[french(), &en]);
        assert_eq!(r.name, "Modern");
        assert_eq!(r.source, ResolvedSource::Locale(1));
    }

    #[test]
    fn ends_with_raw_id() {
        let r = resolve("medical-doctor", &[french()]);
        assert_eq!(r.name, "medical-doctor");
        assert!(r.description.is_empty());
        assert_eq!(r.source, ResolvedSource::RawId);
    }

    #[test]
    fn empty_chain() {
        assert_eq!(resolve("tech", &[]).source, ResolvedSource::RawId);
    }
}
