use serde::{Deserialize, Serialize};

use crate::catalog::LocalizationTable;
use crate::model::template::{is_known_template_id, is_valid_template_id};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QaIssue {
    pub template_id: String,
    pub code: String,
    pub message: String,
}

fn issue(template_id: &str, code: &str, message: impl Into<String>) -> QaIssue {
    QaIssue {
        template_id: template_id.to_string(),
        code: code.to_string(),
        message: message.into(),
    }
}

/// Lint a table. `source` is the same table in the source language, when
/// one is at hand, used to spot names that were never translated.
pub fn run(table: &LocalizationTable, source: Option<&LocalizationTable>) -> Vec<QaIssue> {
    let mut issues: Vec<QaIssue> = Vec::new();

    for (id, record) in table.iter() {
        if !is_valid_template_id(id) {
            issues.push(issue(id, "INVALID_TEMPLATE_ID", "Template id is not a kebab-case slug"));
        } else if !is_known_template_id(id) {
            issues.push(issue(id, "UNKNOWN_TEMPLATE", "Template id is not in the master template list"));
        }

        let name_trim = record.name.trim();
        let description_trim = record.description.trim();

        if name_trim.is_empty() {
            issues.push(issue(id, "EMPTY_NAME", "Name is empty"));
        }
        if description_trim.is_empty() {
            issues.push(issue(id, "EMPTY_DESCRIPTION", "Description is empty"));
        }

        if name_trim.len() != record.name.len() || description_trim.len() != record.description.len() {
            issues.push(issue(id, "UNTRIMMED_TEXT", "Leading or trailing whitespace"));
        }

        // one sentence per description
        if !description_trim.is_empty() && !description_trim.ends_with(['.', '!', '?']) {
            issues.push(issue(
                id,
                "DESCRIPTION_NOT_SENTENCE",
                "Description does not end with sentence punctuation",
            ));
        }

        if let Some(src) = source.and_then(|s| s.get(id)) {
            if !name_trim.is_empty() && name_trim == src.name.trim() {
                issues.push(issue(id, "SAME_AS_SOURCE", format!("Name '{name_trim}' is identical to the source")));
            }
        }
    }

    if !issues.is_empty() {
        tracing::debug!(count = issues.len(), "qa found issues");
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::french;
    use crate::model::template::TemplateLocalization;
    use std::collections::BTreeMap;

    fn codes(issues: &[QaIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn french_table_is_clean() {
        assert!(run(french(), None).is_empty());
    }

    #[test]
    fn flags_rows_that_skipped_construction_checks() {
        // bypass from_entries to get rows it would refuse
        let mut raw = BTreeMap::new();
        raw.insert("tech".to_string(), TemplateLocalization::new(" Tech", ""));
        raw.insert("Bad Id".to_string(), TemplateLocalization::new("X", "Y"));
        raw.insert("portfolio".to_string(), TemplateLocalization::new("Portfolio", "Vitrine."));
        let table = LocalizationTable::from_map(raw);

        let issues = run(&table, None);
        let c = codes(&issues);
        assert!(c.contains(&"INVALID_TEMPLATE_ID"));
        assert!(c.contains(&"UNKNOWN_TEMPLATE"));
        assert!(c.contains(&"EMPTY_DESCRIPTION"));
        assert!(c.contains(&"UNTRIMMED_TEXT"));
        assert!(c.contains(&"DESCRIPTION_NOT_SENTENCE"));
    }

    #[test]
    fn same_as_source() {
        let en = LocalizationTable::from_entries([
            ("hr-manager", "HR Manager", "People-focused design."),
            ("civil-engineer", "Ingénieur Civil", "Technical layout."),
        ])
        .unwrap();

        let issues = run(french(), Some(&en));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].template_id, "civil-engineer");
        assert_eq!(issues[0].code, "SAME_AS_SOURCE");
    }
}
