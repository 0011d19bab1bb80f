use serde::Serialize;

use crate::catalog::LocalizationTable;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CoverageReport {
    pub covered: Vec<String>,
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
    pub ratio: f64,
}

/// Compare a table's ids against the host application's master list.
pub fn report(table: &LocalizationTable, master: &[&str]) -> CoverageReport {
    let mut covered: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();

    for &id in master {
        if table.contains(id) {
            covered.push(id.to_string());
        } else {
            missing.push(id.to_string());
        }
    }

    let unknown: Vec<String> = table
        .keys()
        .into_iter()
        .filter(|k| !master.contains(k))
        .map(str::to_string)
        .collect();

    covered.sort();
    covered.dedup();
    missing.sort();
    missing.dedup();

    let total = covered.len() + missing.len();
    let ratio = if total == 0 {
        0.0
    } else {
        covered.len() as f64 / total as f64
    };

    CoverageReport {
        covered,
        missing,
        unknown,
        ratio,
    }
}
