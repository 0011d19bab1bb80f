use serde::Serialize;

use crate::catalog::LocalizationTable;

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct LocaleDiff {
    pub only_left: Vec<String>,
    pub only_right: Vec<String>,
    pub changed: Vec<String>,
}

impl LocaleDiff {
    pub fn is_empty(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty() && self.changed.is_empty()
    }
}

pub fn diff(left: &LocalizationTable, right: &LocalizationTable) -> LocaleDiff {
    let mut out = LocaleDiff::default();

    for (id, record) in left.iter() {
        match right.get(id) {
            None => out.only_left.push(id.to_string()),
            Some(other) if other != record => out.changed.push(id.to_string()),
            Some(_) => {}
        }
    }

    out.only_right = right
        .iter()
        .filter(|(id, _)| !left.contains(id))
        .map(|(id, _)| id.to_string())
        .collect();

    out
}

/// Union of both tables; on a shared id the overlay's record wins.
pub fn merge(base: &LocalizationTable, overlay: &LocalizationTable) -> LocalizationTable {
    let mut entries = base.clone().into_map();
    for (id, record) in overlay.iter() {
        entries.insert(id.to_string(), record.clone());
    }
    LocalizationTable::from_map(entries)
}
