use sha2::{Digest, Sha256};

use crate::catalog::LocalizationTable;

/// Hex SHA-256 of the table's compact JSON form.
///
/// Keys serialize in sorted order, so two tables with the same entries
/// always hash the same regardless of how they were built.
pub fn fingerprint(table: &LocalizationTable) -> String {
    let canonical = serde_json::to_vec(table).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    hex::encode(hasher.finalize())
}
