//! Immutable template-id → localized `{name, description}` tables.
//!
//! A [`LocalizationTable`] never changes after it is built, so a shared
//! reference can be read from any number of threads. A miss is an ordinary
//! [`LookupError::NotFound`]; what to show instead is up to the caller
//! (see [`crate::services::fallback`]).

mod fr;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::template::{is_valid_template_id, TemplateLocalization};

pub use fr::{french, FR_ENTRIES};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no localization for template '{template_id}'")]
    NotFound { template_id: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate template id '{0}'")]
    DuplicateKey(String),
    #[error("template '{template_id}' has an empty {field}")]
    EmptyField {
        template_id: String,
        field: &'static str,
    },
    #[error("invalid template id '{0}'")]
    InvalidTemplateId(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizationTable {
    entries: BTreeMap<String, TemplateLocalization>,
}

#[derive(Deserialize)]
pub(crate) struct RawRecord {
    name: String,
    description: String,
}

/// Map entries in file order, repeats included. `serde_json` would keep only
/// the last value of a repeated key, hiding the mistake.
pub(crate) struct RawEntries(Vec<(String, RawRecord)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of template id to {name, description}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawEntries, A::Error> {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((k, v)) = map.next_entry::<String, RawRecord>()? {
                    out.push((k, v));
                }
                Ok(RawEntries(out))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl TryFrom<RawEntries> for LocalizationTable {
    type Error = TableError;

    fn try_from(raw: RawEntries) -> Result<Self, TableError> {
        Self::from_entries(raw.0.into_iter().map(|(id, r)| (id, r.name, r.description)))
    }
}

// Deserializing goes through the same checks as `from_entries`.
impl<'de> Deserialize<'de> for LocalizationTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEntries::deserialize(deserializer)?;
        Self::try_from(raw).map_err(de::Error::custom)
    }
}

impl LocalizationTable {
    /// Build a table from authored `(id, name, description)` rows.
    ///
    /// Rejects repeated ids, blank strings and ids that are not kebab-case
    /// slugs, so a bad row never reaches a lookup.
    pub fn from_entries<I, K, N, D>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, N, D)>,
        K: Into<String>,
        N: Into<String>,
        D: Into<String>,
    {
        let mut entries = BTreeMap::new();

        for (id, name, description) in rows {
            let id: String = id.into();
            let record = TemplateLocalization::new(name, description);

            if !is_valid_template_id(&id) {
                return Err(TableError::InvalidTemplateId(id));
            }
            if record.name.trim().is_empty() {
                return Err(TableError::EmptyField {
                    template_id: id,
                    field: "name",
                });
            }
            if record.description.trim().is_empty() {
                return Err(TableError::EmptyField {
                    template_id: id,
                    field: "description",
                });
            }
            if entries.contains_key(&id) {
                return Err(TableError::DuplicateKey(id));
            }

            entries.insert(id, record);
        }

        Ok(Self { entries })
    }

    pub fn lookup(&self, template_id: &str) -> Result<&TemplateLocalization, LookupError> {
        self.entries
            .get(template_id)
            .ok_or_else(|| LookupError::NotFound {
                template_id: template_id.to_string(),
            })
    }

    pub fn get(&self, template_id: &str) -> Option<&TemplateLocalization> {
        self.entries.get(template_id)
    }

    pub fn contains(&self, template_id: &str) -> bool {
        self.entries.contains_key(template_id)
    }

    pub fn keys(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Entries ordered by template id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateLocalization)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, TemplateLocalization> {
        self.entries
    }

    pub(crate) fn from_map(entries: BTreeMap<String, TemplateLocalization>) -> Self {
        Self { entries }
    }
}
