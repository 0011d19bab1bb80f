//! French display strings for the resume builder's profession templates,
//! with the tooling around the locale asset: validation, coverage against
//! the master template list, locale file I/O, diff/merge and fallback
//! resolution.
//!
//! ```
//! use template_locales::catalog::french;
//!
//! let entry = french().lookup("hr-manager").unwrap();
//! assert_eq!(entry.name, "Responsable RH");
//! assert!(french().lookup("nonexistent-template").is_err());
//! ```

pub mod catalog;
pub mod config;
pub mod model;
pub mod protocol;
pub mod services;

pub use catalog::{french, LocalizationTable, LookupError, TableError};
pub use model::template::TemplateLocalization;
