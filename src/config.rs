use std::path::{Path, PathBuf};

pub const LOG_ENV: &str = "TEMPLATE_LOCALES_LOG";
pub const DIR_ENV: &str = "TEMPLATE_LOCALES_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Relative locale file paths in requests are resolved against this.
    pub base_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            base_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(filter) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.log_filter = filter;
        }
        if let Some(dir) = lookup(DIR_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.base_dir = PathBuf::from(dir);
        }

        cfg
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base_dir.join(p)
        }
    }
}
