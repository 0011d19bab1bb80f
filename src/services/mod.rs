pub mod coverage;
pub mod diff;
pub mod encoding;
pub mod fallback;
pub mod fingerprint;
pub mod locale_file;
pub mod qa;
