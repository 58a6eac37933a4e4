pub mod error;
pub mod format;
pub mod redirect;

use std::fs;
use std::path::Path;

pub use error::{ConfigError, ParseError};
pub use format::ConfigFormat;
pub use redirect::{RedirectEntry, parse_entries, parse_json, parse_yaml};

/// Raw redirects document read from disk, not yet parsed.
#[derive(Debug, Clone)]
pub struct RedirectSource {
    pub format: ConfigFormat,
    pub raw: Vec<u8>,
}

impl RedirectSource {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let format = ConfigFormat::from_path(path);
        tracing::info!(path = %path.display(), ?format, bytes = raw.len(), "loaded redirects file");
        Ok(RedirectSource { format, raw })
    }
}
