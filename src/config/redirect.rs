use serde::Deserialize;

use super::error::ParseError;
use super::format::ConfigFormat;

/// One `{path, url}` record of a redirects document.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RedirectEntry {
    pub path: String,
    pub url: String,
}

/// Parse a YAML sequence of redirect entries.
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
///
/// An empty document is an empty list.
pub fn parse_yaml(input: &[u8]) -> Result<Vec<RedirectEntry>, ParseError> {
    if input.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!("redirects document is empty");
        return Ok(Vec::new());
    }
    let entries: Vec<RedirectEntry> = serde_yaml::from_slice(input)?;
    tracing::debug!(count = entries.len(), ?entries, "parsed YAML redirects");
    Ok(entries)
}

/// Parse a JSON array of redirect entries.
pub fn parse_json(input: &[u8]) -> Result<Vec<RedirectEntry>, ParseError> {
    let entries: Vec<RedirectEntry> = serde_json::from_slice(input)?;
    tracing::debug!(count = entries.len(), ?entries, "parsed JSON redirects");
    Ok(entries)
}

pub fn parse_entries(format: ConfigFormat, input: &[u8]) -> Result<Vec<RedirectEntry>, ParseError> {
    match format {
        ConfigFormat::Yaml => parse_yaml(input),
        ConfigFormat::Json => parse_json(input),
    }
}
