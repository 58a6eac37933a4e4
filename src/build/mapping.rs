use std::collections::HashMap;

use crate::config::RedirectEntry;

const BUILTIN_REDIRECTS: &[(&str, &str)] = &[
    ("/urlshort-godoc", "https://godoc.org/github.com/gophercises/urlshort"),
    ("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
];

/// Path to target URL lookup table. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectMapping {
    paths: HashMap<String, String>,
}

impl RedirectMapping {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.paths.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }
}

impl From<HashMap<String, String>> for RedirectMapping {
    fn from(paths: HashMap<String, String>) -> Self {
        RedirectMapping { paths }
    }
}

impl<P: Into<String>, U: Into<String>> FromIterator<(P, U)> for RedirectMapping {
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        RedirectMapping {
            paths: iter.into_iter().map(|(p, u)| (p.into(), u.into())).collect(),
        }
    }
}

/// Entries are applied in document order; a repeated path keeps the last url.
pub fn build_mapping(entries: Vec<RedirectEntry>) -> RedirectMapping {
    let mut paths = HashMap::with_capacity(entries.len());
    for RedirectEntry { path, url } in entries {
        if let Some(prev) = paths.get(&path) {
            tracing::warn!(%path, previous = %prev, current = %url, "duplicate redirect path, keeping last");
        }
        paths.insert(path, url);
    }
    RedirectMapping { paths }
}

pub fn builtin_mapping() -> RedirectMapping {
    BUILTIN_REDIRECTS.iter().copied().collect()
}
