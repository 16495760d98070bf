//! Breadcrumb entry type.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Arbitrary metadata attached to a crumb.
pub type Extra = IndexMap<String, serde_json::Value>;

/// A single entry in a breadcrumb trail.
///
/// Crumbs are immutable once built: the `with_*` adjusters consume the crumb
/// and return a new one. Two crumbs are equal iff label, heading, url path and
/// extra are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CrumbRepr")]
pub struct Crumb {
    label: CompactString,
    heading: CompactString,
    #[serde(skip_serializing_if = "Option::is_none")]
    url_path: Option<CompactString>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    extra: Extra,
}

impl Crumb {
    /// Create a crumb with the heading set to the label, no link and no extra.
    pub fn new(label: impl Into<CompactString>) -> Self {
        let label = label.into();
        Self {
            heading: label.clone(),
            label,
            url_path: None,
            extra: Extra::new(),
        }
    }

    /// Create a crumb from optional attributes.
    ///
    /// A missing heading falls back to the label. A missing or empty url path
    /// means the crumb is not a link. A missing extra is an empty map.
    pub fn from_parts(
        label: impl Into<CompactString>,
        heading: Option<&str>,
        url_path: Option<&str>,
        extra: Option<Extra>,
    ) -> Self {
        let label = label.into();
        Self {
            heading: heading.map_or_else(|| label.clone(), CompactString::from),
            label,
            url_path: normalize_url_path(url_path.map(CompactString::from)),
            extra: extra.unwrap_or_default(),
        }
    }

    /// Replace the heading.
    pub fn with_heading(mut self, heading: impl Into<CompactString>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Replace the url path. An empty path removes the link.
    pub fn with_url_path(mut self, url_path: impl Into<CompactString>) -> Self {
        self.url_path = normalize_url_path(Some(url_path.into()));
        self
    }

    /// Replace the extra metadata.
    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }

    /// Insert a single metadata entry.
    pub fn with_extra_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Display text for the link.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Page heading text.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Target path, `None` when the crumb renders as plain text.
    pub fn url_path(&self) -> Option<&str> {
        self.url_path.as_deref()
    }

    /// Arbitrary metadata.
    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    /// Check if this crumb should render as a link.
    pub fn has_link(&self) -> bool {
        self.url_path.is_some()
    }
}

fn normalize_url_path(url_path: Option<CompactString>) -> Option<CompactString> {
    url_path.filter(|path| !path.is_empty())
}

/// Wire shape of a crumb, normalized into [`Crumb`] on deserialization.
#[derive(Deserialize)]
struct CrumbRepr {
    label: CompactString,
    #[serde(default)]
    heading: Option<CompactString>,
    #[serde(default)]
    url_path: Option<CompactString>,
    #[serde(default)]
    extra: Option<Extra>,
}

impl From<CrumbRepr> for Crumb {
    fn from(repr: CrumbRepr) -> Self {
        Self {
            heading: repr.heading.unwrap_or_else(|| repr.label.clone()),
            label: repr.label,
            url_path: normalize_url_path(repr.url_path),
            extra: repr.extra.unwrap_or_default(),
        }
    }
}
