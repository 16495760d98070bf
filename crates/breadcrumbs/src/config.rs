//! Site configuration for the root crumb.

use compact_str::CompactString;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::crumb::{Crumb, Extra};

/// Attributes of the site crumb that roots every trail.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct SiteConfig {
    /// Site name, used as the root crumb label.
    pub site_name: CompactString,

    /// Path of the site root.
    #[builder(default = "default_url_path()")]
    #[serde(default = "default_url_path")]
    pub url_path: CompactString,

    /// Heading for the site root (None = site name).
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    pub heading: Option<CompactString>,

    /// Metadata attached to the root crumb.
    #[builder(default)]
    #[serde(default)]
    pub extra: Extra,
}

fn default_url_path() -> CompactString {
    CompactString::from("/")
}

impl SiteConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.site_name.is_none() {
            return Err("Site name is required".to_string());
        }
        Ok(())
    }
}

impl SiteConfig {
    /// Create a new site config builder.
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }

    /// Create a config with the default url path and no heading or extra.
    pub fn new(site_name: impl Into<CompactString>) -> Self {
        Self {
            site_name: site_name.into(),
            url_path: default_url_path(),
            heading: None,
            extra: Extra::new(),
        }
    }

    /// Build the root crumb described by this config.
    pub fn site_crumb(&self) -> Crumb {
        Crumb::from_parts(
            self.site_name.clone(),
            self.heading.as_deref(),
            Some(self.url_path.as_str()),
            Some(self.extra.clone()),
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("")
    }
}
