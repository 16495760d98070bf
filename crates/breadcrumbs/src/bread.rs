//! Breadcrumb trail container.

use std::ops::Index;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::crumb::{Crumb, Extra};
use crate::error::{BreadError, Result};

/// Ordered trail of crumbs, rooted at the site crumb.
///
/// A trail is never empty: index 0 always holds the site crumb and every
/// further crumb is appended after it in the order added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Crumb>", into = "Vec<Crumb>")]
pub struct Bread {
    crumbs: Vec<Crumb>,
}

impl Bread {
    /// Create a trail holding only the site crumb, linked to `/`.
    pub fn new(site_name: impl Into<CompactString>) -> Self {
        Self::from_config(&SiteConfig::new(site_name))
    }

    /// Create a trail whose site crumb is described by `config`.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::from_crumb(config.site_crumb())
    }

    /// Create a trail whose only crumb is `crumb`.
    pub fn from_crumb(crumb: Crumb) -> Self {
        Self {
            crumbs: vec![crumb],
        }
    }

    /// Create a trail from a non-empty sequence of crumbs, keeping their order.
    pub fn from_crumbs(crumbs: impl IntoIterator<Item = Crumb>) -> Result<Self> {
        let crumbs: Vec<Crumb> = crumbs.into_iter().collect();
        if crumbs.is_empty() {
            tracing::debug!(target: "breadcrumbs", "rejected empty crumb sequence");
            return Err(BreadError::empty_trail());
        }
        tracing::debug!(target: "breadcrumbs", count = crumbs.len(), "built trail from crumbs");
        Ok(Self { crumbs })
    }

    /// Append a crumb with the given label and default attributes.
    pub fn add(&mut self, label: impl Into<CompactString>) {
        self.add_crumb(Crumb::new(label));
    }

    /// Append a crumb built from optional attributes.
    ///
    /// Defaults follow [`Crumb::from_parts`].
    pub fn add_with(
        &mut self,
        label: impl Into<CompactString>,
        heading: Option<&str>,
        url_path: Option<&str>,
        extra: Option<Extra>,
    ) {
        self.add_crumb(Crumb::from_parts(label, heading, url_path, extra));
    }

    /// Append an existing crumb.
    pub fn add_crumb(&mut self, crumb: Crumb) {
        tracing::trace!(
            target: "breadcrumbs",
            label = crumb.label(),
            position = self.crumbs.len(),
            "appending crumb"
        );
        self.crumbs.push(crumb);
    }

    /// Get the crumb at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Crumb> {
        self.crumbs.get(index)
    }

    /// Get the crumb at `index`, failing past the end of the trail.
    pub fn crumb(&self, index: usize) -> Result<&Crumb> {
        self.crumbs
            .get(index)
            .ok_or_else(|| BreadError::out_of_bounds(index, self.crumbs.len()))
    }

    /// The site crumb at index 0.
    pub fn site(&self) -> &Crumb {
        &self.crumbs[0]
    }

    /// The last crumb, i.e. the page being viewed.
    pub fn current(&self) -> &Crumb {
        &self.crumbs[self.crumbs.len() - 1]
    }

    /// Number of crumbs in the trail.
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Always false; a trail holds at least the site crumb.
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Iterate over the crumbs, site crumb first.
    pub fn iter(&self) -> std::slice::Iter<'_, Crumb> {
        self.crumbs.iter()
    }

    /// View the crumbs as a slice.
    pub fn as_slice(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Consume the trail, returning its crumbs.
    pub fn into_crumbs(self) -> Vec<Crumb> {
        self.crumbs
    }
}

impl Index<usize> for Bread {
    type Output = Crumb;

    fn index(&self, index: usize) -> &Crumb {
        &self.crumbs[index]
    }
}

impl<'a> IntoIterator for &'a Bread {
    type Item = &'a Crumb;
    type IntoIter = std::slice::Iter<'a, Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Bread {
    type Item = Crumb;
    type IntoIter = std::vec::IntoIter<Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.into_iter()
    }
}

impl Extend<Crumb> for Bread {
    fn extend<I: IntoIterator<Item = Crumb>>(&mut self, iter: I) {
        for crumb in iter {
            self.add_crumb(crumb);
        }
    }
}

impl TryFrom<Vec<Crumb>> for Bread {
    type Error = BreadError;

    fn try_from(crumbs: Vec<Crumb>) -> Result<Self> {
        Self::from_crumbs(crumbs)
    }
}

impl From<Bread> for Vec<Crumb> {
    fn from(bread: Bread) -> Self {
        bread.crumbs
    }
}
