//! Breadcrumb trails for site navigation.
//!
//! A [`Bread`] is an ordered, never-empty trail of [`Crumb`] entries. Index 0
//! is always the site crumb; every page below it is appended in order.
//!
//! ```rust
//! use breadcrumbs::{Bread, Crumb};
//!
//! let mut bread = Bread::new("Example");
//! bread.add_with("Docs", None, Some("/docs/"), None);
//! bread.add_crumb(Crumb::new("Installing").with_heading("Installing Example"));
//!
//! let labels: Vec<&str> = bread.iter().map(Crumb::label).collect();
//! assert_eq!(labels, ["Example", "Docs", "Installing"]);
//! assert!(!bread.current().has_link());
//! ```

mod bread;
mod config;
mod crumb;
mod error;

pub use bread::Bread;
pub use config::{SiteConfig, SiteConfigBuilder, SiteConfigBuilderError};
pub use crumb::{Crumb, Extra};
pub use error::{BreadError, Result};
