//! Configuration loading and validation.
//!
//! A [`ConfigAccessor`] wraps an injected [`ConfigSource`] (in production a
//! [`JsonSource`] over `appsettings.json`) and offers scalar lookups plus
//! typed section binding with post-bind validation.
//!
//! # Module layout
//!
//! - **source** — the [`ConfigSource`] trait and the JSON-backed
//!   implementation; colon-delimited path navigation.
//! - **bind** — [`SectionReader`] and the [`BindSection`] trait: explicit
//!   per-type field mapping plus the optional validation hook.
//! - **types** — the `AzureAd` and `GraphApi` records with their invariants.
//! - **accessor** — [`ConfigAccessor`]: scalar lookups, generic `section`,
//!   and the guidance-wrapping typed accessors.
//! - **error** — the [`ConfigError`] taxonomy.

mod accessor;
mod bind;
mod error;
mod source;
mod types;

pub use accessor::{AZURE_AD_SECTION, ConfigAccessor, GRAPH_API_SECTION};
pub use bind::{BindError, BindSection, SectionReader};
pub use error::ConfigError;
pub use source::{ConfigSource, JsonSource};
pub use types::{AzureAdConfig, GraphApiConfig};
