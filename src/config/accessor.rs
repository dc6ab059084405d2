//! Layered configuration access over a [`ConfigSource`].
//!
//! Every lookup re-queries the source — nothing is cached between calls, so
//! a source that reloads its backing file is observed fresh each time.

use super::bind::{BindSection, SectionReader};
use super::error::ConfigError;
use super::source::ConfigSource;
use super::types::{AzureAdConfig, GraphApiConfig};

pub const AZURE_AD_SECTION: &str = "AzureAd";
pub const GRAPH_API_SECTION: &str = "GraphApi";

/// Scalar and typed-section access over an injected settings source.
pub struct ConfigAccessor<S> {
    source: S,
}

impl<S: ConfigSource> ConfigAccessor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Required scalar lookup.
    ///
    /// A blank `key` is a usage defect (`InvalidArgument`); a missing key is
    /// `NotFound`; a present-but-blank value is `EmptyValue`.
    pub fn value(&self, key: &str) -> Result<String, ConfigError> {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidArgument("key"));
        }
        match self.source.scalar(key) {
            None => Err(ConfigError::NotFound {
                path: key.to_string(),
            }),
            Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue {
                path: key.to_string(),
            }),
            Some(value) => Ok(value),
        }
    }

    /// Defaulted scalar lookup. Never fails on a missing key.
    ///
    /// A stored blank value counts as found and is returned as-is, unlike
    /// [`value`](Self::value) which rejects it — observed behaviour of the
    /// provider this replaces, preserved rather than normalised.
    pub fn value_or(&self, key: &str, default: &str) -> Result<String, ConfigError> {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidArgument("key"));
        }
        Ok(self
            .source
            .scalar(key)
            .unwrap_or_else(|| default.to_string()))
    }

    /// Bind the section named `section_name` into a `T` and validate it.
    ///
    /// Conversion failures inside `bind` are wrapped as [`ConfigError::Bind`]
    /// with the section path; validation errors already carry their own field
    /// path and propagate unchanged.
    pub fn section<T: BindSection>(&self, section_name: &str) -> Result<T, ConfigError> {
        if section_name.trim().is_empty() {
            return Err(ConfigError::InvalidArgument("sectionName"));
        }
        if !self.source.section_exists(section_name) {
            return Err(ConfigError::NotFound {
                path: section_name.to_string(),
            });
        }
        let reader = SectionReader::new(&self.source, section_name);
        let record = T::bind(&reader).map_err(|cause| ConfigError::Bind {
            path: section_name.to_string(),
            cause,
        })?;
        record.validate(section_name)?;
        Ok(record)
    }

    /// The `AzureAd` section, with corrective guidance attached to failures.
    pub fn azure_ad(&self) -> Result<AzureAdConfig, ConfigError> {
        self.section(AZURE_AD_SECTION).map_err(|e| {
            let message = format!(
                "Azure AD configuration error: {e}. Please ensure your appsettings.json \
                 contains a valid 'AzureAd' section with ClientId, TenantId, RedirectUri, \
                 and Scopes."
            );
            e.into_guidance(AZURE_AD_SECTION, message)
        })
    }

    /// The `GraphApi` section, with corrective guidance attached to failures.
    pub fn graph_api(&self) -> Result<GraphApiConfig, ConfigError> {
        self.section(GRAPH_API_SECTION).map_err(|e| {
            let message = format!(
                "Graph API configuration error: {e}. Please ensure your appsettings.json \
                 contains a valid 'GraphApi' section with BaseUrl, MaxRetries, and RetryDelay."
            );
            e.into_guidance(GRAPH_API_SECTION, message)
        })
    }
}
