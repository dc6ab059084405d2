//! Section binding: explicit per-type mapping from a section's raw key/value
//! pairs into typed records, with an optional post-bind validation hook.

use thiserror::Error;

use super::error::ConfigError;
use super::source::ConfigSource;

/// Structural conversion failure during section binding.
///
/// Distinct from domain validation: a value that fails to convert (a
/// non-numeric retry count, say) is a bind error; a converted value that
/// breaks an invariant is a [`ConfigError::Validation`].
#[derive(Debug, Error)]
pub enum BindError {
    #[error("field '{field}' is not a valid integer: '{value}'")]
    InvalidInteger {
        field: String,
        value: String,
        #[source]
        cause: std::num::ParseIntError,
    },
}

/// Read-side view of one section handed to [`BindSection::bind`].
///
/// Field names match the section's child keys case-insensitively; lookups are
/// resolved against the child-key list fetched once at construction, so the
/// result is deterministic regardless of how the source orders its keys.
pub struct SectionReader<'a> {
    source: &'a dyn ConfigSource,
    section: &'a str,
    child_keys: Vec<String>,
}

impl<'a> SectionReader<'a> {
    pub(crate) fn new(source: &'a dyn ConfigSource, section: &'a str) -> Self {
        let child_keys = source.child_keys(section);
        Self {
            source,
            section,
            child_keys,
        }
    }

    pub fn section_name(&self) -> &str {
        self.section
    }

    /// Full path of the child key matching `field`, case-insensitively.
    fn field_path(&self, field: &str) -> Option<String> {
        self.child_keys
            .iter()
            .find(|key| key.eq_ignore_ascii_case(field))
            .map(|key| format!("{}:{}", self.section, key))
    }

    /// Raw string value of `field`, or `None` when absent.
    pub fn string(&self, field: &str) -> Option<String> {
        self.field_path(field)
            .and_then(|path| self.source.scalar(&path))
    }

    /// Integer value of `field`. An absent field is `Ok(None)`; a present but
    /// non-numeric value is a bind error carrying the parse failure.
    pub fn integer(&self, field: &str) -> Result<Option<i64>, BindError> {
        match self.string(field) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|cause| BindError::InvalidInteger {
                    field: field.to_string(),
                    value: raw,
                    cause,
                }),
        }
    }

    /// Ordered string sequence at `field`, read by positional index
    /// (`Section:Field:0`, `Section:Field:1`, …). `None` when absent.
    pub fn string_list(&self, field: &str) -> Option<Vec<String>> {
        let base = self.field_path(field)?;
        if !self.source.section_exists(&base) {
            return None;
        }
        let mut items = Vec::new();
        for index in 0.. {
            match self.source.scalar(&format!("{base}:{index}")) {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Some(items)
    }
}

/// Per-type section mapping — the call-site-declared replacement for
/// reflection-style binding.
///
/// `bind` performs structural conversion only. Domain constraints belong in
/// `validate`, which the accessor invokes after binding with the section name
/// so violations carry the right path; records without invariants keep the
/// default accepting implementation.
pub trait BindSection: Sized {
    fn bind(section: &SectionReader<'_>) -> Result<Self, BindError>;

    fn validate(&self, _section_name: &str) -> Result<(), ConfigError> {
        Ok(())
    }
}
