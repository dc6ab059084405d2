//! Typed records for the fixed application sections.

use super::bind::{BindError, BindSection, SectionReader};
use super::error::ConfigError;

fn missing(section: &str, field: &str) -> ConfigError {
    ConfigError::Validation {
        message: format!("'{section}:{field}' is missing or empty"),
        path: format!("{section}:{field}"),
    }
}

fn negative(section: &str, field: &str) -> ConfigError {
    ConfigError::Validation {
        message: format!("'{section}:{field}' must be a non-negative value"),
        path: format!("{section}:{field}"),
    }
}

/// `AzureAd` section: app-registration settings for the sign-in flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AzureAdConfig {
    pub client_id: String,
    pub tenant_id: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

impl BindSection for AzureAdConfig {
    fn bind(section: &SectionReader<'_>) -> Result<Self, BindError> {
        Ok(Self {
            client_id: section.string("ClientId").unwrap_or_default(),
            tenant_id: section.string("TenantId").unwrap_or_default(),
            redirect_uri: section.string("RedirectUri").unwrap_or_default(),
            scopes: section.string_list("Scopes").unwrap_or_default(),
        })
    }

    /// Checks run in a fixed order so the first reported violation is
    /// deterministic: ClientId, TenantId, RedirectUri, Scopes presence,
    /// then each scope entry.
    fn validate(&self, section_name: &str) -> Result<(), ConfigError> {
        if self.client_id.trim().is_empty() {
            return Err(missing(section_name, "ClientId"));
        }
        if self.tenant_id.trim().is_empty() {
            return Err(missing(section_name, "TenantId"));
        }
        if self.redirect_uri.trim().is_empty() {
            return Err(missing(section_name, "RedirectUri"));
        }
        if self.scopes.is_empty() {
            return Err(missing(section_name, "Scopes"));
        }
        if self.scopes.iter().any(|scope| scope.trim().is_empty()) {
            return Err(ConfigError::Validation {
                message: format!("'{section_name}:Scopes' contains an empty scope"),
                path: format!("{section_name}:Scopes"),
            });
        }
        Ok(())
    }
}

/// `GraphApi` section: Microsoft Graph endpoint and retry policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphApiConfig {
    pub base_url: String,
    pub max_retries: i64,
    /// Delay between retry attempts, in milliseconds (source key `RetryDelay`).
    pub retry_delay_ms: i64,
}

impl BindSection for GraphApiConfig {
    fn bind(section: &SectionReader<'_>) -> Result<Self, BindError> {
        Ok(Self {
            base_url: section.string("BaseUrl").unwrap_or_default(),
            max_retries: section.integer("MaxRetries")?.unwrap_or_default(),
            retry_delay_ms: section.integer("RetryDelay")?.unwrap_or_default(),
        })
    }

    /// Check order: BaseUrl, MaxRetries, RetryDelay.
    fn validate(&self, section_name: &str) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(missing(section_name, "BaseUrl"));
        }
        if self.max_retries < 0 {
            return Err(negative(section_name, "MaxRetries"));
        }
        if self.retry_delay_ms < 0 {
            return Err(negative(section_name, "RetryDelay"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_azure() -> AzureAdConfig {
        AzureAdConfig {
            client_id: "client".into(),
            tenant_id: "tenant".into(),
            redirect_uri: "http://localhost:9090".into(),
            scopes: vec!["Mail.Read".into(), "User.Read".into()],
        }
    }

    fn valid_graph() -> GraphApiConfig {
        GraphApiConfig {
            base_url: "https://graph.microsoft.com/v1.0".into(),
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }

    #[test]
    fn valid_azure_passes() {
        assert!(valid_azure().validate("AzureAd").is_ok());
    }

    #[test]
    fn blank_client_id_reported_first() {
        // Everything blank: the ClientId check must win.
        let config = AzureAdConfig::default();
        let err = config.validate("AzureAd").unwrap_err();
        assert_eq!(err.path(), Some("AzureAd:ClientId"));
    }

    #[test]
    fn blank_tenant_id_after_client_id() {
        let config = AzureAdConfig {
            tenant_id: "  ".into(),
            ..valid_azure()
        };
        let err = config.validate("AzureAd").unwrap_err();
        assert_eq!(err.path(), Some("AzureAd:TenantId"));
    }

    #[test]
    fn blank_redirect_uri_reported() {
        let config = AzureAdConfig {
            redirect_uri: String::new(),
            ..valid_azure()
        };
        let err = config.validate("AzureAd").unwrap_err();
        assert_eq!(err.path(), Some("AzureAd:RedirectUri"));
    }

    #[test]
    fn empty_scopes_reported() {
        let config = AzureAdConfig {
            scopes: Vec::new(),
            ..valid_azure()
        };
        let err = config.validate("AzureAd").unwrap_err();
        assert_eq!(err.path(), Some("AzureAd:Scopes"));
        assert!(err.to_string().contains("missing or empty"));
    }

    #[test]
    fn blank_scope_entry_reported() {
        let config = AzureAdConfig {
            scopes: vec!["Mail.Read".into(), "   ".into()],
            ..valid_azure()
        };
        let err = config.validate("AzureAd").unwrap_err();
        assert_eq!(err.path(), Some("AzureAd:Scopes"));
        assert!(err.to_string().contains("empty scope"));
    }

    #[test]
    fn valid_graph_passes() {
        assert!(valid_graph().validate("GraphApi").is_ok());
    }

    #[test]
    fn blank_base_url_reported() {
        let config = GraphApiConfig {
            base_url: String::new(),
            ..valid_graph()
        };
        let err = config.validate("GraphApi").unwrap_err();
        assert_eq!(err.path(), Some("GraphApi:BaseUrl"));
    }

    #[test]
    fn negative_max_retries_reported() {
        let config = GraphApiConfig {
            max_retries: -1,
            ..valid_graph()
        };
        let err = config.validate("GraphApi").unwrap_err();
        assert_eq!(err.path(), Some("GraphApi:MaxRetries"));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn negative_retry_delay_reported() {
        let config = GraphApiConfig {
            retry_delay_ms: -250,
            ..valid_graph()
        };
        let err = config.validate("GraphApi").unwrap_err();
        assert_eq!(err.path(), Some("GraphApi:RetryDelay"));
    }

    #[test]
    fn zero_retries_and_delay_are_valid() {
        let config = GraphApiConfig {
            max_retries: 0,
            retry_delay_ms: 0,
            ..valid_graph()
        };
        assert!(config.validate("GraphApi").is_ok());
    }
}
