//! End-to-end configuration pipeline: a settings file on disk, loaded through
//! `JsonSource`, accessed through `ConfigAccessor`.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use graphmail_console::config::{ConfigAccessor, ConfigError, GraphApiConfig, JsonSource};

const TEST_SETTINGS: &str = r#"{
    "TestKey": "TestValue",
    "Logging": { "Level": "debug" },
    "AzureAd": {
        "ClientId": "test-client-id",
        "TenantId": "test-tenant-id",
        "RedirectUri": "http://localhost:9090",
        "Scopes": [
            "https://graph.microsoft.com/Mail.Read.Test",
            "https://graph.microsoft.com/User.Read.Test"
        ]
    },
    "GraphApi": {
        "BaseUrl": "https://graph.microsoft.com/test",
        "MaxRetries": 5,
        "RetryDelay": 2000
    }
}"#;

fn accessor() -> ConfigAccessor<JsonSource> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TEST_SETTINGS.as_bytes()).unwrap();
    let source = JsonSource::from_file(file.path()).unwrap();
    ConfigAccessor::new(source)
}

#[test]
fn value_returns_stored_scalar() {
    assert_eq!(accessor().value("TestKey").unwrap(), "TestValue");
}

#[test]
fn value_rejects_empty_key() {
    let err = accessor().value("").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidArgument("key")));
}

#[test]
fn value_on_missing_key_is_not_found() {
    let err = accessor().value("NonExistentKey").unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { ref path } if path == "NonExistentKey"));
}

#[test]
fn value_or_reads_logging_level_with_fallback() {
    let accessor = accessor();
    assert_eq!(accessor.value_or("Logging:Level", "info").unwrap(), "debug");
    assert_eq!(accessor.value_or("Logging:Format", "plain").unwrap(), "plain");
}

#[test]
fn section_binds_graph_api_record() {
    let graph: GraphApiConfig = accessor().section("GraphApi").unwrap();
    assert_eq!(graph.base_url, "https://graph.microsoft.com/test");
    assert_eq!(graph.max_retries, 5);
    assert_eq!(graph.retry_delay_ms, 2000);
}

#[test]
fn section_rejects_empty_name() {
    let err = accessor().section::<GraphApiConfig>("").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidArgument("sectionName")));
}

#[test]
fn section_on_missing_name_is_not_found() {
    let err = accessor()
        .section::<GraphApiConfig>("NonExistentSection")
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { ref path } if path == "NonExistentSection"));
}

#[test]
fn azure_ad_accessor_returns_full_record() {
    let azure = accessor().azure_ad().unwrap();
    assert_eq!(azure.client_id, "test-client-id");
    assert_eq!(azure.tenant_id, "test-tenant-id");
    assert_eq!(azure.redirect_uri, "http://localhost:9090");
    assert_eq!(azure.scopes.len(), 2);
    assert_eq!(azure.scopes[0], "https://graph.microsoft.com/Mail.Read.Test");
    assert_eq!(azure.scopes[1], "https://graph.microsoft.com/User.Read.Test");
}

#[test]
fn graph_api_accessor_returns_full_record() {
    let graph = accessor().graph_api().unwrap();
    assert_eq!(graph.base_url, "https://graph.microsoft.com/test");
    assert_eq!(graph.max_retries, 5);
    assert_eq!(graph.retry_delay_ms, 2000);
}

#[test]
fn missing_settings_file_errors() {
    let result = JsonSource::from_file(Path::new("/nonexistent/appsettings.json"));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("cannot read"));
}
