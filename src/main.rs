//! Office 365 email integration console — entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load appsettings.json into the config source
//!   3. Init logger at the configured (or default) level
//!   4. Self-test both typed configuration sections and report

use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};

use graphmail_console::{
    config::{ConfigAccessor, ConfigError, JsonSource},
    error::AppError,
    logger,
};

const SETTINGS_FILE: &str = "appsettings.json";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let source = JsonSource::from_file(Path::new(SETTINGS_FILE))?;
    let accessor = ConfigAccessor::new(source);

    let log_level = accessor.value_or("Logging:Level", "info")?;
    logger::init(&log_level)?;

    println!("=================================");
    println!(" OFFICE 365 EMAIL INTEGRATION");
    println!("=================================");
    println!("Status: [Not Authenticated]");
    println!();

    match accessor.azure_ad() {
        Ok(azure) => {
            info!(client_id = %azure.client_id, tenant_id = %azure.tenant_id, "Azure AD configuration loaded");
            println!("Azure AD client id:    {}", azure.client_id);
            println!("Azure AD tenant id:    {}", azure.tenant_id);
            println!("Azure AD redirect URI: {}", azure.redirect_uri);
            println!("Azure AD scopes:       {}", azure.scopes.join(", "));
            println!("Azure AD configuration is valid.");
        }
        Err(e) => report_config_error("Azure AD", &e),
    }
    println!();

    match accessor.graph_api() {
        Ok(graph) => {
            info!(base_url = %graph.base_url, "Graph API configuration loaded");
            println!("Graph API base URL:    {}", graph.base_url);
            println!("Graph API max retries: {}", graph.max_retries);
            println!("Graph API retry delay: {} ms", graph.retry_delay_ms);
            println!("Graph API configuration is valid.");
        }
        Err(e) => report_config_error("Graph API", &e),
    }

    // Demonstrate the failure path with a key that is never present.
    if let Err(e) = accessor.value("NonExistentSection:NonExistentKey") {
        println!();
        println!("Expected error (demonstrating error handling): {e}");
    }

    println!();
    println!("Configuration self-test completed.");
    Ok(())
}

fn report_config_error(what: &str, e: &ConfigError) {
    error!(path = e.path().unwrap_or_default(), "{what} configuration error");
    println!("{what} configuration error: {e}");
    if let Some(path) = e.path() {
        println!("Configuration path: {path}");
    }
}
