use crate::error::Result;
use crate::ui;
use api_client::{AuthClient, ClientConfig};

/// Print the auth service URL as the auth client will use it
pub fn execute(config_path: Option<String>) -> Result<()> {
    let config = ClientConfig::load(config_path.as_deref())?;
    let client = AuthClient::new(&config.auth)?;

    if client.url().is_empty() {
        ui::warning_message("AUTH_URL is not set");
    }
    if client.public_key().is_empty() {
        ui::warning_message("AUTH_PUBLIC_KEY is not set");
    }

    ui::info_message(&format!("Auth endpoint: {}", client.url()));
    Ok(())
}
