//! Client configuration.

use clap::Args;

use crate::rest::RestConfig;

/// Connection settings for the marketplace API, taken from flags or the
/// environment (`MERCADO_API_URL`, `MERCADO_API_TOKEN`).
#[derive(Debug, Clone, Args)]
pub struct ApiSettings {
    /// Marketplace API base URL
    #[arg(long, env = "MERCADO_API_URL")]
    pub api_url: String,

    /// Bearer token for authenticated endpoints
    #[arg(long, env = "MERCADO_API_TOKEN")]
    pub api_token: Option<String>,
}

impl From<ApiSettings> for RestConfig {
    fn from(settings: ApiSettings) -> Self {
        Self {
            base_url: settings.api_url,
            token: settings.api_token,
        }
    }
}
