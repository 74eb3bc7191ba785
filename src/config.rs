//! Application configuration loaded from environment variables.
//!
//! The Firebase project settings were historically embedded in the client
//! source; here they are injected via the environment and validated before
//! any connection is attempted.

use std::env;

/// Firebase project settings, loaded once at startup.
///
/// All six fields are required and must belong to the same Firebase project;
/// [`FirebaseConfig::validate`] checks the pairing.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Web API key (public identifier, not a secret)
    pub api_key: String,
    /// Auth domain, `<project-id>.firebaseapp.com`
    pub auth_domain: String,
    /// GCP/Firebase project ID
    pub project_id: String,
    /// Default storage bucket, `<project-id>.firebasestorage.app`
    pub storage_bucket: String,
    /// Cloud Messaging sender ID
    pub messaging_sender_id: String,
    /// App ID, `1:<sender-id>:web:<hash>`
    pub app_id: String,
}

impl FirebaseConfig {
    /// Check that all fields point at the same Firebase project.
    ///
    /// A config assembled from mismatched projects connects fine but then
    /// fails at the first operation, so reject it up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain_prefix = format!("{}.", self.project_id);
        if !self.auth_domain.starts_with(&domain_prefix) {
            return Err(ConfigError::Mismatched("FIREBASE_AUTH_DOMAIN"));
        }
        if !self.storage_bucket.starts_with(&domain_prefix) {
            return Err(ConfigError::Mismatched("FIREBASE_STORAGE_BUCKET"));
        }
        if !self
            .app_id
            .contains(&format!(":{}:", self.messaging_sender_id))
        {
            return Err(ConfigError::Mismatched("FIREBASE_APP_ID"));
        }
        Ok(())
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Firebase project settings
    pub firebase: FirebaseConfig,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Base path the view routes are mounted under
    pub base_url: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            firebase: FirebaseConfig {
                api_key: "test_api_key".to_string(),
                auth_domain: "relic-test.firebaseapp.com".to_string(),
                project_id: "relic-test".to_string(),
                storage_bucket: "relic-test.firebasestorage.app".to_string(),
                messaging_sender_id: "000000000000".to_string(),
                app_id: "1:000000000000:web:0000deadbeef".to_string(),
            },
            frontend_url: "http://localhost:5173".to_string(),
            base_url: "/".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The six `FIREBASE_*` variables are required; server settings fall
    /// back to development defaults. A `.env` file is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let firebase = FirebaseConfig {
            api_key: require("FIREBASE_API_KEY")?,
            auth_domain: require("FIREBASE_AUTH_DOMAIN")?,
            project_id: require("FIREBASE_PROJECT_ID")?,
            storage_bucket: require("FIREBASE_STORAGE_BUCKET")?,
            messaging_sender_id: require("FIREBASE_MESSAGING_SENDER_ID")?,
            app_id: require("FIREBASE_APP_ID")?,
        };
        firebase.validate()?;

        Ok(Self {
            firebase,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "/".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .map_err(|_| ConfigError::Missing(name))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("{0} does not belong to the configured Firebase project")]
    Mismatched(&'static str),

    #[error("Invalid base path: {0}")]
    InvalidBasePath(String),
}
