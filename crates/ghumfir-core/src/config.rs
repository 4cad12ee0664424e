use crate::error::{GhumfirError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Which login methods the session authenticator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginMethods {
    /// Username/password against the local credential store
    pub local: bool,
    /// Google OAuth2 authorization-code sign-in
    pub google: bool,
}

impl Default for LoginMethods {
    fn default() -> Self {
        Self {
            local: true,
            google: true,
        }
    }
}

/// External identity provider settings
///
/// Endpoint defaults point at Google; overriding them is mainly useful for
/// tests, which stand up a stub provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub client_id: ConfigValue<String>,
    pub client_secret: ConfigValue<String>,
    pub redirect_url: ConfigValue<String>,
    pub authorize_endpoint: ConfigValue<String>,
    pub token_endpoint: ConfigValue<String>,
    pub userinfo_endpoint: ConfigValue<String>,
}

/// Layered configuration for Ghumfir
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub places_path: ConfigValue<PathBuf>,
    pub translations_path: ConfigValue<PathBuf>,
    pub users_path: ConfigValue<PathBuf>,
    pub login_methods: ConfigValue<LoginMethods>,
    pub provider: ProviderConfig,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            places_path: ConfigValue::new(PathBuf::from("places.json"), ConfigSource::Default),
            translations_path: ConfigValue::new(
                PathBuf::from("translations.json"),
                ConfigSource::Default,
            ),
            users_path: ConfigValue::new(PathBuf::from("users.json"), ConfigSource::Default),
            login_methods: ConfigValue::new(LoginMethods::default(), ConfigSource::Default),
            provider: ProviderConfig {
                client_id: ConfigValue::new(String::new(), ConfigSource::Default),
                client_secret: ConfigValue::new(String::new(), ConfigSource::Default),
                redirect_url: ConfigValue::new(String::new(), ConfigSource::Default),
                authorize_endpoint: ConfigValue::new(
                    "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
                    ConfigSource::Default,
                ),
                token_endpoint: ConfigValue::new(
                    "https://oauth2.googleapis.com/token".to_string(),
                    ConfigSource::Default,
                ),
                userinfo_endpoint: ConfigValue::new(
                    "https://openidconnect.googleapis.com/v1/userinfo".to_string(),
                    ConfigSource::Default,
                ),
            },
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GhumfirError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GhumfirError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(places) = file_config.places_path {
            self.places_path.update(places, ConfigSource::File);
        }

        if let Some(translations) = file_config.translations_path {
            self.translations_path.update(translations, ConfigSource::File);
        }

        if let Some(users) = file_config.users_path {
            self.users_path.update(users, ConfigSource::File);
        }

        if let Some(methods) = file_config.login_methods {
            let parsed = parse_login_methods(&methods)?;
            self.login_methods.update(parsed, ConfigSource::File);
        }

        if let Some(google) = file_config.google {
            if let Some(client_id) = google.client_id {
                self.provider.client_id.update(client_id, ConfigSource::File);
            }
            if let Some(client_secret) = google.client_secret {
                self.provider.client_secret.update(client_secret, ConfigSource::File);
            }
            if let Some(redirect_url) = google.redirect_url {
                self.provider.redirect_url.update(redirect_url, ConfigSource::File);
            }
            if let Some(authorize_endpoint) = google.authorize_endpoint {
                self.provider.authorize_endpoint.update(authorize_endpoint, ConfigSource::File);
            }
            if let Some(token_endpoint) = google.token_endpoint {
                self.provider.token_endpoint.update(token_endpoint, ConfigSource::File);
            }
            if let Some(userinfo_endpoint) = google.userinfo_endpoint {
                self.provider.userinfo_endpoint.update(userinfo_endpoint, ConfigSource::File);
            }
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GHUMFIR_PLACES
        if let Ok(places) = env::var("GHUMFIR_PLACES") {
            self.places_path.update(PathBuf::from(places), ConfigSource::Environment);
        }

        // GHUMFIR_TRANSLATIONS
        if let Ok(translations) = env::var("GHUMFIR_TRANSLATIONS") {
            self.translations_path.update(PathBuf::from(translations), ConfigSource::Environment);
        }

        // GHUMFIR_USERS
        if let Ok(users) = env::var("GHUMFIR_USERS") {
            self.users_path.update(PathBuf::from(users), ConfigSource::Environment);
        }

        // GHUMFIR_LOGIN_METHODS
        if let Ok(methods_str) = env::var("GHUMFIR_LOGIN_METHODS") {
            match parse_login_methods(&methods_str) {
                Ok(methods) => self.login_methods.update(methods, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GHUMFIR_LOGIN_METHODS value '{}': expected a comma-separated subset of local, google",
                    methods_str
                ),
            }
        }

        // GHUMFIR_GOOGLE_CLIENT_ID
        if let Ok(client_id) = env::var("GHUMFIR_GOOGLE_CLIENT_ID") {
            self.provider.client_id.update(client_id, ConfigSource::Environment);
        }

        // GHUMFIR_GOOGLE_CLIENT_SECRET
        if let Ok(client_secret) = env::var("GHUMFIR_GOOGLE_CLIENT_SECRET") {
            self.provider.client_secret.update(client_secret, ConfigSource::Environment);
        }

        // GHUMFIR_GOOGLE_REDIRECT_URL
        if let Ok(redirect_url) = env::var("GHUMFIR_GOOGLE_REDIRECT_URL") {
            self.provider.redirect_url.update(redirect_url, ConfigSource::Environment);
        }

        self
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "places_path".to_string(),
            (self.places_path.value.display().to_string(), self.places_path.source),
        );

        map.insert(
            "translations_path".to_string(),
            (self.translations_path.value.display().to_string(), self.translations_path.source),
        );

        map.insert(
            "users_path".to_string(),
            (self.users_path.value.display().to_string(), self.users_path.source),
        );

        map.insert(
            "login_methods".to_string(),
            (format_login_methods(&self.login_methods.value), self.login_methods.source),
        );

        map.insert(
            "google.client_id".to_string(),
            (self.provider.client_id.value.clone(), self.provider.client_id.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    places_path: Option<PathBuf>,
    translations_path: Option<PathBuf>,
    users_path: Option<PathBuf>,
    login_methods: Option<String>,
    google: Option<FileProviderConfig>,
}

/// Provider section of the TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileProviderConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_url: Option<String>,
    authorize_endpoint: Option<String>,
    token_endpoint: Option<String>,
    userinfo_endpoint: Option<String>,
}

/// Parse enabled login methods from a comma-separated string
pub fn parse_login_methods(s: &str) -> Result<LoginMethods> {
    let mut methods = LoginMethods {
        local: false,
        google: false,
    };

    for part in s.split(',') {
        match part.trim().to_lowercase().as_str() {
            "local" => methods.local = true,
            "google" => methods.google = true,
            "" => {}
            other => {
                return Err(GhumfirError::ConfigInvalid {
                    key: "login_methods".to_string(),
                    reason: format!("Unknown login method: {}. Use local or google", other),
                })
            }
        }
    }

    if !methods.local && !methods.google {
        return Err(GhumfirError::ConfigInvalid {
            key: "login_methods".to_string(),
            reason: "At least one login method must be enabled".to_string(),
        });
    }

    Ok(methods)
}

fn format_login_methods(methods: &LoginMethods) -> String {
    let mut parts = Vec::new();
    if methods.local {
        parts.push("local");
    }
    if methods.google {
        parts.push("google");
    }
    parts.join(",")
}
