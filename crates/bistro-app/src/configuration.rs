use std::path::{Path, PathBuf};

use bistro_shared::const_config::client::CLIENT_DEFAULT_API_BASE_URL;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub client: ClientSettings,
    pub window: WindowSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ClientSettings {
    pub api_base_url: String,
    /// Folder the session is persisted in
    pub storage_dir: PathBuf,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct WindowSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub width: f32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub height: f32,
}

/// Loads `configuration/base.toml` and the file for the current environment
/// from the working directory, both are optional
pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    get_configuration_from(&base_path.join("configuration"), environment)
}

pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Configuration, config::ConfigError> {
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .set_default("client.api_base_url", CLIENT_DEFAULT_API_BASE_URL)?
        .set_default("client.storage_dir", "data")?
        .set_default("window.width", 1024.0)?
        .set_default("window.height", 720.0)?
        .add_source(config::File::from(configuration_directory.join("base.toml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_CLIENT__API_BASE_URL=http://10.0.0.5:3000` would set `Configuration.client.api_base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Configuration>()
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
