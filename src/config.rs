use std::path::PathBuf;

use secrecy::Secret;
use serde_aux::prelude::deserialize_number_from_string;

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

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

/// Credentials for the outbound SMTP relay. The relay host and port themselves
/// are fixed (see `crate::mail::smtp`); only the account details vary per
/// deployment and must be supplied through the environment layer
/// (`APP_MAIL__USERNAME` and friends) - there are no production defaults.
#[derive(serde::Deserialize, Clone)]
pub struct MailSettings {
    pub username: String,
    pub password: Secret<String>,
    pub sender: String,
}

#[derive(serde::Deserialize)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Directory served under `/static`. The resume download is expected at
    /// `<static_dir>/assets/resume.pdf`.
    pub static_dir: PathBuf,
}

#[derive(serde::Deserialize)]
pub struct Configuration {
    pub app: AppConfig,
    pub mail: MailSettings,
}

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    // initialize our configuration reader
    let mut settings = config::Config::default();

    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Read in default configuration
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    // Read in layer environment specific file.
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // Environment variables (e.g. APP_MAIL__PASSWORD) win over every file layer.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    // try converting settings into `Configuration` object.
    return settings.try_into();
}
