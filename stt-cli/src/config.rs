//! Configuration module
//!
//! Loads the connection settings once at start-up from command-line flags or
//! their environment variables, validates them, and hands an immutable
//! [`Config`] to every command handler.

use clap::Args;
use std::time::Duration;
use stt_client::{Credentials, SttClient};
use stt_core::poll::{DEFAULT_POLL_INTERVAL, PollConfig};
use thiserror::Error;

/// Global options shared by every command
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Service username (`apikey` for IAM credentials)
    #[arg(long, global = true, env = "USERNAME")]
    pub username: Option<String>,

    /// Service password (the IAM API key for IAM credentials)
    #[arg(long, global = true, env = "PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Base URL of the speech service instance
    #[arg(long, global = true, env = "STT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Id of the custom language model to work on
    #[arg(long, global = true, env = "LANGUAGE_ID")]
    pub language_id: Option<String>,

    /// Id of the custom acoustic model to work on
    #[arg(long, global = true, env = "ACOUSTIC_ID")]
    pub acoustic_id: Option<String>,

    /// Seconds between two status checks while waiting on the service
    #[arg(long, global = true, env = "STT_POLL_INTERVAL", default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    pub poll_interval: u64,

    /// Give up waiting on the service after this many seconds
    #[arg(long, global = true, env = "STT_MAX_WAIT")]
    pub max_wait: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true, env = "STT_INSECURE")]
    pub insecure: bool,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,
}

/// Configuration problems detected before any request is sent
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Please set your username in the environment variable USERNAME.\n\
         If you use IAM service credentials, set USERNAME to the string \"apikey\" \
         and set PASSWORD to the value of your IAM API key."
    )]
    MissingUsername,

    #[error(
        "Please set your password in the environment variable PASSWORD.\n\
         If you use IAM service credentials, set USERNAME to the string \"apikey\" \
         and set PASSWORD to the value of your IAM API key."
    )]
    MissingPassword,

    #[error(
        "Please set the environment variable STT_ENDPOINT to the URL specified in your service credentials."
    )]
    MissingEndpoint,

    #[error("STT_ENDPOINT must start with http:// or https:// (got '{0}')")]
    InvalidEndpoint(String),

    #[error(
        "Please set the id for your custom language model in the environment variable LANGUAGE_ID"
    )]
    MissingLanguageId,

    #[error(
        "Please set the id for your custom acoustic model in the environment variable ACOUSTIC_ID"
    )]
    MissingAcousticId,

    #[error("poll interval must be greater than 0")]
    ZeroPollInterval,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the speech service instance
    pub endpoint: String,
    pub credentials: Credentials,
    pub language_id: Option<String>,
    pub acoustic_id: Option<String>,
    /// Delay between status checks
    pub poll_interval: Duration,
    /// Upper bound on any wait for the service
    pub max_wait: Option<Duration>,
    pub insecure: bool,
    /// Print raw JSON instead of formatted output
    pub json: bool,
}

impl Config {
    /// Builds and validates the configuration from the parsed global options
    pub fn from_args(args: GlobalArgs) -> Result<Self, ConfigError> {
        let username = non_empty(args.username).ok_or(ConfigError::MissingUsername)?;
        let password = non_empty(args.password).ok_or(ConfigError::MissingPassword)?;
        let endpoint = non_empty(args.endpoint).ok_or(ConfigError::MissingEndpoint)?;

        let config = Self {
            endpoint,
            credentials: Credentials::new(username, password),
            language_id: non_empty(args.language_id),
            acoustic_id: non_empty(args.acoustic_id),
            poll_interval: Duration::from_secs(args.poll_interval),
            max_wait: args.max_wait.map(Duration::from_secs),
            insecure: args.insecure,
            json: args.json,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials.username.is_empty() {
            return Err(ConfigError::MissingUsername);
        }

        if self.credentials.password.is_empty() {
            return Err(ConfigError::MissingPassword);
        }

        if self.endpoint.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }

        Ok(())
    }

    /// Language model id, preferring an id given on the command line
    pub fn language_id<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str, ConfigError> {
        explicit
            .or(self.language_id.as_deref())
            .ok_or(ConfigError::MissingLanguageId)
    }

    /// Acoustic model id, preferring an id given on the command line
    pub fn acoustic_id<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str, ConfigError> {
        explicit
            .or(self.acoustic_id.as_deref())
            .ok_or(ConfigError::MissingAcousticId)
    }

    /// Poller timing derived from the configuration
    pub fn poll_config(&self) -> PollConfig {
        let config = PollConfig::new(self.poll_interval);
        match self.max_wait {
            Some(max_wait) => config.with_max_wait(max_wait),
            None => config,
        }
    }

    /// Creates the service client
    pub fn client(&self) -> anyhow::Result<SttClient> {
        let http_client = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.insecure)
            .build()?;

        Ok(SttClient::with_client(
            self.endpoint.clone(),
            self.credentials.clone(),
            http_client,
        ))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GlobalArgs {
        GlobalArgs {
            username: Some("apikey".to_string()),
            password: Some("secret".to_string()),
            endpoint: Some("https://stt.example.com".to_string()),
            language_id: None,
            acoustic_id: None,
            poll_interval: 10,
            max_wait: None,
            insecure: false,
            json: false,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = Config::from_args(args()).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.poll_config(), PollConfig::new(Duration::from_secs(10)));
        assert!(config.client().is_ok());
    }

    #[test]
    fn test_missing_credentials() {
        let mut missing_user = args();
        missing_user.username = None;
        assert_eq!(
            Config::from_args(missing_user).unwrap_err(),
            ConfigError::MissingUsername
        );

        let mut blank_password = args();
        blank_password.password = Some("  ".to_string());
        assert_eq!(
            Config::from_args(blank_password).unwrap_err(),
            ConfigError::MissingPassword
        );
    }

    #[test]
    fn test_endpoint_validation() {
        let mut missing = args();
        missing.endpoint = None;
        assert_eq!(
            Config::from_args(missing).unwrap_err(),
            ConfigError::MissingEndpoint
        );

        let mut invalid = args();
        invalid.endpoint = Some("stt.example.com".to_string());
        assert!(matches!(
            Config::from_args(invalid).unwrap_err(),
            ConfigError::InvalidEndpoint(_)
        ));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut zero = args();
        zero.poll_interval = 0;
        assert_eq!(
            Config::from_args(zero).unwrap_err(),
            ConfigError::ZeroPollInterval
        );
    }

    #[test]
    fn test_model_ids() {
        let mut with_ids = args();
        with_ids.language_id = Some("lm-env".to_string());
        let config = Config::from_args(with_ids).unwrap();

        assert_eq!(config.language_id(None).unwrap(), "lm-env");
        assert_eq!(config.language_id(Some("lm-cli")).unwrap(), "lm-cli");
        assert_eq!(
            config.acoustic_id(None).unwrap_err(),
            ConfigError::MissingAcousticId
        );
    }

    #[test]
    fn test_max_wait_bounds_polling() {
        let mut bounded = args();
        bounded.max_wait = Some(600);
        let config = Config::from_args(bounded).unwrap();
        assert_eq!(
            config.poll_config().max_wait,
            Some(Duration::from_secs(600))
        );
    }

    #[test]
    fn test_missing_id_message_names_variable() {
        assert!(
            ConfigError::MissingLanguageId
                .to_string()
                .contains("LANGUAGE_ID")
        );
    }
}
