use roster_business::DEFAULT_USERS_URL;
use roster_utils::version_info::RuntimeEnv;
use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub enum Env {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "prod")]
    Prod,
}

impl From<&Env> for RuntimeEnv {
    fn from(env: &Env) -> Self {
        match env {
            Env::Local => RuntimeEnv::Local,
            Env::Test => RuntimeEnv::Test,
            Env::Prod => RuntimeEnv::Prod,
        }
    }
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Test => write!(f, "test"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

// The final, validated configuration struct.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    server_addr: String,
    port: u16,
    users_api_url: String,
    // Enables the Stackdriver/Cloud Trace logging pipeline when set.
    google_cloud_project: Option<String>,
}

// Environment variables as read, before defaults are applied.
#[derive(Deserialize)]
struct RawConfig {
    env: Env,
    server_addr: Option<String>,
    port: Option<u16>,
    users_api_url: Option<String>,
    google_cloud_project: Option<String>,
}

impl Config {
    /// Create a test configuration with default values.
    ///
    /// Available to integration tests as well; not for production use.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Test,
            server_addr: "127.0.0.1".to_owned(),
            port: 8080,
            users_api_url: DEFAULT_USERS_URL.to_owned(),
            google_cloud_project: None,
        }
    }

    pub fn environment(&self) -> &Env {
        &self.env
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Endpoint the page loads its users from.
    pub fn users_api_url(&self) -> &str {
        &self.users_api_url
    }

    pub fn google_cloud_project(&self) -> Option<&str> {
        self.google_cloud_project.as_deref()
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    /// Initializes configuration by reading from environment variables
    /// and applying environment-aware defaults.
    pub fn init() -> anyhow::Result<Self> {
        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            server_addr,
            port,
            users_api_url,
            google_cloud_project,
        } = raw_config;

        let server_addr = server_addr.unwrap_or_else(|| {
            let default_addr = match env {
                Env::Local => "127.0.0.1",
                Env::Test | Env::Prod => "0.0.0.0",
            };
            info!(
                "SERVER_ADDR not set, defaulting to {} for {} environment",
                default_addr, env
            );
            default_addr.to_owned()
        });

        let port = match port {
            Some(port) => port,
            None if matches!(env, Env::Local) => {
                info!("PORT not set, defaulting to 8080 for local environment");
                8080
            }
            None => anyhow::bail!("PORT must be set for {} environment", env),
        };

        let users_api_url = users_api_url.unwrap_or_else(|| {
            info!("USERS_API_URL not set, defaulting to {}", DEFAULT_USERS_URL);
            DEFAULT_USERS_URL.to_owned()
        });

        if matches!(env, Env::Prod) && google_cloud_project.is_none() {
            anyhow::bail!("GOOGLE_CLOUD_PROJECT must be set for {} environment", env);
        }

        Ok(Config {
            env,
            server_addr,
            port,
            users_api_url,
            google_cloud_project,
        })
    }
}
