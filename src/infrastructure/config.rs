use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("required option `{0}` is empty")]
    Empty(&'static str),
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub influx: InfluxSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InfluxSettings {
    pub host: String,
    pub token: String,
    pub org: String,
    pub bucket: String,
    /// Value of the `app` tag attached to every written point
    #[serde(default = "default_app_tag")]
    pub app_tag: String,
}

fn default_app_tag() -> String {
    "db_api".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub gateway: GatewaySettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewaySettings {
    /// Full URL of the gateway's getData endpoint
    pub url: String,
}

/// Gateway settings from `config/gateway.toml` (optional) and `GATEWAY_*` env vars
pub fn load_gateway_config() -> Result<GatewayConfig, ConfigError> {
    let config: GatewayConfig = load(sources("config/gateway", "GATEWAY"))?;
    config.validate()?;
    Ok(config)
}

/// Dashboard settings from `config/dashboard.toml` (optional) and `DASHBOARD_*` env vars
pub fn load_dashboard_config() -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = load(sources("config/dashboard", "DASHBOARD"))?;
    config.validate()?;
    Ok(config)
}

fn sources(file: &str, prefix: &str) -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(environment(prefix))
}

/// Env values stay strings so credentials like `007` survive; typed
/// fields such as ports are converted during deserialization.
fn environment(prefix: &str) -> config::Environment {
    config::Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
}

fn load<T: DeserializeOwned>(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<T, ConfigError> {
    let settings = builder.build()?;
    Ok(settings.try_deserialize()?)
}

fn require(value: &str, name: &'static str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(())
}

impl GatewayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require(&self.influx.host, "influx.host")?;
        require(&self.influx.token, "influx.token")?;
        require(&self.influx.org, "influx.org")?;
        require(&self.influx.bucket, "influx.bucket")?;
        require(&self.server.host, "server.host")
    }
}

impl DashboardConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require(&self.gateway.url, "gateway.url")?;
        require(&self.server.host, "server.host")
    }
}
