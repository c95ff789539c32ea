use crate::server::error::config::ConfigError;

static DEFAULT_GENAI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
static DEFAULT_GENAI_MODEL: &str = "gemini-2.0-flash";
static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,
    pub frontend_origin: String,
    pub genai_api_key: String,
    pub genai_api_url: String,
    pub genai_model: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            frontend_origin: require("FRONTEND_ORIGIN")?,
            genai_api_key: require("GENAI_API_KEY")?,
            genai_api_url: std::env::var("GENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GENAI_API_URL.to_string()),
            genai_model: std::env::var("GENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GENAI_MODEL.to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
