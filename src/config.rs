use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub surrealdb: SurrealDbConfig,
    pub jsonwebtoken: JsonWebTokenConfig,
    pub smtp: SmtpConfig,
    pub dispatch: DispatchConfig,
    pub recipients: RecipientsConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct JsonWebTokenConfig {
    pub public_keyfile: String,
    pub private_keyfile: String,
    pub lifetime_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    /// One of `starttls`, `tls` or `none`.
    pub tls: String,
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DispatchConfig {
    pub workers: usize,
    pub capacity: usize,
    /// Pause after every message of a batch.
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecipientsConfig {
    pub allowed_domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    pub program: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "mailcast".to_string(),
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                otlp: false,
            },
            jsonwebtoken: JsonWebTokenConfig {
                public_keyfile: "config/public_key.pem".to_string(),
                private_keyfile: "config/private_key.pem".to_string(),
                lifetime_minutes: 60,
            },
            surrealdb: SurrealDbConfig {
                host: "localhost".to_string(),
                port: 8000,
                username: "root".to_string(),
                password: "root".to_string(),
                namespace: "mailcast".to_string(),
                database: "mailcast".to_string(),
                migration: true,
            },
            smtp: SmtpConfig {
                host: "localhost".to_string(),
                port: 587,
                username: None,
                password: None,
                from: "no-reply@localhost".to_string(),
                tls: "starttls".to_string(),
                timeout: 10,
            },
            dispatch: DispatchConfig {
                workers: 2,
                capacity: 64,
                delay_ms: 2000,
            },
            recipients: RecipientsConfig {
                allowed_domains: ["gmail.com", "yahoo.com", "outlook.com", "hotmail.com", "icloud.com"]
                    .iter()
                    .map(|domain| domain.to_string())
                    .collect(),
            },
            generator: GeneratorConfig {
                program: "ollama".to_string(),
                model: "llama3.2".to_string(),
                timeout_secs: 120,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("APP_DISPATCH__DELAY_MS", "0");
            jail.set_env("APP_SERVICE__PORT", "9090");

            let config = AppConfig::load()?;

            assert_eq!(config.dispatch.delay_ms, 0);
            assert_eq!(config.dispatch.workers, 2);
            assert_eq!(config.service.port, 9090);
            assert!(
                config
                    .recipients
                    .allowed_domains
                    .contains(&"gmail.com".to_string())
            );

            Ok(())
        });
    }
}
