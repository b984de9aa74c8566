use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Directories holding one JSON file per record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_carts_dir")]
    pub carts_dir: PathBuf,
    #[serde(default = "default_products_dir")]
    pub products_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { carts_dir: default_carts_dir(), products_dir: default_products_dir() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 4000 }
fn default_carts_dir() -> PathBuf { PathBuf::from("data/carts") }
fn default_products_dir() -> PathBuf { PathBuf::from("data/products") }

/// Load from `CONFIG_PATH` (default `config.toml`); a missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env_overrides(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`, `CARTS_DIR`
    /// and `PRODUCTS_DIR` from the given lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(dir) = lookup("CARTS_DIR") {
            self.storage.carts_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("PRODUCTS_DIR") {
            self.storage.products_dir = PathBuf::from(dir);
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.carts_dir.as_os_str().is_empty() {
            return Err(anyhow!("storage.carts_dir must not be empty"));
        }
        if self.products_dir.as_os_str().is_empty() {
            return Err(anyhow!("storage.products_dir must not be empty"));
        }
        if self.carts_dir == self.products_dir {
            return Err(anyhow!("storage.carts_dir and storage.products_dir must differ"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_toml_uses_defaults() -> Result<()> {
        let cfg: AppConfig = toml::from_str("")?;
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.server.port, 4000);
        assert_eq!(cfg.storage.carts_dir, PathBuf::from("data/carts"));
        Ok(())
    }

    #[test]
    fn partial_sections_fill_in_defaults() -> Result<()> {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [storage]
            carts_dir = "/var/lib/shop/carts"
            "#,
        )?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.storage.carts_dir, PathBuf::from("/var/lib/shop/carts"));
        assert_eq!(cfg.storage.products_dir, PathBuf::from("data/products"));
        Ok(())
    }

    #[test]
    fn env_overrides_win_over_file() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SERVER_PORT", "8088"),
            ("CARTS_DIR", "/tmp/c"),
            ("PRODUCTS_DIR", "/tmp/p"),
            ("TOKIO_WORKER_THREADS", "not-a-number"),
        ]);
        let mut cfg = AppConfig::default();
        cfg.apply_env_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.storage.carts_dir, PathBuf::from("/tmp/c"));
        assert_eq!(cfg.storage.products_dir, PathBuf::from("/tmp/p"));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.storage.products_dir = cfg.storage.carts_dir.clone();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.storage.carts_dir = PathBuf::new();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn normalize_fills_blank_host_and_zero_threads() -> Result<()> {
        let mut cfg = AppConfig::default();
        cfg.server.host = "  ".into();
        cfg.server.worker_threads = Some(0);
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:4000");
        Ok(())
    }

    #[test]
    fn load_from_file_reads_toml() -> Result<()> {
        let path = std::env::temp_dir().join(format!("shop_config_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\n")?;
        let cfg = load_from_file(path.to_str().ok_or_else(|| anyhow!("non-utf8 path"))?)?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        let _ = std::fs::remove_file(&path);
        Ok(())
    }
}
