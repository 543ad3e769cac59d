use crate::error::{Result, ScrapbookError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".scrapbook.yml";

/// Environment variables holding the backend endpoint, in lookup order.
pub const URL_VARS: &[&str] = &["SUPABASE_URL", "VITE_SUPABASE_URL"];

/// Environment variables holding the anonymous API key, in lookup order.
pub const KEY_VARS: &[&str] = &["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapbookConfig {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_bucket")]
    pub bucket: String,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
}

fn default_bucket() -> String {
    "memory-photos".to_string()
}

fn default_table() -> String {
    "memories".to_string()
}

fn default_path_prefix() -> String {
    "memories".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSettings {
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    #[serde(default = "default_quality")]
    pub quality: f32,

    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

fn default_max_dimension() -> u32 {
    crate::compress::MAX_DIMENSION
}

fn default_quality() -> f32 {
    crate::compress::DEFAULT_QUALITY
}

fn default_max_bytes() -> u64 {
    crate::validation::MAX_PHOTO_BYTES
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            table: default_table(),
            path_prefix: default_path_prefix(),
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            quality: default_quality(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl ScrapbookConfig {
    /// Load the nearest `.scrapbook.yml` above `start_path`, or defaults when none exists.
    pub fn load(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScrapbookError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: ScrapbookConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let quality = self.upload.quality;
        if !(quality > 0.0 && quality <= 1.0) {
            return Err(ScrapbookError::Config(format!(
                "upload.quality must be in (0, 1], got {}",
                quality
            )));
        }
        if self.upload.max_dimension == 0 {
            return Err(ScrapbookError::Config(
                "upload.max_dimension must be positive".to_string(),
            ));
        }
        if self.backend.bucket.is_empty() || self.backend.table.is_empty() {
            return Err(ScrapbookError::Config(
                "backend.bucket and backend.table cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Endpoint and key for the hosted backend.
#[derive(Clone)]
pub struct Credentials {
    pub url: String,
    pub key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through `lookup`. Both values must be present and non-blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let find = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        match (find(URL_VARS), find(KEY_VARS)) {
            (Some(url), Some(key)) => Ok(Self { url, key }),
            _ => Err(ScrapbookError::Config(
                "Missing Supabase environment variables (SUPABASE_URL, SUPABASE_ANON_KEY)"
                    .to_string(),
            )),
        }
    }
}
