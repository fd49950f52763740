//! Mapper configuration using Figment
//!
//! Defaults match what most form libraries expect: form-wide errors live on
//! the `root` field and server errors are tagged `server`. A TOML, YAML or
//! JSON file can override either value:
//!
//! ```toml
//! root_field = "_form"
//! error_kind = "remote"
//! ```

use std::path::Path;

use figment::{
    providers::{Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ConfigError, ConfigResult};
use crate::form::{ROOT_FIELD, SERVER_ERROR_KIND};

/// How server errors are written onto a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Field that receives form-wide errors.
    pub root_field: String,
    /// Kind tag attached to every mapped error.
    pub error_kind: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            root_field: ROOT_FIELD.to_string(),
            error_kind: SERVER_ERROR_KIND.to_string(),
        }
    }
}

impl MapperConfig {
    /// Load configuration, layering `path` over the defaults.
    ///
    /// The file format is detected from the extension. Without a path the
    /// defaults are returned.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let config: MapperConfig = Self::figment(path)?.extract()?;
        config.validate()?;

        debug!(
            root_field = %config.root_field,
            error_kind = %config.error_kind,
            "loaded mapper configuration"
        );
        Ok(config)
    }

    fn figment(path: Option<&Path>) -> ConfigResult<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(MapperConfig::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }

            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_lowercase();
            trace!("Loading config file: {} ({})", path.display(), ext);

            figment = match ext.as_str() {
                "toml" => figment.merge(Toml::file(path)),
                "yaml" | "yml" => figment.merge(Yaml::file(path)),
                "json" => figment.merge(Json::file(path)),
                _ => return Err(ConfigError::UnsupportedFormat { format: ext }),
            };
        }

        Ok(figment)
    }

    /// Reject empty field names and kind tags.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.root_field.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "root_field must not be empty".to_string(),
            });
        }
        if self.error_kind.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "error_kind must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
