//! Loading schema descriptors from YAML or JSON.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::kind::CompiledSchema;
use crate::types::FieldSchema;

/// On-disk schema format, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl SchemaFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Parse a descriptor in this format.
    pub fn parse(self, content: &str) -> Result<FieldSchema> {
        let schema: FieldSchema = match self {
            Self::Yaml => serde_yaml_ng::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        };
        Ok(schema)
    }
}

impl CompiledSchema {
    /// Parse and compile a YAML object descriptor.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::compile(&SchemaFormat::Yaml.parse(content)?)
    }

    /// Parse and compile a JSON object descriptor.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::compile(&SchemaFormat::Json.parse(content)?)
    }
}

/// Read, parse and compile a schema file.
///
/// The format comes from the extension: `.yaml`, `.yml` or `.json`.
pub fn load_schema(path: impl AsRef<Path>) -> Result<CompiledSchema> {
    let path = path.as_ref();
    let format = SchemaFormat::from_path(path).ok_or_else(|| FieldsError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path)?;
    let schema = CompiledSchema::compile(&format.parse(&content)?)?;

    debug!(
        path = %path.display(),
        ?format,
        fields = schema.len(),
        "loaded schema"
    );
    Ok(schema)
}
