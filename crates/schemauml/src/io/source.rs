//! Schema sources
//!
//! A schema is read either from a JSON file or from a Parse Server
//! `/schemas` endpoint. Both paths decode JSON the same way, see
//! [`Schema::from_json_value`].

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info, span, Level};

use crate::core::{Result, Schema, SchemaUmlError};

/// Header carrying the application id
pub const APP_ID_HEADER: &str = "X-Parse-Application-Id";

/// Header carrying the master key
pub const MASTER_KEY_HEADER: &str = "X-Parse-Master-Key";

/// Something that can produce a schema once
pub trait SchemaSource {
    /// Acquire and decode the schema
    fn load(&self) -> Result<Schema>;

    /// Short human-readable description for log lines
    fn describe(&self) -> String;
}

/// Reads a schema from a JSON file, or from stdin when the path is `-`
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn read_content(&self) -> Result<String> {
        if self.is_stdin() {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| SchemaUmlError::read_error("<stdin>", e))?;
            Ok(content)
        } else {
            std::fs::read_to_string(&self.path)
                .map_err(|e| SchemaUmlError::read_error(&self.path, e))
        }
    }
}

impl SchemaSource for FileSource {
    fn load(&self) -> Result<Schema> {
        let load_span = span!(Level::INFO, "load_file", path = %self.path.display());
        let _enter = load_span.enter();

        let content = self.read_content()?;
        debug!(bytes = content.len(), "Read schema file");

        let schema = Schema::from_json_str(&content)?;
        info!(class_count = schema.class_count(), "Loaded schema from file");
        Ok(schema)
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            format!("file {}", self.path.display())
        }
    }
}

/// Application credentials sent with every schema request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub master_key: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, master_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            master_key: master_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("master_key", &"<redacted>")
            .finish()
    }
}

/// Fetches a schema with a single authenticated GET request
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct ServerSource {
    url: String,
    credentials: Credentials,
}

#[cfg(not(target_arch = "wasm32"))]
impl ServerSource {
    pub fn new(url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            url: url.into(),
            credentials,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw `/schemas` response body
    pub fn fetch(&self) -> Result<serde_json::Value> {
        let client = reqwest::blocking::Client::builder().build()?;
        let response = client
            .get(&self.url)
            .header(APP_ID_HEADER, &self.credentials.app_id)
            .header(MASTER_KEY_HEADER, &self.credentials.master_key)
            .send()?;

        let status = response.status();
        debug!(status = status.as_u16(), "Schema response received");
        if !status.is_success() {
            return Err(SchemaUmlError::status_error(status.as_u16(), &self.url));
        }

        Ok(response.json()?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SchemaSource for ServerSource {
    fn load(&self) -> Result<Schema> {
        let load_span = span!(Level::INFO, "load_server", url = %self.url);
        let _enter = load_span.enter();

        let body = self.fetch()?;
        let schema = Schema::from_response(body)?;
        info!(class_count = schema.class_count(), "Fetched schema from server");
        Ok(schema)
    }

    fn describe(&self) -> String {
        format!("server {}", self.url)
    }
}
