//! Capability interface of the hosted backend
//!
//! Repositories depend on these traits rather than on the HTTP client, so a
//! fake backend can stand in for the real one in tests.

use super::models::{Session, Signup, User, UserAttributes, UserMetadata};
use super::operations::{Operation, OperationResult};
use super::query::{Query, QueryResult};
use async_trait::async_trait;

/// Table-style reads and writes
#[async_trait]
pub trait Tables: Send + Sync {
    /// Run a read query
    async fn select(&self, query: &Query) -> anyhow::Result<QueryResult>;

    /// Run a write and return the affected rows
    async fn execute(&self, operation: &Operation) -> anyhow::Result<OperationResult>;
}

/// Blob storage keyed by bucket and object name
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store the bytes under `name`; fails if the object already exists
    async fn upload(&self, bucket: &str, name: &str, file: &FileUpload) -> anyhow::Result<()>;

    /// Public URL under which `name` is served once uploaded
    fn public_url(&self, bucket: &str, name: &str) -> String;

    /// Whether a URL already points into this store
    fn is_stored_url(&self, url: &str) -> bool;
}

/// Hosted authentication provider
#[async_trait]
pub trait Auth: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str, metadata: UserMetadata) -> anyhow::Result<Signup>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> anyhow::Result<Session>;

    async fn sign_out(&self) -> anyhow::Result<()>;

    /// The locally held session, if any. Never touches the network.
    async fn get_session(&self) -> Option<Session>;

    /// Fetch the user behind the current session
    async fn get_user(&self) -> anyhow::Result<User>;

    async fn update_user(&self, attributes: &UserAttributes) -> anyhow::Result<User>;
}

/// A file picked for upload
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Load a file from disk, guessing the content type from its extension
    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let bytes = std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Path has no file name: {:?}", path))?
            .to_string();
        let content_type = content_type_for(&file_name);

        Ok(Self::new(file_name, content_type, bytes))
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
