use bytes::Bytes;
use reqwest::Client;
use tracing::info;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::utils::time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFolder {
    Projects,
    Services,
    Staff,
}

impl MediaFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFolder::Projects => "projects",
            MediaFolder::Services => "services",
            MediaFolder::Staff => "staff",
        }
    }
}

/// Object-storage client for site media. Uploads land under a per-folder,
/// collision-resistant path and come back as a publicly resolvable URL.
#[derive(Clone)]
pub struct StorageClient {
    http: Client,
    object_url: Url,
    anon_key: String,
    access_token: Option<String>,
    bucket: String,
}

impl StorageClient {
    pub fn new(http: Client, config: &Config) -> Result<Self> {
        Ok(Self {
            http,
            object_url: config.backend_url.join("storage/v1/object/")?,
            anon_key: config.anon_key.clone(),
            access_token: None,
            bucket: config.storage_bucket.clone(),
        })
    }

    pub fn with_access_token(&self, token: &str) -> Self {
        Self {
            access_token: Some(token.to_string()),
            ..self.clone()
        }
    }

    pub async fn upload(
        &self,
        folder: MediaFolder,
        filename: &str,
        data: Bytes,
    ) -> Result<String> {
        let object_path = format!(
            "{}/{}-{}",
            folder.as_str(),
            time::now().timestamp_millis(),
            sanitize_filename(filename)
        );
        let url = self
            .object_url
            .join(&format!("{}/{}", self.bucket, object_path))?;
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        let resp = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(data)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Store {
                status: status.as_u16(),
                message,
            });
        }
        info!(path = %object_path, "media uploaded");
        self.public_url(&object_path)
    }

    pub fn public_url(&self, object_path: &str) -> Result<String> {
        Ok(self
            .object_url
            .join(&format!("public/{}/{}", self.bucket, object_path))?
            .to_string())
    }
}

/// Keeps the original name readable while ruling out separators and path
/// tricks.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c| c == '-' || c == '.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
