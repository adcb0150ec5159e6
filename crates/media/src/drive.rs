use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde::Deserialize;

use crate::{DriveFileList, MediaItem, WeeklyPhoto, media_items, weekly_photo};

const LIST_FIELDS: &str = "files(id,name,mimeType,webViewLink,webContentLink,thumbnailLink)";
const WEEKLY_FIELDS: &str = "files(id,name,mimeType,createdTime)";

#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    pub api_key: String,
    pub folder_id: String,
    pub weekly_folder_id: String,
    pub api_base: String,
    pub download_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("missing drive credentials")]
    NotConfigured,

    #[error("upstream returned {0}")]
    Upstream(StatusCode),

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct MediaBytes {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[async_trait::async_trait]
pub trait MediaSource: Send + Sync {
    async fn list_media(&self) -> Result<Vec<MediaItem>, MediaError>;
    async fn fetch_media(&self, id: &str) -> Result<MediaBytes, MediaError>;
    /// `None` when the weekly folder is empty.
    async fn latest_photo(&self) -> Result<Option<WeeklyPhoto>, MediaError>;
}

/// Reads shared drive folders through their public REST API.
#[derive(Clone)]
pub struct DriveClient {
    client: Client,
    config: MediaConfig,
}

impl DriveClient {
    pub fn new(config: MediaConfig) -> Result<Self, MediaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Error bodies carry no `files` and list as empty.
    async fn list_folder(
        &self,
        folder_id: &str,
        params: &[(&str, &str)],
    ) -> Result<DriveFileList, MediaError> {
        if self.config.api_key.trim().is_empty() || folder_id.trim().is_empty() {
            return Err(MediaError::NotConfigured);
        }

        let query = format!("'{folder_id}' in parents and trashed=false");
        let url = format!("{}/files", self.config.api_base.trim_end_matches('/'));

        let response = self
            .client
            .get(url)
            .query(&[("q", query.as_str()), ("key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(folder_id, status = %status, "Drive listing failed");
        }

        Ok(response.json::<DriveFileList>().await.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl MediaSource for DriveClient {
    async fn list_media(&self) -> Result<Vec<MediaItem>, MediaError> {
        let list = self
            .list_folder(&self.config.folder_id, &[("fields", LIST_FIELDS)])
            .await?;

        Ok(media_items(list))
    }

    async fn fetch_media(&self, id: &str) -> Result<MediaBytes, MediaError> {
        let response = self
            .client
            .get(&self.config.download_base)
            .query(&[("export", "download"), ("id", id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(media_id = id, status = %status, "Drive download failed");
            return Err(MediaError::Upstream(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Ok(MediaBytes {
            content_type,
            bytes: response.bytes().await?,
        })
    }

    async fn latest_photo(&self) -> Result<Option<WeeklyPhoto>, MediaError> {
        let list = self
            .list_folder(
                &self.config.weekly_folder_id,
                &[
                    ("fields", WEEKLY_FIELDS),
                    ("orderBy", "createdTime desc"),
                    ("pageSize", "1"),
                ],
            )
            .await?;

        Ok(weekly_photo(list))
    }
}
