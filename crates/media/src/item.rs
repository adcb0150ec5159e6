use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Only images and videos are published; everything else is hidden.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        if mime_type.contains("video/") {
            Some(Self::Video)
        } else if mime_type.contains("image/") {
            Some(Self::Image)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    pub kind: MediaKind,
    /// Same-origin proxy path for the bytes.
    pub link: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    pub thumbnail_link: Option<String>,
    pub created_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DriveFileList {
    pub files: Option<Vec<DriveFile>>,
}

pub fn media_items(list: DriveFileList) -> Vec<MediaItem> {
    list.files
        .unwrap_or_default()
        .into_iter()
        .filter_map(|file| {
            let kind = MediaKind::from_mime(&file.mime_type)?;

            Some(MediaItem {
                link: format!("/api/media/{}", file.id),
                id: file.id,
                name: file.name,
                kind,
                thumbnail: file.thumbnail_link,
            })
        })
        .collect()
}

/// Newest upload of the weekly photo folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPhoto {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    /// Same-origin proxy path for the bytes.
    pub link: String,
    pub created_time: Option<String>,
}

/// The first listed file when it is an image. HEIC uploads are passed
/// through untouched.
pub fn weekly_photo(list: DriveFileList) -> Option<WeeklyPhoto> {
    let file = list.files?.into_iter().next()?;
    if MediaKind::from_mime(&file.mime_type)? != MediaKind::Image {
        return None;
    }

    Some(WeeklyPhoto {
        link: format!("/api/media/{}", file.id),
        id: file.id,
        name: file.name,
        mime_type: file.mime_type,
        created_time: file.created_time,
    })
}
