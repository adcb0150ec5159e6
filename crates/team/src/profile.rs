use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Card shown on the team page.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct TeamMember {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub photo_url: Option<String>,
}

/// Full instructor page. Blank optional fields are stored as NULL.
#[derive(Debug, Default, Clone, PartialEq, Serialize, FromRow)]
pub struct TeamProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub bio_long: Option<String>,
    pub specialty: Option<String>,
    pub teaching_style: Option<String>,
    /// `YYYY-MM-DD` or just a year.
    pub teaching_since: Option<String>,
    pub favorite_song: Option<String>,
    pub private_lessons: Option<String>,
    pub instagram_url: Option<String>,
    pub phone_number: Option<String>,
}

impl TeamProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn teaching_since_year(&self) -> Option<i32> {
        self.teaching_since
            .as_deref()
            .and_then(|since| since.trim().get(..4))
            .and_then(|year| year.parse().ok())
    }
}

/// Fields an instructor may edit on their own profile. Role and short bio
/// are managed by the studio.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(url)]
    pub photo_url: Option<String>,
    #[validate(length(max = 4000))]
    pub bio_long: Option<String>,
    #[validate(length(max = 200))]
    pub specialty: Option<String>,
    #[validate(length(max = 1000))]
    pub teaching_style: Option<String>,
    #[validate(length(max = 10))]
    pub teaching_since: Option<String>,
    #[validate(length(max = 200))]
    pub favorite_song: Option<String>,
    #[validate(length(max = 1000))]
    pub private_lessons: Option<String>,
    #[validate(url)]
    pub instagram_url: Option<String>,
    #[validate(length(max = 30))]
    pub phone_number: Option<String>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl ProfileUpdate {
    /// Trims every field and turns blank optional ones into `None`.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            photo_url: blank_to_none(self.photo_url),
            bio_long: blank_to_none(self.bio_long),
            specialty: blank_to_none(self.specialty),
            teaching_style: blank_to_none(self.teaching_style),
            teaching_since: blank_to_none(self.teaching_since),
            favorite_song: blank_to_none(self.favorite_song),
            private_lessons: blank_to_none(self.private_lessons),
            instagram_url: blank_to_none(self.instagram_url),
            phone_number: blank_to_none(self.phone_number),
        }
    }
}
