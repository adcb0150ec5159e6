use ccswing_shared::form;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct PrayerForm {
    #[serde(deserialize_with = "form::optional_text")]
    pub name: Option<String>,
    #[validate(length(min = 3, max = 2000, message = "Please enter a prayer request."))]
    #[serde(deserialize_with = "form::text")]
    pub message: String,
    #[serde(deserialize_with = "form::flag_or_false")]
    pub anonymous: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrayerRequest {
    pub name: Option<String>,
    pub message: String,
    pub anonymous: bool,
}

impl PrayerForm {
    pub fn validate_prayer(mut self) -> Result<PrayerRequest, ValidationErrors> {
        self.message = self.message.trim().to_owned();
        self.validate()?;

        Ok(PrayerRequest {
            name: self
                .name
                .map(|n| n.trim().to_owned())
                .filter(|n| !n.is_empty()),
            message: self.message,
            anonymous: self.anonymous,
        })
    }
}

impl PrayerRequest {
    /// Who the request is from as shown to the prayer team.
    pub fn sender(&self) -> &str {
        match (&self.name, self.anonymous) {
            (_, true) => "Anonymous",
            (Some(name), false) => name,
            (None, false) => "No name provided",
        }
    }
}
