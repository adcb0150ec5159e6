use serde::Serialize;
use sqlx::prelude::FromRow;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Serialize, AsRefStr,
)]
pub enum Category {
    Workshop,
    Class,
    Social,
}

/// One scheduled studio activity. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: Date,
    /// Free text such as "7:00 PM - 10:00 PM". Never used for eligibility.
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub cost: Option<f64>,
    pub category: Option<Category>,
}

impl Event {
    pub fn is_workshop(&self) -> bool {
        self.category == Some(Category::Workshop)
    }
}

#[derive(Debug, Default, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub cost: Option<f64>,
    pub category: Option<String>,
}

impl TryFrom<EventRow> for Event {
    type Error = ccswing_shared::Error;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let date = ccswing_shared::parse_local_date(&row.date)?;

        if row.cost.is_some_and(|cost| cost.is_nan() || cost < 0.0) {
            ccswing_shared::bail!("event {} has an invalid cost", row.id);
        }

        let category = match row.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => match value.parse::<Category>() {
                Ok(category) => Some(category),
                Err(_) => {
                    tracing::warn!(event_id = row.id, category = value, "Unknown event category");
                    None
                }
            },
        };

        Ok(Self {
            id: row.id,
            title: row.title,
            date,
            time: row.time.filter(|t| !t.trim().is_empty()),
            location: row.location,
            description: row.description,
            cost: row.cost,
            category,
        })
    }
}
