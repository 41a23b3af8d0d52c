use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single image URL or an ordered gallery. The first entry is primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Single(String),
    Gallery(Vec<String>),
}

impl ImageRef {
    pub fn primary(&self) -> Option<&str> {
        match self {
            ImageRef::Single(url) => (!url.is_empty()).then_some(url.as_str()),
            ImageRef::Gallery(urls) => urls
                .iter()
                .map(String::as_str)
                .find(|url| !url.is_empty()),
        }
    }

    pub fn urls(&self) -> Vec<&str> {
        match self {
            ImageRef::Single(url) => vec![url.as_str()],
            ImageRef::Gallery(urls) => urls.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        ImageRef::Gallery(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub client: String,
    pub reference_number: Option<String>,
    pub location: String,
    pub image: ImageRef,
    pub description: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub project_value: Option<String>,
    pub key_features: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Consumers substitute a placeholder when this is `None`.
    pub fn primary_image(&self) -> Option<&str> {
        self.image.primary()
    }
}
