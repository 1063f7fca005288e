use crate::errors::{AppError, AppResult};
use crate::utils::date::DateKey;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CATEGORY: &str = "General";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// One dated devotional, as stored and as rendered.
///
/// Field names follow the persisted JSON shape (`imageUrl`, `isRead`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Devotional {
    pub id: String,
    pub date: DateKey,
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

impl Devotional {
    pub fn date_str(&self) -> String {
        self.date.to_string()
    }

    pub fn is_read(&self) -> bool {
        self.is_read.unwrap_or(false)
    }

    /// Long form used by the detail view, e.g. "Monday, December 25, 2023".
    pub fn long_date(&self) -> String {
        self.date.date().format("%A, %B %-d, %Y").to_string()
    }
}

/// Fields of the admin form that can be reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Content,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Content => "content",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable fields of the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Title,
    Category,
    Content,
    ImageUrl,
}

impl EditableField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "title" => Some(EditableField::Title),
            "category" => Some(EditableField::Category),
            "content" => Some(EditableField::Content),
            "image" | "imageurl" | "image_url" => Some(EditableField::ImageUrl),
            _ => None,
        }
    }
}

/// Work-in-progress record held by the admin form.
///
/// Everything is free text until `validate` turns it into a `Devotional`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevotionalDraft {
    pub id: Option<String>,
    pub date: Option<DateKey>,
    pub title: String,
    pub category: String,
    pub content: String,
    pub image_url: String,
}

impl DevotionalDraft {
    /// Blank form targeting `date`.
    pub fn blank(date: DateKey) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Form pre-filled from an existing record (editing keeps its id).
    pub fn from_record(record: &Devotional) -> Self {
        Self {
            id: Some(record.id.clone()),
            date: Some(record.date),
            title: record.title.clone(),
            category: record.category.clone(),
            content: record.content.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: EditableField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EditableField::Title => self.title = value,
            EditableField::Category => self.category = value,
            EditableField::Content => self.content = value,
            EditableField::ImageUrl => self.image_url = value,
        }
    }

    /// Fields that would block `validate`.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(DraftField::Title);
        }
        if self.content.trim().is_empty() {
            missing.push(DraftField::Content);
        }
        missing
    }

    /// Build a complete record.
    ///
    /// The date falls back to today when the form never picked one. Fresh
    /// records get a new UUID; edited ones keep theirs.
    pub fn validate(&self) -> AppResult<Devotional> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(missing));
        }

        let category = match self.category.trim() {
            "" => default_category(),
            c => c.to_string(),
        };
        let image_url = match self.image_url.trim() {
            "" => None,
            u => Some(u.to_string()),
        };

        Ok(Devotional {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string()),
            date: self.date.unwrap_or_else(DateKey::today),
            title: self.title.trim().to_string(),
            category,
            content: self.content.trim().to_string(),
            image_url,
            is_read: None,
        })
    }
}
