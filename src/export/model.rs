// src/export/model.rs

use crate::models::devotional::Devotional;
use serde::Serialize;

/// Flat row shared by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DevotionalExport {
    pub id: String,
    pub date: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub image_url: String,
    pub is_read: bool,
}

impl From<&Devotional> for DevotionalExport {
    fn from(d: &Devotional) -> Self {
        Self {
            id: d.id.clone(),
            date: d.date_str(),
            title: d.title.clone(),
            category: d.category.clone(),
            content: d.content.clone(),
            image_url: d.image_url.clone().unwrap_or_default(),
            is_read: d.is_read(),
        }
    }
}
