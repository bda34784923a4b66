use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Paragraph separator used by blog authors in the admin editor.
pub const PARAGRAPH_BREAK: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "REACT")]
    React,
    #[serde(rename = "FULLSTACK")]
    FullStack,
    #[serde(rename = "BACKEND")]
    Backend,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::React, Category::FullStack, Category::Backend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::React => "REACT",
            Category::FullStack => "FULLSTACK",
            Category::Backend => "BACKEND",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Live & Active")]
    LiveAndActive,
    #[serde(rename = "Code Showcase")]
    CodeShowcase,
    #[serde(rename = "Backend Focus")]
    BackendFocus,
    #[serde(rename = "Full-Stack Demo")]
    FullStackDemo,
    #[serde(rename = "Advanced Features")]
    AdvancedFeatures,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::LiveAndActive => "Live & Active",
            ProjectStatus::CodeShowcase => "Code Showcase",
            ProjectStatus::BackendFocus => "Backend Focus",
            ProjectStatus::FullStackDemo => "Full-Stack Demo",
            ProjectStatus::AdvancedFeatures => "Advanced Features",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub github_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    pub features: String,
    pub technologies: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical_focus: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_outcomes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_play: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_url: Option<String>,
}

impl Project {
    /// The comma-delimited feature string as individual entries.
    pub fn feature_list(&self) -> Vec<&str> {
        self.features
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: u32,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Blog {
    pub fn paragraphs(&self) -> Vec<&str> {
        split_paragraphs(&self.message)
    }

    pub fn created_on(&self) -> Option<NaiveDate> {
        parse_date(&self.created_at)
    }

    pub fn updated_on(&self) -> Option<NaiveDate> {
        parse_date(&self.updated_at)
    }
}

/// Splits a blog body on [`PARAGRAPH_BREAK`], dropping blank segments.
pub fn split_paragraphs(message: &str) -> Vec<&str> {
    message
        .split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

// The API has served both full timestamps and bare dates over time.
fn parse_date(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Payload for creating or editing a blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Blog> for BlogDraft {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            message: blog.message.clone(),
            image: blog.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: u32,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}
