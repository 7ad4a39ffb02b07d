//! Site content: homepage features and news articles.
//!
//! DESIGN
//! ======
//! Content is a single JSON document loaded once at startup. Keys are
//! camelCase to match the CMS export. Filtering and ordering rules live here
//! so the page renderer and the JSON API always agree on what is shown.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Maximum number of featured articles on the homepage.
pub const HOMEPAGE_NEWS_LIMIT: usize = 3;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse content file {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

// =============================================================================
// FEATURES
// =============================================================================

/// One homepage "keunggulan" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub order: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default = "default_feature_border")]
    pub border_color: String,
    #[serde(default = "default_feature_from")]
    pub gradient_from: String,
    #[serde(default = "default_feature_to")]
    pub gradient_to: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_feature_border() -> String {
    "border-primary-500".into()
}

fn default_feature_from() -> String {
    "from-primary-500".into()
}

fn default_feature_to() -> String {
    "to-primary-600".into()
}

// =============================================================================
// NEWS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Akademik,
    Prestasi,
    Kegiatan,
    Pengumuman,
}

impl Category {
    /// Display label shown on news cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Akademik => "Akademik",
            Self::Prestasi => "Prestasi",
            Self::Kegiatan => "Kegiatan",
            Self::Pengumuman => "Pengumuman",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    pub slug: String,
    /// Publication date as `YYYY-MM-DD`.
    pub published_at: String,
    pub excerpt: String,
    pub category: Category,
    #[serde(default = "default_news_from")]
    pub gradient_from: String,
    #[serde(default = "default_news_to")]
    pub gradient_to: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

fn default_news_from() -> String {
    "from-primary-400".into()
}

fn default_news_to() -> String {
    "to-primary-600".into()
}

fn default_true() -> bool {
    true
}

impl NewsArticle {
    /// Publication date in Indonesian long form, e.g. `5 Maret 2025`.
    #[must_use]
    pub fn display_date(&self) -> String {
        format_date_id(&self.published_at)
    }
}

/// Format a `YYYY-MM-DD` date the way the site displays it. Anything that
/// does not parse is returned unchanged.
#[must_use]
pub fn format_date_id(date: &str) -> String {
    let mut parts = date.trim().splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date.to_owned();
    };
    let (Ok(year), Ok(month), Ok(day)) = (year.parse::<u32>(), month.parse::<usize>(), day.parse::<u32>()) else {
        return date.to_owned();
    };
    match MONTHS_ID.get(month.wrapping_sub(1)) {
        Some(name) if (1..=31).contains(&day) => format!("{day} {name} {year}"),
        _ => date.to_owned(),
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub news: Vec<NewsArticle>,
}

impl ContentDocument {
    /// Read and parse the content file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&raw).map_err(|source| ContentError::Parse { path: path.to_path_buf(), source })
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Active features in ascending `order`. Ties keep document order.
    #[must_use]
    pub fn active_features(&self) -> Vec<&Feature> {
        let mut features: Vec<&Feature> = self.features.iter().filter(|f| f.is_active).collect();
        features.sort_by_key(|f| f.order);
        features
    }

    /// Published articles, newest first. Ties keep document order.
    #[must_use]
    pub fn published_news(&self) -> Vec<&NewsArticle> {
        let mut news: Vec<&NewsArticle> = self.news.iter().filter(|n| n.is_published).collect();
        news.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        news
    }

    /// A published article by slug.
    #[must_use]
    pub fn published_article(&self, slug: &str) -> Option<&NewsArticle> {
        self.news.iter().find(|n| n.is_published && n.slug == slug)
    }

    /// Published and featured articles for the homepage, newest first.
    #[must_use]
    pub fn homepage_news(&self) -> Vec<&NewsArticle> {
        self.published_news()
            .into_iter()
            .filter(|n| n.is_featured)
            .take(HOMEPAGE_NEWS_LIMIT)
            .collect()
    }
}
