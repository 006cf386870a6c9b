//! Form input for papers and posts, and its validation.

use chrono::NaiveDate;
use serde::Deserialize;

use super::PaperError;
use crate::{
    Result, constants,
    models::{Paper, parse_authors},
};

/// Paper fields as submitted by the add/edit form.
///
/// `authors` is the raw comma separated list of co-author usernames.
/// Absent fields deserialize as empty and fail validation like blank ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaperForm {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub publication_date: String,
    pub authors: String,
}

impl PaperForm {
    /// Prefill values for editing an existing paper.
    pub fn from_paper(paper: &Paper) -> Self {
        Self {
            title: paper.title.clone(),
            summary: paper.summary.clone(),
            url: paper.url.clone(),
            publication_date: paper.publication_date.clone(),
            authors: paper.authors_display(),
        }
    }

    /// Validate the form and build the record owned by `owner`.
    pub fn into_paper(self, owner: &str) -> Result<Paper> {
        let title = required("title", &self.title)?;
        let summary = required("summary", &self.summary)?;
        let url = validate_url(&self.url)?;
        let publication_date = validate_date(&self.publication_date)?;

        Ok(Paper {
            title,
            summary,
            url,
            publication_date,
            authors: parse_authors(&self.authors),
            owner: owner.to_string(),
        })
    }
}

/// Post fields as submitted by the add/edit form.
///
/// A missing `score` field and an empty one both mean "no score". A missing
/// `content` field fails validation like a blank one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub content: String,
    pub score: Option<String>,
}

impl PostForm {
    pub(crate) fn content(&self) -> Result<String> {
        required("content", &self.content)
    }

    pub(crate) fn score(&self) -> Result<Option<u8>> {
        parse_score(self.score.as_deref())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> crate::Error {
    PaperError::Validation {
        field,
        reason: reason.into(),
    }
    .into()
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    Ok(value.to_string())
}

fn validate_url(value: &str) -> Result<String> {
    let value = required("url", value)?;
    let parsed = url::Url::parse(&value).map_err(|e| invalid("url", e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(value),
        other => Err(invalid("url", format!("unsupported scheme '{other}'"))),
    }
}

fn validate_date(value: &str) -> Result<String> {
    let value = required("publication_date", value)?;
    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map_err(|_| invalid("publication_date", "expected YYYY-MM-DD"))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Parse an optional score field. Blank means no score.
pub fn parse_score(value: Option<&str>) -> Result<Option<u8>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let score: i64 = value
        .parse()
        .map_err(|_| invalid("score", format!("'{value}' is not a whole number")))?;
    u8::try_from(score)
        .ok()
        .filter(|s| (constants::MIN_SCORE..=constants::MAX_SCORE).contains(s))
        .map(Some)
        .ok_or_else(|| {
            invalid(
                "score",
                format!(
                    "must be between {} and {}",
                    constants::MIN_SCORE,
                    constants::MAX_SCORE
                ),
            )
        })
}
