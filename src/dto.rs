use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::entity::board;

/// A board post as submitted by the write form. `idx == None` means the post
/// has not been persisted yet.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub idx: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub notice_yn: Option<String>,
}

impl BoardDto {
    #[cfg(test)]
    pub fn new(title: impl Into<String>, content: impl Into<String>, writer: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            writer: writer.into(),
            ..Default::default()
        }
    }

    /// Unchecked checkboxes are not submitted at all; anything but `Y` counts as `N`.
    pub fn notice_flag(&self) -> &'static str {
        match self.notice_yn.as_deref() {
            Some("Y") => "Y",
            _ => "N",
        }
    }

    pub fn is_notice(&self) -> bool {
        self.notice_flag() == "Y"
    }
}

impl From<board::Model> for BoardDto {
    fn from(model: board::Model) -> Self {
        Self {
            idx: Some(model.idx),
            title: model.title,
            content: model.content,
            writer: model.writer,
            notice_yn: Some(model.notice_yn),
        }
    }
}

/// `idx` carried in a query string or a form body.
#[derive(Debug, Deserialize)]
pub struct IdxParam {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub idx: Option<i64>,
}

/// HTML forms submit an empty string for blank inputs; treat it as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
