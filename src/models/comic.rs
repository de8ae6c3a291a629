use serde::{Deserialize, Serialize};

/// A single comic as returned by the upstream JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    pub num: i64,
    pub title: String,
    pub img: String,
    pub alt: String,
    #[serde(default)]
    pub safe_title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: String,
}

/// Result of a single upstream lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(Comic),
    NotFound,
    Failed,
}

impl FetchOutcome {
    pub fn ok(self) -> Option<Comic> {
        match self {
            FetchOutcome::Found(comic) => Some(comic),
            FetchOutcome::NotFound | FetchOutcome::Failed => None,
        }
    }
}

/// Context handed to the `index` template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComicPage {
    pub comic: Option<Comic>,
    pub latest_num: Option<i64>,
    pub error: Option<String>,
    pub recent_comics: Option<Vec<Comic>>,
}

impl ComicPage {
    pub fn comic(comic: Comic, latest_num: Option<i64>) -> Self {
        ComicPage {
            comic: Some(comic),
            latest_num,
            ..Default::default()
        }
    }

    pub fn error(message: impl Into<String>, latest_num: Option<i64>) -> Self {
        ComicPage {
            latest_num,
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn recent(comics: Vec<Comic>, latest_num: i64) -> Self {
        ComicPage {
            comic: comics.first().cloned(),
            latest_num: Some(latest_num),
            error: None,
            recent_comics: Some(comics),
        }
    }
}
