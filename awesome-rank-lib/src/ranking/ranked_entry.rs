use crate::facts::License;
use serde::{Deserialize, Serialize};

/// Display-ready view of one ranked entry.
///
/// Only these four fields are ever exposed; the raw facts behind the score stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    #[serde(rename = "Awesomeness")]
    pub awesomeness: usize,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "License")]
    pub license: Option<License>,

    #[serde(rename = "Link")]
    pub link: String,
}
