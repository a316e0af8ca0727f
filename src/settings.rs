use std::collections::HashMap;
use std::str::FromStr;

use anyhow::Result;
use tracing::warn;

use crate::classifier::Scoring;
use crate::corpus::{LabelMap, LABEL_HAM, LABEL_SPAM};

pub const SETTINGS_ENV: &str = "BAYES_SPAM_FILTER_SETTINGS";

pub const DEFAULT_LABEL_COLUMN: usize = 0;
pub const DEFAULT_TEXT_COLUMN: usize = 1;

/// Character encoding of a dataset file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// ISO-8859-1, every byte is one character
    #[default]
    Latin1,
    Utf8,
}

impl FromStr for Encoding {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Encoding::Latin1),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            other => anyhow::bail!("Unknown encoding: {other}"),
        }
    }
}

impl Encoding {
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Encoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    pub scoring: Scoring,
    pub ham_label: String,
    pub spam_label: String,
    pub label_column: usize,
    pub text_column: usize,
    pub has_headers: bool,
    pub encoding: Encoding,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoring: Scoring::default(),
            ham_label: LABEL_HAM.to_string(),
            spam_label: LABEL_SPAM.to_string(),
            label_column: DEFAULT_LABEL_COLUMN,
            text_column: DEFAULT_TEXT_COLUMN,
            has_headers: true,
            encoding: Encoding::default(),
        }
    }
}

impl Settings {
    /// Parse a flat JSON object of string values. Missing or malformed
    /// entries keep their default.
    pub fn from_json(value: &str) -> Result<Self> {
        let data: HashMap<String, String> = serde_json::from_str(value)?;
        let defaults = Self::default();

        fn parsed<T: FromStr>(data: &HashMap<String, String>, key: &str) -> Option<T> {
            let value = data.get(key)?;
            let parsed = value.parse::<T>().ok();
            if parsed.is_none() {
                warn!(key, value = value.as_str(), "invalid setting, using default");
            }
            parsed
        }

        let settings = Self {
            scoring: parsed(&data, "scoring").unwrap_or(defaults.scoring),
            ham_label: data.get("ham_label").cloned().unwrap_or(defaults.ham_label),
            spam_label: data.get("spam_label").cloned().unwrap_or(defaults.spam_label),
            label_column: parsed(&data, "label_column").unwrap_or(defaults.label_column),
            text_column: parsed(&data, "text_column").unwrap_or(defaults.text_column),
            has_headers: parsed(&data, "has_headers").unwrap_or(defaults.has_headers),
            encoding: parsed(&data, "encoding").unwrap_or(defaults.encoding),
        };
        settings.labels()?;

        Ok(settings)
    }

    /// Read settings from `BAYES_SPAM_FILTER_SETTINGS`, or defaults if unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SETTINGS_ENV) {
            Ok(value) => Self::from_json(&value),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn labels(&self) -> crate::Result<LabelMap> {
        LabelMap::new(&self.ham_label, &self.spam_label)
    }
}
