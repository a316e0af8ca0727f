use std::fmt;

use crate::error::{Error, Result};

pub const LABEL_HAM: &str = "ham";
pub const LABEL_SPAM: &str = "spam";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => f.write_str("Ham"),
            Label::Spam => f.write_str("Spam"),
        }
    }
}

/// Maps the two textual category values of a dataset onto [`Label`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    pub ham: String,
    pub spam: String,
}

impl Default for LabelMap {
    fn default() -> Self {
        Self {
            ham: LABEL_HAM.to_string(),
            spam: LABEL_SPAM.to_string(),
        }
    }
}

impl LabelMap {
    /// Fails with [`Error::DuplicateLabel`] when both classes share a value.
    pub fn new(ham: impl Into<String>, spam: impl Into<String>) -> Result<Self> {
        let (ham, spam) = (ham.into(), spam.into());
        if ham == spam {
            return Err(Error::DuplicateLabel(ham));
        }
        Ok(Self { ham, spam })
    }

    pub fn parse(&self, raw: &str) -> Result<Label> {
        if raw == self.spam {
            Ok(Label::Spam)
        } else if raw == self.ham {
            Ok(Label::Ham)
        } else {
            Err(Error::UnknownLabel(raw.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMessage {
    pub text: String,
    pub label: Label,
}

impl LabeledMessage {
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    pub fn ham(text: impl Into<String>) -> Self {
        Self::new(Label::Ham, text)
    }

    pub fn spam(text: impl Into<String>) -> Self {
        Self::new(Label::Spam, text)
    }
}

/// Ordered, read-only sequence of labeled messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    messages: Vec<LabeledMessage>,
}

impl Corpus {
    pub fn new(messages: Vec<LabeledMessage>) -> Self {
        Self { messages }
    }

    /// Build a corpus from `(label, text)` pairs, rejecting the first label
    /// that `labels` does not recognise.
    pub fn from_raw<I, L, T>(records: I, labels: &LabelMap) -> Result<Self>
    where
        I: IntoIterator<Item = (L, T)>,
        L: AsRef<str>,
        T: Into<String>,
    {
        records
            .into_iter()
            .map(|(label, text)| Ok(LabeledMessage::new(labels.parse(label.as_ref())?, text)))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    pub fn messages(&self) -> &[LabeledMessage] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn count(&self, label: Label) -> usize {
        self.messages.iter().filter(|m| m.label == label).count()
    }
}

impl FromIterator<LabeledMessage> for Corpus {
    fn from_iter<I: IntoIterator<Item = LabeledMessage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a LabeledMessage;
    type IntoIter = std::slice::Iter<'a, LabeledMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
