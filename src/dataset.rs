use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::corpus::{Corpus, LabeledMessage};
use crate::settings::Settings;

/// Read a labeled CSV dataset into a corpus, keeping record order.
///
/// Columns beyond the configured label and text columns are ignored. A label
/// outside the configured pair fails the whole load.
pub fn load_csv<R: Read>(reader: R, settings: &Settings) -> Result<Corpus> {
    let labels = settings.labels()?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(settings.has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut messages = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Could not read record {index}"))?;

        let field = |column: usize| {
            record
                .get(column)
                .with_context(|| format!("Record {index} has no column {column}"))
                .and_then(|bytes| settings.encoding.decode(bytes))
        };

        let label = labels.parse(&field(settings.label_column)?)?;
        messages.push(LabeledMessage::new(label, field(settings.text_column)?));
    }

    debug!(records = messages.len(), "loaded dataset");

    Ok(Corpus::new(messages))
}

pub fn load_path<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<Corpus> {
    let path = path.as_ref();
    info!("Reading dataset from {}", path.display());

    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    load_csv(io::BufReader::new(file), settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Label;
    use crate::error::Error;
    use crate::settings::Encoding;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_with_trailing_columns() {
        let data = "v1,v2,,,\n\
                    ham,\"Go until jurong point, crazy..\",,,\n\
                    spam,Free entry in 2 a wkly comp,,,\n\
                    ham,Ok lar... Joking wif u oni...\n";

        let corpus = load_csv(data.as_bytes(), &Settings::default()).unwrap();
        assert_eq!(
            corpus.messages(),
            &[
                LabeledMessage::ham("Go until jurong point, crazy.."),
                LabeledMessage::spam("Free entry in 2 a wkly comp"),
                LabeledMessage::ham("Ok lar... Joking wif u oni..."),
            ]
        );
    }

    #[test]
    fn test_latin1_text() {
        let data: &[u8] = b"label,message\nspam,Win \xa3100 now\n";
        let corpus = load_csv(data, &Settings::default()).unwrap();
        assert_eq!(corpus.messages()[0].text, "Win £100 now");
    }

    #[test]
    fn test_custom_columns_and_labels() {
        let settings = Settings {
            ham_label: "0".to_string(),
            spam_label: "1".to_string(),
            label_column: 1,
            text_column: 0,
            has_headers: false,
            encoding: Encoding::Utf8,
            ..Settings::default()
        };
        let data = "see you at lunch,0\nclaim your prize,1\n";

        let corpus = load_csv(data.as_bytes(), &settings).unwrap();
        assert_eq!(corpus.count(Label::Ham), 1);
        assert_eq!(corpus.messages()[1], LabeledMessage::spam("claim your prize"));
    }

    #[test]
    fn test_unknown_label() {
        let data = "label,message\nham,hi\nphishing,click here\n";
        let err = load_csv(data.as_bytes(), &Settings::default()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::UnknownLabel("phishing".to_string()))
        );
    }

    #[test]
    fn test_duplicate_labels() {
        let settings = Settings {
            ham_label: "spam".to_string(),
            ..Settings::default()
        };
        let data = "label,message\nspam,hello\nspam,win\n";
        let err = load_csv(data.as_bytes(), &settings).unwrap_err();

        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::DuplicateLabel("spam".to_string()))
        );
    }

    #[test]
    fn test_missing_column() {
        let data = "label,message\nham\n";
        assert!(load_csv(data.as_bytes(), &Settings::default()).is_err());
    }
}
