//! Naive Bayes spam/ham classifier.
//!
//! Train a [`TrainedModel`] once from a labeled [`Corpus`], then classify
//! messages against it read-only.
//!
//! ```
//! use bayes_spam_filter::{build, classify, Corpus, Label, LabeledMessage};
//!
//! let corpus = Corpus::new(vec![
//!     LabeledMessage::ham("hello world"),
//!     LabeledMessage::spam("win money now"),
//! ]);
//! let model = build(&corpus).unwrap();
//! assert_eq!(classify("win money", &model), Label::Spam);
//! ```

pub mod classifier;
pub mod corpus;
#[cfg(feature = "training")]
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod model;
pub mod settings;
pub mod tokenizer;

pub use classifier::{classify, ClassificationResult, NaiveBayesClassifier, Scores, Scoring};
pub use corpus::{Corpus, Label, LabelMap, LabeledMessage};
pub use error::{Error, Result};
pub use evaluate::{evaluate, Evaluation};
pub use model::{CorpusStats, TrainedModel};
pub use settings::{Encoding, Settings};
pub use tokenizer::tokenize;

/// Train a model on `corpus`. See [`TrainedModel::build`].
pub fn build(corpus: &Corpus) -> Result<TrainedModel> {
    TrainedModel::build(corpus)
}

/// Laplace-smoothed P(token | label). See [`TrainedModel::likelihood`].
pub fn likelihood(token: &str, label: Label, model: &TrainedModel) -> f64 {
    model.likelihood(token, label)
}
