use std::str::FromStr;

use tracing::trace;

use crate::corpus::Label;
use crate::model::TrainedModel;
use crate::tokenizer::tokenize;

/// How posterior scores are accumulated.
///
/// `Product` multiplies plain probabilities. Long messages can underflow both
/// scores to 0.0, which then resolves to HAM through the tie-break.
/// `LogSpace` sums logarithms and keeps deciding those messages on the
/// evidence; every other decision is the same.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    #[default]
    Product,
    LogSpace,
}

impl FromStr for Scoring {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "product" => Ok(Scoring::Product),
            "log" | "log_space" | "log-space" => Ok(Scoring::LogSpace),
            other => anyhow::bail!("Unknown scoring mode: {other}"),
        }
    }
}

/// Unnormalized posterior scores, in the representation of `scoring`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub spam: f64,
    pub ham: f64,
    pub scoring: Scoring,
}

impl Scores {
    /// SPAM only on a strictly higher spam score; ties go to HAM.
    pub fn label(&self) -> Label {
        if self.spam > self.ham {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}

/// Score already tokenized text against both classes.
pub fn score_tokens<S: AsRef<str>>(
    model: &TrainedModel,
    tokens: &[S],
    scoring: Scoring,
) -> Scores {
    let (mut spam, mut ham) = match scoring {
        Scoring::Product => (model.prior_spam(), model.prior_ham()),
        Scoring::LogSpace => (model.prior_spam().ln(), model.prior_ham().ln()),
    };

    for token in tokens {
        let (p_word_spam, p_word_ham) = model.likelihoods(token.as_ref());

        match scoring {
            Scoring::Product => {
                spam *= p_word_spam;
                ham *= p_word_ham;
            }
            Scoring::LogSpace => {
                spam += p_word_spam.ln();
                ham += p_word_ham.ln();
            }
        }
    }

    Scores { spam, ham, scoring }
}

/// Classify `text` with plain floating-point products.
pub fn classify(text: &str, model: &TrainedModel) -> Label {
    score_tokens(model, &tokenize(text), Scoring::Product).label()
}

/// Naive Bayes spam classifier over a trained model
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    model: TrainedModel,
    scoring: Scoring,
}

impl NaiveBayesClassifier {
    pub fn new(model: TrainedModel) -> Self {
        Self {
            model,
            scoring: Scoring::default(),
        }
    }

    pub fn with_scoring(model: TrainedModel, scoring: Scoring) -> Self {
        Self { model, scoring }
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    pub fn set_scoring(&mut self, scoring: Scoring) {
        self.scoring = scoring;
    }

    pub fn scores(&self, text: &str) -> Scores {
        let scores = score_tokens(&self.model, &tokenize(text), self.scoring);
        trace!(spam = scores.spam, ham = scores.ham, "scored message");
        scores
    }

    pub fn classify(&self, text: &str) -> Label {
        self.scores(text).label()
    }

    /// Get detailed classification results
    pub fn classify_detailed(&self, text: &str) -> ClassificationResult {
        let scores = self.scores(text);

        let spam_probability = match scores.scoring {
            Scoring::Product => scores.spam / (scores.spam + scores.ham),
            Scoring::LogSpace => 1.0 / (1.0 + (scores.ham - scores.spam).exp()),
        };

        // Both products underflowed, nothing left to normalize
        let spam_probability = if spam_probability.is_finite() {
            spam_probability
        } else {
            self.model.prior_spam()
        };

        ClassificationResult {
            label: scores.label(),
            spam_score: scores.spam,
            ham_score: scores.ham,
            spam_probability,
            scoring: scores.scoring,
        }
    }
}

/// Detailed classification result
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub spam_score: f64,
    pub ham_score: f64,
    pub spam_probability: f64,
    pub scoring: Scoring,
}

impl ClassificationResult {
    pub fn is_spam(&self) -> bool {
        self.label.is_spam()
    }

    pub fn ham_probability(&self) -> f64 {
        1.0 - self.spam_probability
    }
}
