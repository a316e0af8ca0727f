use std::collections::HashMap;

use tracing::debug;

use crate::corpus::{Corpus, Label};
use crate::error::{Error, Result};
use crate::tokenizer::tokenize;

/// Per-token occurrence counts in each class.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub spam: u32,
    pub ham: u32,
}

impl Counter {
    pub fn get(self, label: Label) -> u32 {
        match label {
            Label::Spam => self.spam,
            Label::Ham => self.ham,
        }
    }

    fn increment(&mut self, label: Label) {
        match label {
            Label::Spam => self.spam += 1,
            Label::Ham => self.ham += 1,
        }
    }
}

/// Aggregate counts gathered in the training pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    spam_messages: u64,
    ham_messages: u64,
    total_spam_tokens: u64,
    total_ham_tokens: u64,
    vocabulary_size: u64,
}

impl CorpusStats {
    fn record(&mut self, label: Label, tokens: u64) {
        match label {
            Label::Spam => {
                self.spam_messages += 1;
                self.total_spam_tokens += tokens;
            }
            Label::Ham => {
                self.ham_messages += 1;
                self.total_ham_tokens += tokens;
            }
        }
    }

    pub fn messages(&self, label: Label) -> u64 {
        match label {
            Label::Spam => self.spam_messages,
            Label::Ham => self.ham_messages,
        }
    }

    pub fn total_messages(&self) -> u64 {
        self.spam_messages + self.ham_messages
    }

    pub fn tokens(&self, label: Label) -> u64 {
        match label {
            Label::Spam => self.total_spam_tokens,
            Label::Ham => self.total_ham_tokens,
        }
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_spam_tokens + self.total_ham_tokens
    }

    /// Number of distinct tokens across both classes.
    pub fn vocabulary_size(&self) -> u64 {
        self.vocabulary_size
    }

    /// Calculate prior probability P(spam)
    pub fn prior_spam(&self) -> f64 {
        self.prior(Label::Spam)
    }

    /// Calculate prior probability P(ham)
    pub fn prior_ham(&self) -> f64 {
        self.prior(Label::Ham)
    }

    pub fn prior(&self, label: Label) -> f64 {
        self.messages(label) as f64 / self.total_messages() as f64
    }
}

/// Word statistics learned from a labeled corpus. Immutable once built.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    counters: HashMap<String, Counter>,
    stats: CorpusStats,
}

impl TrainedModel {
    /// Train on `corpus` in a single pass.
    ///
    /// Fails with [`Error::EmptyCorpus`] when there is nothing to estimate
    /// priors from.
    pub fn build(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut counters: HashMap<String, Counter> = HashMap::with_capacity(256);
        let mut stats = CorpusStats::default();

        for message in corpus {
            let tokens = tokenize(&message.text);
            stats.record(message.label, tokens.len() as u64);

            for token in tokens {
                counters.entry(token).or_default().increment(message.label);
            }
        }

        stats.vocabulary_size = counters.len() as u64;

        debug!(
            spam_messages = stats.spam_messages,
            ham_messages = stats.ham_messages,
            spam_tokens = stats.total_spam_tokens,
            ham_tokens = stats.total_ham_tokens,
            vocabulary_size = stats.vocabulary_size,
            "trained model"
        );

        Ok(Self { counters, stats })
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    pub fn prior_spam(&self) -> f64 {
        self.stats.prior_spam()
    }

    pub fn prior_ham(&self) -> f64 {
        self.stats.prior_ham()
    }

    pub fn prior(&self, label: Label) -> f64 {
        self.stats.prior(label)
    }

    fn counter(&self, token: &str) -> Counter {
        self.counters.get(token).copied().unwrap_or_default()
    }

    /// Occurrences of `token` in messages of class `label`.
    pub fn count(&self, token: &str, label: Label) -> u32 {
        self.counter(token).get(label)
    }

    /// Tokens with a non-zero count in class `label`.
    pub fn class_counts(&self, label: Label) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counters
            .iter()
            .map(move |(token, counter)| (token.as_str(), counter.get(label)))
            .filter(|(_, count)| *count > 0)
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + '_ {
        self.counters.keys().map(String::as_str)
    }

    pub fn in_vocabulary(&self, token: &str) -> bool {
        self.counters.contains_key(token)
    }

    /// Laplace-smoothed P(token | label).
    ///
    /// The denominator uses the vocabulary of both classes, whichever class
    /// is scored. A model trained only on letterless messages has no
    /// evidence at all and yields 1.0 for every token.
    pub fn likelihood(&self, token: &str, label: Label) -> f64 {
        self.smoothed(self.counter(token).get(label), label)
    }

    /// Both class likelihoods from a single lookup, `(spam, ham)`.
    pub fn likelihoods(&self, token: &str) -> (f64, f64) {
        let counter = self.counter(token);
        (
            self.smoothed(counter.spam, Label::Spam),
            self.smoothed(counter.ham, Label::Ham),
        )
    }

    fn smoothed(&self, count: u32, label: Label) -> f64 {
        let denominator = self.stats.tokens(label) + self.stats.vocabulary_size;
        if denominator == 0 {
            return 1.0;
        }
        (count as f64 + 1.0) / denominator as f64
    }
}
