//! Train a spam classifier from a labeled CSV dataset and report its accuracy.
//!
//! ```bash
//! train spam.csv "Get 90 percent discount. Buy 5 get 1 free"
//! train spam.csv --settings '{"scoring": "log"}'
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bayes_spam_filter::{dataset, Label, NaiveBayesClassifier, Settings, TrainedModel};

#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train a Naive Bayes spam classifier and evaluate it", long_about = None)]
struct Cli {
    /// Labeled CSV dataset
    dataset: PathBuf,

    /// Messages to classify with the trained model
    messages: Vec<String>,

    /// Settings as a JSON object of strings, overrides BAYES_SPAM_FILTER_SETTINGS
    #[arg(short, long)]
    settings: Option<String>,
}

struct TrainingStats {
    total_samples: u64,
    spam_samples: u64,
    ham_samples: u64,
    total_tokens: u64,
    unique_tokens: u64,
    prior_spam: f64,
    prior_ham: f64,
}

impl TrainingStats {
    fn from_model(model: &TrainedModel) -> Self {
        let stats = model.stats();

        Self {
            total_samples: stats.total_messages(),
            spam_samples: stats.messages(Label::Spam),
            ham_samples: stats.messages(Label::Ham),
            total_tokens: stats.total_tokens(),
            unique_tokens: stats.vocabulary_size(),
            prior_spam: model.prior_spam(),
            prior_ham: model.prior_ham(),
        }
    }

    fn print(&self) {
        let total = self.total_samples as f64;

        println!("=== Training Statistics ===");
        println!("Total samples: {}", self.total_samples);
        println!(
            "Spam samples: {} ({:.1}%)",
            self.spam_samples,
            self.spam_samples as f64 / total * 100.0
        );
        println!(
            "Ham samples: {} ({:.1}%)",
            self.ham_samples,
            self.ham_samples as f64 / total * 100.0
        );
        println!("Total tokens: {}", self.total_tokens);
        println!("Unique tokens: {}", self.unique_tokens);
        println!(
            "Average tokens per sample: {:.1}",
            self.total_tokens as f64 / total
        );
        println!("Prior P(spam): {:.3}", self.prior_spam);
        println!("Prior P(ham): {:.3}", self.prior_ham);
        println!("==========================");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bayes_spam_filter=info,train=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = match cli.settings {
        Some(ref value) => Settings::from_json(value)?,
        None => Settings::from_env()?,
    };
    info!(scoring = ?settings.scoring, "using settings");

    let corpus = dataset::load_path(&cli.dataset, &settings)?;

    info!("Building token counters...");
    let model = TrainedModel::build(&corpus)?;
    TrainingStats::from_model(&model).print();

    let classifier = NaiveBayesClassifier::with_scoring(model, settings.scoring);

    info!("Evaluating on the training dataset...");
    let evaluation = classifier.evaluate(&corpus)?;
    println!("Accuracy: {:.2}%", evaluation.accuracy() * 100.0);

    for message in &cli.messages {
        let result = classifier.classify_detailed(message);
        info!(
            spam_probability = result.spam_probability,
            "classified message"
        );
        println!("Message: {} => {}", message, result.label);
    }

    Ok(())
}
