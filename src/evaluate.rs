use tracing::debug;

use crate::classifier::{classify, NaiveBayesClassifier};
use crate::corpus::{Corpus, Label};
use crate::error::{Error, Result};
use crate::model::TrainedModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
}

impl Evaluation {
    /// Fraction of messages whose predicted label matched, in `[0, 1]`.
    /// Zero when nothing was evaluated.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

/// Classify every message once and count matches against its true label.
///
/// `on_prediction` sees each message index and its predicted label, in
/// corpus order.
pub fn evaluate_with<C, F>(
    corpus: &Corpus,
    classify: C,
    mut on_prediction: F,
) -> Result<Evaluation>
where
    C: Fn(&str) -> Label,
    F: FnMut(usize, Label),
{
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let mut evaluation = Evaluation {
        correct: 0,
        total: corpus.len(),
    };

    for (index, message) in corpus.iter().enumerate() {
        let predicted = classify(&message.text);
        if predicted == message.label {
            evaluation.correct += 1;
        }
        on_prediction(index, predicted);
    }

    debug!(
        correct = evaluation.correct,
        total = evaluation.total,
        "evaluated corpus"
    );

    Ok(evaluation)
}

/// Accuracy of plain-product classification against `model`.
pub fn evaluate(corpus: &Corpus, model: &TrainedModel) -> Result<f64> {
    evaluate_with(corpus, |text| classify(text, model), |_, _| {})
        .map(|evaluation| evaluation.accuracy())
}

impl NaiveBayesClassifier {
    pub fn evaluate(&self, corpus: &Corpus) -> Result<Evaluation> {
        evaluate_with(corpus, |text| self.classify(text), |_, _| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Scoring;
    use crate::corpus::LabeledMessage;
    use pretty_assertions::assert_eq;

    fn model() -> TrainedModel {
        let corpus = Corpus::new(vec![
            LabeledMessage::ham("hello world"),
            LabeledMessage::spam("win money now"),
        ]);
        TrainedModel::build(&corpus).unwrap()
    }

    #[test]
    fn test_all_correct() {
        let corpus = Corpus::new(vec![
            LabeledMessage::ham("hello world"),
            LabeledMessage::spam("win money now"),
            LabeledMessage::spam("win"),
        ]);
        assert_eq!(evaluate(&corpus, &model()), Ok(1.0));

        let classifier = NaiveBayesClassifier::with_scoring(model(), Scoring::LogSpace);
        assert_eq!(
            classifier.evaluate(&corpus),
            Ok(Evaluation { correct: 3, total: 3 })
        );
    }

    #[test]
    fn test_all_wrong() {
        let corpus = Corpus::new(vec![
            LabeledMessage::spam("hello world"),
            LabeledMessage::ham("win money"),
        ]);
        assert_eq!(evaluate(&corpus, &model()), Ok(0.0));
    }

    #[test]
    fn test_partial_and_predictions() {
        let corpus = Corpus::new(vec![
            LabeledMessage::ham("hello"),
            LabeledMessage::ham("money now"),
            LabeledMessage::spam("win"),
            LabeledMessage::spam(""),
        ]);

        let mut predictions = Vec::new();
        let model = model();
        let evaluation = evaluate_with(
            &corpus,
            |text| classify(text, &model),
            |index, label| predictions.push((index, label)),
        )
        .unwrap();

        assert_eq!(
            predictions,
            vec![
                (0, Label::Ham),
                (1, Label::Spam),
                (2, Label::Spam),
                (3, Label::Ham),
            ]
        );
        assert_eq!(evaluation, Evaluation { correct: 2, total: 4 });
        assert_eq!(evaluation.accuracy(), 0.5);
    }

    #[test]
    fn test_accuracy_without_messages() {
        let evaluation = Evaluation { correct: 0, total: 0 };
        assert_eq!(evaluation.accuracy(), 0.0);
    }

    #[test]
    fn test_empty_corpus() {
        assert_eq!(
            evaluate(&Corpus::default(), &model()),
            Err(Error::EmptyCorpus)
        );
    }
}
