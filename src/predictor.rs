//! Trainable action prediction.
//!
//! Training replays the [`Oracle`] over every sentence of a reference corpus
//! and fits a [`Classifier`] on the resulting (features, action) pairs. At
//! inference the predictor answers the parser in place of the oracle.

use crate::classifier::{AveragedPerceptron, Classifier};
use crate::errors::{DepParseError, DepParseResult};
use crate::features::{extract_features, TrainingExample};
use crate::{parse, Action, ActionSource, Configuration, Oracle, Sentence, TrainingConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Replay the oracle over one sentence and return its training examples.
///
/// The replay runs on a copy, so the reference heads of `sentence` are left
/// as they were.
pub fn oracle_examples(sentence: &Sentence) -> Vec<TrainingExample> {
    let mut oracle = Oracle::new(sentence);
    let mut scratch = sentence.clone();
    parse(&mut scratch, &mut oracle);
    oracle.into_examples()
}

/// Collect training examples from a corpus, in corpus order.
///
/// Collecting disjoint parts of a corpus separately and concatenating the
/// results gives the same examples as one pass over the whole corpus.
pub fn collect_examples<'a, I>(corpus: I) -> Vec<TrainingExample>
where
    I: IntoIterator<Item = &'a Sentence>,
{
    let mut examples = Vec::new();
    let mut sentences = 0;
    for sentence in corpus {
        examples.extend(oracle_examples(sentence));
        sentences += 1;
    }
    log::info!(
        "collected {} training examples from {} sentences",
        examples.len(),
        sentences
    );
    examples
}

/// Predicts parser actions with a trained classifier.
///
/// The predictor never checks whether its answer is valid for the
/// configuration; the parser engine's fallback takes care of that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPredictor<C = AveragedPerceptron> {
    classifier: C,
}

impl ActionPredictor<AveragedPerceptron> {
    /// Train an averaged perceptron predictor on a reference corpus.
    pub fn train<'a, I>(corpus: I, config: &TrainingConfig) -> Self
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        Self::train_with(AveragedPerceptron::new(config), corpus)
    }
}

impl<C: Classifier> ActionPredictor<C> {
    /// Train the given classifier on a reference corpus.
    pub fn train_with<'a, I>(mut classifier: C, corpus: I) -> Self
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        let examples = collect_examples(corpus);
        classifier.fit(&examples);
        Self { classifier }
    }

    /// Wrap an already trained classifier.
    pub fn from_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Most likely action for a configuration.
    pub fn predict(&self, config: &Configuration<'_>) -> Action {
        self.classifier.predict(&extract_features(config))
    }
}

impl<C: Serialize> ActionPredictor<C> {
    /// Serialize the trained predictor to RON.
    pub fn to_ron_string(&self) -> DepParseResult<String> {
        let config = ron::ser::PrettyConfig::new().depth_limit(4);
        ron::ser::to_string_pretty(self, config).map_err(|e| DepParseError::Model {
            message: e.to_string(),
        })
    }
}

impl<C: DeserializeOwned> ActionPredictor<C> {
    /// Restore a predictor serialized with [`ActionPredictor::to_ron_string`].
    pub fn from_ron_string(s: &str) -> DepParseResult<Self> {
        ron::from_str(s).map_err(|e| DepParseError::Model {
            message: e.to_string(),
        })
    }
}

impl<C: Classifier> ActionSource for ActionPredictor<C> {
    fn next_action(&mut self, config: &Configuration<'_>) -> Action {
        self.predict(config)
    }
}
