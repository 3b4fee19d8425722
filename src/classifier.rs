//! Classifiers mapping feature maps to actions.

use crate::features::{FeatureMap, TrainingExample};
use crate::{Action, TrainingConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A multi-class action classifier.
///
/// The label set is [`Action`] itself, so a classifier cannot answer with a
/// label outside the three arc-standard actions. How unseen feature values
/// are treated is up to the implementation.
pub trait Classifier {
    fn fit(&mut self, examples: &[TrainingExample]);

    fn predict(&self, features: &FeatureMap) -> Action;
}

const CLASSES: usize = Action::ALL.len();

/// Always-on feature so that the action prior can be learned.
const BIAS: &str = "bias";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FeatureWeights {
    weights: [f64; CLASSES],
    /// Sum of each weight over all iterations up to `stamps`
    totals: [f64; CLASSES],
    /// Iteration at which each weight last changed
    stamps: [u64; CLASSES],
    observations: u64,
}

impl FeatureWeights {
    fn update(&mut self, class: usize, delta: f64, iteration: u64) {
        self.totals[class] += (iteration - self.stamps[class]) as f64 * self.weights[class];
        self.stamps[class] = iteration;
        self.weights[class] += delta;
    }

    fn average(&mut self, iterations: u64) {
        for class in 0..CLASSES {
            self.totals[class] += (iterations - self.stamps[class]) as f64 * self.weights[class];
            self.stamps[class] = iterations;
            self.weights[class] = self.totals[class] / iterations as f64;
        }
    }
}

/// Averaged multi-class perceptron over `name=value` indicator features.
///
/// The feature vocabulary lives inside the instance and is fixed once
/// [`Classifier::fit`] returns. Fitting again starts from scratch. Features never seen in training carry no
/// weight; ties go to the earliest action in [`Action::ALL`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AveragedPerceptron {
    epochs: usize,
    min_observations: u64,
    data: HashMap<String, FeatureWeights>,
    iteration: u64,
}

impl AveragedPerceptron {
    pub fn new(config: &TrainingConfig) -> Self {
        Self {
            epochs: config.epochs,
            min_observations: config.min_observations,
            data: HashMap::new(),
            iteration: 0,
        }
    }

    /// Number of distinct features with learned weights.
    pub fn vocabulary_len(&self) -> usize {
        self.data.len()
    }

    fn indicators(features: &FeatureMap) -> Vec<String> {
        std::iter::once(BIAS.to_string())
            .chain(features.iter().map(|(name, value)| format!("{}={}", name, value)))
            .collect()
    }

    fn scores(&self, indicators: &[String]) -> [f64; CLASSES] {
        let mut scores = [0f64; CLASSES];
        for key in indicators {
            if let Some(record) = self.data.get(key) {
                for (score, weight) in scores.iter_mut().zip(record.weights.iter()) {
                    *score += weight;
                }
            }
        }
        scores
    }

    fn best(scores: &[f64; CLASSES]) -> Action {
        let mut best = 0;
        for class in 1..CLASSES {
            if scores[class] > scores[best] {
                best = class;
            }
        }
        Action::ALL[best]
    }

    fn predict_and_update(&mut self, indicators: &[String], truth: Action) -> Action {
        let guess = Self::best(&self.scores(indicators));
        if guess != truth {
            for key in indicators {
                if let Some(record) = self.data.get_mut(key) {
                    record.update(truth.index(), 1.0, self.iteration);
                    record.update(guess.index(), -1.0, self.iteration);
                }
            }
        }
        self.iteration += 1;
        guess
    }
}

impl Default for AveragedPerceptron {
    fn default() -> Self {
        Self::new(&TrainingConfig::default())
    }
}

impl Classifier for AveragedPerceptron {
    fn fit(&mut self, examples: &[TrainingExample]) {
        let encoded: Vec<(Vec<String>, Action)> = examples
            .iter()
            .map(|ex| (Self::indicators(&ex.features), ex.action))
            .collect();

        self.data.clear();
        self.iteration = 0;
        for (indicators, _) in &encoded {
            for key in indicators {
                self.data.entry(key.clone()).or_default().observations += 1;
            }
        }

        for epoch in 0..self.epochs {
            let correct = encoded
                .iter()
                .filter(|(indicators, truth)| self.predict_and_update(indicators, *truth) == *truth)
                .count();
            log::info!(
                "epoch {}: {}/{} training actions predicted correctly",
                epoch + 1,
                correct,
                encoded.len()
            );
        }

        let min_observations = self.min_observations;
        self.data.retain(|_, record| record.observations >= min_observations);
        if self.iteration > 0 {
            let iterations = self.iteration;
            for record in self.data.values_mut() {
                record.average(iterations);
            }
        }
        log::info!("perceptron vocabulary: {} features", self.data.len());
    }

    fn predict(&self, features: &FeatureMap) -> Action {
        Self::best(&self.scores(&Self::indicators(features)))
    }
}
