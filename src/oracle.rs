//! Static oracle for arc-standard parsing.

use crate::features::{extract_features, FeatureMap, TrainingExample};
use crate::{Action, ActionSource, Configuration, Head, Sentence};
use std::collections::{HashMap, HashSet};

/// Chooses the correct action for each configuration of a reference tree.
///
/// The oracle snapshots the reference heads of the sentence it is built
/// from and tracks, for every head, which of its dependents have not been
/// attached yet. An arc is only produced once its dependent has received all
/// of its own dependents, because the dependent leaves the stack with it.
///
/// An oracle is valid for exactly one sentence and one full parse. Create a
/// new one for every sentence; reuse is not detected.
#[derive(Debug, Clone)]
pub struct Oracle {
    reference: HashMap<String, Head>,
    remaining: HashMap<String, HashSet<String>>,
    actions: Vec<Action>,
    features: Vec<FeatureMap>,
}

impl Oracle {
    /// Build an oracle from a sentence carrying reference heads.
    pub fn new(sentence: &Sentence) -> Self {
        let mut reference = HashMap::new();
        let mut remaining: HashMap<String, HashSet<String>> = HashMap::new();

        for word in sentence.words() {
            let head = match &word.head {
                Some(head) => head,
                None => continue,
            };
            reference.insert(word.id.clone(), head.clone());
            if let Head::Word(head_id) = head {
                remaining
                    .entry(head_id.clone())
                    .or_default()
                    .insert(word.id.clone());
            }
        }

        Self {
            reference,
            remaining,
            actions: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Actions chosen so far, in order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Features of each configuration the oracle was asked about, aligned
    /// with [`Oracle::actions`].
    pub fn features(&self) -> &[FeatureMap] {
        &self.features
    }

    /// Pair up the logged features and actions.
    pub fn into_examples(self) -> Vec<TrainingExample> {
        self.features
            .into_iter()
            .zip(self.actions)
            .map(|(features, action)| TrainingExample::new(features, action))
            .collect()
    }

    fn is_reference_head(&self, dependent: &str, head: &str) -> bool {
        self.reference
            .get(dependent)
            .map_or(false, |h| h.is_word(head))
    }

    fn has_remaining_dependents(&self, id: &str) -> bool {
        self.remaining.get(id).map_or(false, |deps| !deps.is_empty())
    }

    fn resolve(&mut self, head: &str, dependent: &str) {
        if let Some(deps) = self.remaining.get_mut(head) {
            deps.remove(dependent);
        }
    }

    fn decide(&mut self, config: &Configuration<'_>) -> Action {
        let (top, second) = match (config.stack_top(), config.stack_second()) {
            (Some(top), Some(second)) => (top, second),
            _ => return Action::Shift,
        };

        if self.is_reference_head(&second.id, &top.id) && !self.has_remaining_dependents(&second.id)
        {
            self.resolve(&top.id, &second.id);
            Action::LeftArc
        } else if self.is_reference_head(&top.id, &second.id)
            && !self.has_remaining_dependents(&top.id)
        {
            self.resolve(&second.id, &top.id);
            Action::RightArc
        } else {
            Action::Shift
        }
    }
}

impl ActionSource for Oracle {
    fn next_action(&mut self, config: &Configuration<'_>) -> Action {
        let action = self.decide(config);
        log::trace!(
            "oracle: stack={} queue={} -> {}",
            config.stack_len(),
            config.queue_len(),
            action
        );
        self.features.push(extract_features(config));
        self.actions.push(action);
        action
    }
}
