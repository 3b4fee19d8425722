//! Feature extraction from parser configurations.

use crate::{Action, Configuration};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Feature name to feature value.
pub type FeatureMap = BTreeMap<String, String>;

pub const TOKEN_STACK: &str = "token.stack";
pub const POS_STACK: &str = "pos.stack";
pub const TOKEN_STACK2: &str = "token.stack2";
pub const POS_STACK2: &str = "pos.stack2";
pub const TOKEN_QUEUE: &str = "token.queue";
pub const POS_QUEUE: &str = "pos.queue";

/// Emitted alone when neither the stack nor the queue has a word.
pub const END_OF_PARSE: &str = "end-of-parse";

/// A configuration's features paired with the action taken there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub features: FeatureMap,
    pub action: Action,
}

impl TrainingExample {
    pub fn new(features: FeatureMap, action: Action) -> Self {
        Self { features, action }
    }
}

/// Extract features from the top two stack words and the front of the queue.
///
/// Each available position contributes its surface form and coarse tag;
/// missing positions contribute nothing. The result is never empty.
pub fn extract_features(config: &Configuration<'_>) -> FeatureMap {
    let mut features = FeatureMap::new();

    let slots = [
        (config.stack_top(), TOKEN_STACK, POS_STACK),
        (config.stack_second(), TOKEN_STACK2, POS_STACK2),
        (config.queue_front(), TOKEN_QUEUE, POS_QUEUE),
    ];
    for (word, token_key, pos_key) in slots {
        if let Some(word) = word {
            features.insert(token_key.to_string(), word.form_or_blank().to_string());
            features.insert(pos_key.to_string(), word.upos.clone());
        }
    }

    if features.is_empty() {
        features.insert(END_OF_PARSE.to_string(), "true".to_string());
    }

    features
}
