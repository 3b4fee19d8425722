#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Arc-standard transition-based dependency parsing.
//!
//! A sentence is parsed by moving its words from a queue onto a stack and
//! combining the top two stack words into head-dependent pairs. Which action
//! to take at each step is decided by an [`ActionSource`]:
//!
//! - [`Oracle`] - reads the correct action off a reference tree
//! - [`ActionPredictor`] - a classifier trained on oracle decisions
//! - [`ScriptedActions`] - replays a fixed action list
//! - any `FnMut(&Configuration) -> Action` closure
//!
//! ## Example
//!
//! ```
//! use layered_depparse::{parse, Head, Oracle, ScriptedActions, Sentence, Word};
//!
//! let mut sentence = Sentence::new(vec![
//!     Word::new("1", "the", "DET").with_head(Head::from_id("2")),
//!     Word::new("2", "dog", "NOUN").with_head(Head::from_id("3")),
//!     Word::new("3", "barked", "VERB").with_head(Head::Root),
//! ]);
//! let reference = sentence.heads();
//!
//! let mut oracle = Oracle::new(&sentence);
//! parse(&mut sentence, &mut oracle);
//!
//! sentence.clear_annotations();
//! parse(&mut sentence, &mut ScriptedActions::new(oracle.actions().to_vec()));
//! assert_eq!(sentence.heads(), reference);
//! ```
//!
//! Only projective trees can be produced. For a non-projective reference the
//! oracle still completes, but the crossing arcs come out differently.

mod action;
pub mod classifier;
pub mod config;
mod display;
pub mod errors;
pub mod features;
mod oracle;
mod parser;
mod predictor;
mod word;

pub use action::Action;
pub use classifier::{AveragedPerceptron, Classifier};
pub use config::TrainingConfig;
pub use display::SentenceDisplay;
pub use errors::{DepParseError, DepParseResult};
pub use features::{extract_features, FeatureMap, TrainingExample};
pub use oracle::Oracle;
pub use parser::{parse, ActionSource, Configuration, ParseTrace, ScriptedActions};
pub use predictor::{collect_examples, oracle_examples, ActionPredictor};
pub use word::{Head, Sentence, Word};

#[cfg(test)]
mod tests;
