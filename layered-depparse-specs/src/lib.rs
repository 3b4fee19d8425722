#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven round-trip testing for layered-depparse.
//!
//! Fixtures are CoNLL-U files with reference trees. Every sentence is run
//! through the oracle, its heads are cleared, and the oracle's actions are
//! replayed through the parser. A sentence passes when all heads come back.
//!
//! Sentences that cannot pass, such as non-projective trees, are listed in
//! an `expected-failures.toml` file:
//!
//! ```toml
//! [[known]]
//! fixture = "non-projective.conllu"
//! sentence = "non-projective-0001"
//! reason = "crossing arcs"
//! ```
//!
//! ## Modules
//!
//! - [`loader`] - Loads `.conllu` fixtures from a directory tree
//! - [`runner`] - Oracle round trips and expected-failure classification
//! - [`accuracy`] - Attachment accuracy of any action source
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - Expected failures tracking via TOML
//! - [`errors`] - Error types for the harness

pub mod accuracy;
pub mod errors;
pub mod failures;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use accuracy::{evaluate, score, AttachmentScore};
pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{
    head_mismatches, round_trip, run_all, run_fixture, FixtureResult, HeadMismatch,
    RoundTripOutcome,
};
