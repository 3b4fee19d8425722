//! Oracle round trips over fixture sentences.
//!
//! For each reference sentence the oracle is replayed to get its action
//! sequence, the heads are cleared, and the sequence is fed back to the
//! parser. A sentence passes when every head is restored.

use crate::failures::{ExpectedFailures, FailureState, HarnessResult};
use crate::formatter::format_failure;
use layered_depparse::{parse, Action, Head, Oracle, ScriptedActions, Sentence};

/// A word whose head differs after the round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadMismatch {
    pub id: String,
    pub form: String,
    pub expected: Option<Head>,
    pub found: Option<Head>,
}

/// Result of the round trip of one sentence.
#[derive(Debug, Clone)]
pub struct RoundTripOutcome {
    /// Sentence reference, see [`ExpectedFailures::sentence_ref`].
    pub sentence: String,
    /// The `text` comment, if present.
    pub text: Option<String>,
    pub words: usize,
    pub projective: bool,
    /// Actions chosen by the oracle.
    pub actions: Vec<Action>,
    /// Replayed actions the parser had to replace.
    pub fallbacks: usize,
    pub mismatches: Vec<HeadMismatch>,
}

impl RoundTripOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Results for every sentence of one fixture file, in file order.
#[derive(Debug, Clone)]
pub struct FixtureResult {
    pub fixture: String,
    pub outcomes: Vec<RoundTripOutcome>,
}

impl FixtureResult {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }
}

/// Words of `parsed` whose head differs from the same word in `reference`.
///
/// Both sentences must hold the same words in the same order.
pub fn head_mismatches(reference: &Sentence, parsed: &Sentence) -> Vec<HeadMismatch> {
    reference
        .words()
        .iter()
        .zip(parsed.words())
        .filter(|(expected, found)| expected.head != found.head)
        .map(|(expected, found)| HeadMismatch {
            id: expected.id.clone(),
            form: expected.form_or_blank().to_string(),
            expected: expected.head.clone(),
            found: found.head.clone(),
        })
        .collect()
}

/// Round trip one reference sentence; `position` is its 1-based index in
/// the fixture.
pub fn round_trip(sentence: &Sentence, position: usize) -> RoundTripOutcome {
    let mut oracle = Oracle::new(sentence);
    let mut scratch = sentence.clone();
    scratch.clear_annotations();
    parse(&mut scratch, &mut oracle);
    let actions = oracle.actions().to_vec();

    let mut replayed = sentence.clone();
    replayed.clear_annotations();
    let trace = parse(&mut replayed, &mut ScriptedActions::new(actions.clone()));

    RoundTripOutcome {
        sentence: ExpectedFailures::sentence_ref(sentence, position),
        text: sentence.comment_value("text").map(str::to_string),
        words: sentence.len(),
        projective: sentence.is_projective(),
        actions,
        fallbacks: trace.fallbacks,
        mismatches: head_mismatches(sentence, &replayed),
    }
}

/// Round trip every sentence of a fixture.
pub fn run_fixture(name: &str, sentences: &[Sentence]) -> FixtureResult {
    FixtureResult {
        fixture: name.to_string(),
        outcomes: sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| round_trip(sentence, idx + 1))
            .collect(),
    }
}

/// Round trip all fixtures and classify failures against the expected
/// failures list.
pub fn run_all(
    fixtures: &[(String, Vec<Sentence>)],
    expected: &ExpectedFailures,
) -> (HarnessResult, Vec<FixtureResult>) {
    let mut result = HarnessResult::new();
    let mut fixture_results = Vec::with_capacity(fixtures.len());

    for (name, sentences) in fixtures {
        let fixture_result = run_fixture(name, sentences);

        for outcome in &fixture_result.outcomes {
            if outcome.passed() {
                if expected.get_entry(name, &outcome.sentence).is_some() {
                    log::info!(
                        "{}:{} passes and can be removed from expected failures",
                        name,
                        outcome.sentence
                    );
                }
                result.record_pass();
                continue;
            }

            let state = expected.is_expected(name, &outcome.sentence);
            match state {
                FailureState::Regression => {
                    log::warn!("{}", format_failure(name, outcome));
                }
                FailureState::Known | FailureState::Pending => {
                    log::debug!("{}:{} failed as expected ({:?})", name, outcome.sentence, state);
                }
            }
            result.record_failure(state);
        }

        fixture_results.push(fixture_result);
    }

    (result, fixture_results)
}
