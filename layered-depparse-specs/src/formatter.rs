//! Failure and summary formatting for round-trip results.

use crate::runner::RoundTripOutcome;
use layered_depparse::Head;
use std::fmt::Write;

fn head_or_blank(head: &Option<Head>) -> &str {
    head.as_ref().map_or("_", Head::as_id)
}

/// Format a failed round trip with the differing heads.
pub fn format_failure(fixture_name: &str, outcome: &RoundTripOutcome) -> String {
    let mut output = String::new();

    writeln!(output, "\nFAIL: {}:{}", fixture_name, outcome.sentence).unwrap();
    writeln!(output).unwrap();

    if let Some(text) = &outcome.text {
        writeln!(output, "  {}", text).unwrap();
        writeln!(output).unwrap();
    }

    writeln!(
        output,
        "  round trip failed: {} of {} heads differ",
        outcome.mismatches.len(),
        outcome.words
    )
    .unwrap();
    for mismatch in &outcome.mismatches {
        writeln!(
            output,
            "    \u{2717} {} ({}): expected head {}, found {}",
            mismatch.id,
            mismatch.form,
            head_or_blank(&mismatch.expected),
            head_or_blank(&mismatch.found)
        )
        .unwrap();
    }

    if outcome.fallbacks > 0 {
        writeln!(
            output,
            "  {} of {} replayed actions fell back",
            outcome.fallbacks,
            outcome.actions.len()
        )
        .unwrap();
    }

    if let Some(hint) = generate_hint(outcome) {
        writeln!(output).unwrap();
        writeln!(output, "  hint: {}", hint).unwrap();
    }

    output
}

/// Format a summary of one fixture's results.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    writeln!(output, "\n{}: {}", status, fixture_name).unwrap();
    writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    )
    .unwrap();

    output
}

fn generate_hint(outcome: &RoundTripOutcome) -> Option<String> {
    if !outcome.projective {
        return Some(
            "the reference tree has crossing arcs, which arc-standard parsing cannot build"
                .to_string(),
        );
    }
    if outcome.mismatches.iter().any(|m| m.expected.is_none()) {
        return Some("words without a reference head (empty nodes) are attached by the parser".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::HeadMismatch;
    use layered_depparse::Action;

    fn failed_outcome(projective: bool) -> RoundTripOutcome {
        RoundTripOutcome {
            sentence: "s-1".to_string(),
            text: Some("a b".to_string()),
            words: 2,
            projective,
            actions: vec![Action::Shift, Action::Shift, Action::Shift],
            fallbacks: 1,
            mismatches: vec![HeadMismatch {
                id: "2".to_string(),
                form: "b".to_string(),
                expected: Some(Head::from_id("1")),
                found: None,
            }],
        }
    }

    #[test]
    fn test_format_failure() {
        let output = format_failure("test.conllu", &failed_outcome(true));

        insta::assert_snapshot!(output.trim(), @r###"
        FAIL: test.conllu:s-1

          a b

          round trip failed: 1 of 2 heads differ
            ✗ 2 (b): expected head 1, found _
          1 of 3 replayed actions fell back
        "###);
    }

    #[test]
    fn test_hint_for_non_projective() {
        let output = format_failure("test.conllu", &failed_outcome(false));
        assert!(output.contains("hint: the reference tree has crossing arcs"));
    }

    #[test]
    fn test_hint_for_empty_nodes() {
        let mut outcome = failed_outcome(true);
        outcome.mismatches[0].expected = None;
        outcome.mismatches[0].found = Some(Head::Root);

        let output = format_failure("test.conllu", &outcome);
        assert!(output.contains("expected head _, found 0"));
        assert!(output.contains("empty nodes"));
    }

    #[test]
    fn test_format_summary_pass() {
        let output = format_summary("ewt.conllu", 10, 0, 0, 0);
        assert!(output.contains("PASS: ewt.conllu"));
        assert!(output.contains("10 passed"));
    }

    #[test]
    fn test_format_summary_with_regressions() {
        let output = format_summary("ewt.conllu", 10, 2, 1, 1);
        assert!(output.contains("FAIL: ewt.conllu"));
        assert!(output.contains("1 regressions"));
    }
}
