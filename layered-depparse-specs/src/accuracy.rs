//! Unlabeled attachment accuracy.

use layered_depparse::{parse, ActionSource, Sentence};
use std::fmt;

/// Correctly attached words out of all words scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachmentScore {
    pub correct: usize,
    pub total: usize,
}

impl AttachmentScore {
    /// Fraction of words with the reference head, 0 when nothing was scored.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn add(&mut self, other: AttachmentScore) {
        self.correct += other.correct;
        self.total += other.total;
    }
}

impl fmt::Display for AttachmentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% ({}/{})",
            self.accuracy() * 100.0,
            self.correct,
            self.total
        )
    }
}

/// Score a parsed sentence against its reference word by word.
pub fn score(reference: &Sentence, parsed: &Sentence) -> AttachmentScore {
    AttachmentScore {
        correct: reference
            .words()
            .iter()
            .zip(parsed.words())
            .filter(|(expected, found)| expected.head == found.head)
            .count(),
        total: reference.len(),
    }
}

/// Parse a copy of every reference sentence with `source` and score the
/// restored heads.
pub fn evaluate<S>(corpus: &[Sentence], source: &mut S) -> AttachmentScore
where
    S: ActionSource + ?Sized,
{
    let mut total = AttachmentScore::default();
    for reference in corpus {
        let mut parsed = reference.clone();
        parsed.clear_annotations();
        parse(&mut parsed, source);
        total.add(score(reference, &parsed));
    }
    log::info!("attachment accuracy: {}", total);
    total
}
