use crate::{Head, Sentence};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Renders the head assignment of a sentence below its words.
///
/// Each word with a head gets one line, in text order, spanning from the
/// dependent to its head:
///
/// ```text
/// the  dog  barked
/// ╰──────╯ the → dog
///      ╰─────────╯ dog → barked
///           ╰────╯ barked → ROOT
/// ```
pub struct SentenceDisplay<'a> {
    sentence: &'a Sentence,
}

impl<'a> SentenceDisplay<'a> {
    pub fn new(sentence: &'a Sentence) -> Self {
        Self { sentence }
    }
}

impl<'a> std::fmt::Display for SentenceDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let words = self.sentence.words();
        let mut word_idx_to_start_display_char_idx = Vec::with_capacity(words.len());
        let mut word_idx_to_end_display_char_idx = Vec::with_capacity(words.len());

        let mut opening_line = String::new();
        for (idx, word) in words.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            word_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(word.form_or_blank());
            word_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for (idx, word) in words.iter().enumerate() {
            let (head_idx, head_label) = match &word.head {
                None => continue,
                Some(Head::Root) => (idx, "ROOT"),
                Some(Head::Word(id)) => match self.sentence.position(id) {
                    Some(pos) => (pos, words[pos].form_or_blank()),
                    // heads outside the sentence are not drawn
                    None => continue,
                },
            };
            let (first, last) = if head_idx < idx {
                (head_idx, idx)
            } else {
                (idx, head_idx)
            };

            f.write_char('\n')?;

            let start_char_idx = word_idx_to_start_display_char_idx[first];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = word_idx_to_end_display_char_idx[last];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            write!(f, " {} → {}", word.form_or_blank(), head_label)?;
        }

        Ok(())
    }
}
