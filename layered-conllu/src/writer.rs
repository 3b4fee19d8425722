use crate::errors::{ConlluError, ConlluResult};
use layered_depparse::{Sentence, Word};
use std::io::Write;

const OUTPUT: &str = "<output>";

fn field(value: Option<&str>) -> &str {
    value.unwrap_or("_")
}

fn joined(values: &[String]) -> String {
    if values.is_empty() {
        "_".to_string()
    } else {
        values.join("|")
    }
}

fn write_word<W: Write>(out: &mut W, word: &Word) -> std::io::Result<()> {
    let head = word.head.as_ref().map(|head| head.as_id());

    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        word.id,
        field(word.form.as_deref()),
        field(word.lemma.as_deref()),
        word.upos,
        field(word.xpos.as_deref()),
        joined(&word.feats),
        field(head),
        field(word.deprel.as_deref()),
        joined(&word.deps),
        field(word.misc.as_deref()),
    )
}

/// Write one sentence as CoNLL-U: its comments, one line per word and a
/// closing blank line.
pub fn write_sentence<W: Write>(out: &mut W, sentence: &Sentence) -> ConlluResult<()> {
    write_lines(out, sentence).map_err(|e| ConlluError::io(OUTPUT, e))
}

fn write_lines<W: Write>(out: &mut W, sentence: &Sentence) -> std::io::Result<()> {
    for comment in &sentence.comments {
        writeln!(out, "#{}", comment)?;
    }
    for word in sentence.words() {
        write_word(out, word)?;
    }
    writeln!(out)
}

/// Write sentences back to back.
pub fn write_sentences<'a, W, I>(out: &mut W, sentences: I) -> ConlluResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Sentence>,
{
    for sentence in sentences {
        write_sentence(out, sentence)?;
    }
    Ok(())
}
