//! Streaming CoNLL-U reader.

use crate::errors::{ConlluError, ConlluResult};
use layered_depparse::{Head, Sentence, Word};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

const FIELD_COUNT: usize = 10;

/// Reads sentences from CoNLL-U text, one per blank-line separated block.
///
/// Comment lines are kept on the sentence. A final block without a trailing
/// blank line is still returned; runs of blank lines do not produce empty
/// sentences.
pub struct Reader<R> {
    lines: Lines<R>,
    line_no: usize,
    source: String,
    /// Integer ids, multi-word ranges (`1-2`) and empty nodes (`8.1`)
    id_regex: Regex,
}

impl<R: BufRead> Reader<R> {
    pub fn new(input: R) -> Self {
        Self::with_source(input, "<input>")
    }

    /// Create a reader whose I/O errors name `source`.
    pub fn with_source(input: R, source: impl Into<String>) -> Self {
        let id_regex = Regex::new(r"^[0-9]+(?:[.-][0-9]+)?$").expect("Invalid word id regex");

        Self {
            lines: input.lines(),
            line_no: 0,
            source: source.into(),
            id_regex,
        }
    }

    fn error(&self, message: String) -> ConlluError {
        ConlluError::Parse {
            line: self.line_no,
            message,
        }
    }

    fn parse_word(&self, line: &str) -> ConlluResult<Word> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(self.error(format!(
                "expected {} tab-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let id = fields[0];
        if !self.id_regex.is_match(id) {
            return Err(self.error(format!("invalid word id '{}'", id)));
        }

        let head = match optional(fields[6]) {
            Some(head) if !self.id_regex.is_match(head) => {
                return Err(self.error(format!("invalid head '{}' for word {}", head, id)));
            }
            head => head.map(Head::from_id),
        };

        Ok(Word {
            id: id.to_string(),
            form: Some(fields[1].to_string()),
            lemma: Some(fields[2].to_string()),
            upos: fields[3].to_string(),
            xpos: optional(fields[4]).map(str::to_string),
            feats: list(fields[5]),
            head,
            deprel: optional(fields[7]).map(str::to_string),
            deps: list(fields[8]),
            misc: optional(fields[9]).map(str::to_string),
        })
    }
}

/// `_` marks an absent value.
fn optional(field: &str) -> Option<&str> {
    if field == "_" {
        None
    } else {
        Some(field)
    }
}

/// `|`-separated values in file order, with `_` for none.
fn list(field: &str) -> Vec<String> {
    match optional(field) {
        None => Vec::new(),
        Some(values) => values.split('|').map(str::to_string).collect(),
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = ConlluResult<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut comments = Vec::new();
        let mut words = Vec::new();

        while let Some(line) = self.lines.next() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(ConlluError::io(self.source.clone(), e))),
            };
            self.line_no += 1;
            let line = line.trim_end_matches('\r');

            if let Some(comment) = line.strip_prefix('#') {
                comments.push(comment.to_string());
            } else if line.trim().is_empty() {
                if words.is_empty() && comments.is_empty() {
                    continue;
                }
                break;
            } else {
                match self.parse_word(line) {
                    Ok(word) => words.push(word),
                    Err(e) => return Some(Err(e)),
                }
            }
        }

        if words.is_empty() && comments.is_empty() {
            return None;
        }
        log::trace!("read sentence of {} words (line {})", words.len(), self.line_no);
        Some(Ok(Sentence::new(words).with_comments(comments)))
    }
}

/// Iterate over the sentences of a CoNLL-U stream.
pub fn read_sentences<R: BufRead>(input: R) -> Reader<R> {
    Reader::new(input)
}

/// Read every sentence of a CoNLL-U string.
pub fn read_str(input: &str) -> ConlluResult<Vec<Sentence>> {
    read_sentences(input.as_bytes()).collect()
}

/// Read every sentence of a CoNLL-U file.
pub fn read_file(path: &Path) -> ConlluResult<Vec<Sentence>> {
    let file = File::open(path).map_err(|e| ConlluError::io(path.display().to_string(), e))?;
    Reader::with_source(BufReader::new(file), path.display().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IRAQIS: &str = concat!(
        "# sent_id = weblog-juancole.com_juancole_20051126063000_ENG_20051126_063000-0003\n",
        "# text = Over 300 Iraqis are reported dead and 500 wounded in Fallujah alone.\n",
        "1\tOver\tover\tADV\tRB\t_\t2\tadvmod\t2:advmod\t_\n",
        "2\t300\t300\tNUM\tCD\tNumType=Card\t3\tnummod\t3:nummod\t_\n",
        "3\tIraqis\tIraqis\tPROPN\tNNPS\tNumber=Plur\t5\tnsubj:pass\t5:nsubj:pass|6:nsubj:xsubj|8:nsubj:pass\t_\n",
        "4\tare\tbe\tAUX\tVBP\tMood=Ind|Tense=Pres|VerbForm=Fin\t5\taux:pass\t5:aux:pass\t_\n",
        "5\treported\treport\tVERB\tVBN\tTense=Past|VerbForm=Part|Voice=Pass\t0\troot\t0:root\t_\n",
        "6\tdead\tdead\tADJ\tJJ\tDegree=Pos\t5\txcomp\t5:xcomp\t_\n",
        "7\tand\tand\tCCONJ\tCC\t_\t8\tcc\t8:cc|8.1:cc\t_\n",
        "8\t500\t500\tNUM\tCD\tNumType=Card\t5\tconj\t5:conj:and|8.1:nsubj:pass|9:nsubj:xsubj\t_\n",
        "8.1\treported\treport\tVERB\tVBN\tTense=Past|VerbForm=Part|Voice=Pass\t_\t_\t5:conj:and\tCopyOf=5\n",
        "9\twounded\twounded\tADJ\tJJ\tDegree=Pos\t8\torphan\t8.1:xcomp\t_\n",
        "10\tin\tin\tADP\tIN\t_\t11\tcase\t11:case\t_\n",
        "11\tFallujah\tFallujah\tPROPN\tNNP\tNumber=Sing\t5\tobl\t5:obl:in\t_\n",
        "12\talone\talone\tADV\tRB\t_\t11\tadvmod\t11:advmod\tSpaceAfter=No\n",
        "13\t.\t.\tPUNCT\t.\t_\t5\tpunct\t5:punct\t_\n",
    );

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_reads_words_and_comments() {
        let sentences = read_str(IRAQIS).unwrap();
        assert_eq!(sentences.len(), 1);

        let sentence = &sentences[0];
        assert_eq!(sentence.len(), 14);
        assert_eq!(
            sentence.comment_value("text"),
            Some("Over 300 Iraqis are reported dead and 500 wounded in Fallujah alone.")
        );

        assert_eq!(
            sentence.words()[0],
            Word {
                id: "1".into(),
                form: Some("Over".into()),
                lemma: Some("over".into()),
                upos: "ADV".into(),
                xpos: Some("RB".into()),
                feats: Vec::new(),
                head: Some(Head::Word("2".into())),
                deprel: Some("advmod".into()),
                deps: strings(&["2:advmod"]),
                misc: None,
            }
        );

        let iraqis = &sentence.words()[2];
        assert_eq!(iraqis.feats, strings(&["Number=Plur"]));
        assert_eq!(
            iraqis.deps,
            strings(&["5:nsubj:pass", "6:nsubj:xsubj", "8:nsubj:pass"])
        );

        let reported = &sentence.words()[4];
        assert_eq!(reported.head, Some(Head::Root));
        assert_eq!(
            reported.feats,
            strings(&["Tense=Past", "VerbForm=Part", "Voice=Pass"])
        );
    }

    #[test]
    fn test_copy_node_has_no_head() {
        let sentences = read_str(IRAQIS).unwrap();
        let copy = sentences[0].get("8.1").unwrap();

        assert_eq!(copy.form.as_deref(), Some("reported"));
        assert_eq!(copy.head, None);
        assert_eq!(copy.deprel, None);
        assert_eq!(copy.deps, strings(&["5:conj:and"]));
        assert_eq!(copy.misc.as_deref(), Some("CopyOf=5"));
    }

    #[test]
    fn test_sentence_boundaries() {
        let input = "1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n\n\n\n1\tb\tb\tX\t_\t_\t0\troot\t_\t_";
        let sentences = read_str(input).unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].words()[0].form.as_deref(), Some("b"));
    }

    #[test]
    fn test_wrong_field_count_reports_line() {
        let input = "# text = a b\n1\ta\ta\tX\t_\t_\t0\troot\t_\t_\n2\tb\tb\tX\t_\t_\t1\n";
        let err = read_str(input).unwrap_err();

        assert!(matches!(err, ConlluError::Parse { line: 3, .. }));
        assert_eq!(
            err.to_string(),
            "parse error at line 3: expected 10 tab-separated fields, found 7"
        );
    }

    #[test]
    fn test_invalid_ids_are_rejected() {
        let bad_id = read_str("x\ta\ta\tX\t_\t_\t0\troot\t_\t_\n").unwrap_err();
        assert_eq!(
            bad_id.to_string(),
            "parse error at line 1: invalid word id 'x'"
        );

        let bad_head = read_str("1\ta\ta\tX\t_\t_\tone\troot\t_\t_\n").unwrap_err();
        assert!(matches!(bad_head, ConlluError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = read_file(Path::new("/nonexistent/train.conllu")).unwrap_err();
        assert!(matches!(err, ConlluError::Io { .. }));
    }
}
