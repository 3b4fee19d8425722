#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! CoNLL-U input and output for layered-depparse.
//!
//! The format is described at <https://universaldependencies.org/format.html>.
//! In short:
//!
//! - Word lines hold 10 tab-separated fields.
//! - Blank lines end a sentence.
//! - Comment lines start with `#`.
//!
//! ## Usage
//!
//! ```
//! use layered_conllu::{read_str, write_sentence};
//!
//! let input = "1\tHello\thello\tINTJ\tUH\t_\t0\troot\t0:root\t_\n\n";
//! let sentences = read_str(input).unwrap();
//! assert_eq!(sentences[0].words()[0].form.as_deref(), Some("Hello"));
//!
//! let mut out = Vec::new();
//! write_sentence(&mut out, &sentences[0]).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), input);
//! ```

mod errors;
mod reader;
mod writer;

pub use errors::{ConlluError, ConlluResult};
pub use reader::{read_file, read_sentences, read_str, Reader};
pub use writer::{write_sentence, write_sentences};
