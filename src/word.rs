//! Sentence and word representation.
//!
//! A dependency tree is stored only through each word's `head` field, which
//! names the governing word by id. Children are never stored; they are
//! recomputed on demand with [`Sentence::dependents`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The head of a word: either another word (by id) or the root sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Head {
    /// The word has no governor; it is the sentence root.
    Root,
    /// The id of the governing word.
    Word(String),
}

impl Head {
    /// The id used for the root sentinel in CoNLL-style annotations.
    pub const ROOT_ID: &'static str = "0";

    /// Read a head from its id form, mapping `"0"` to [`Head::Root`].
    pub fn from_id(id: &str) -> Self {
        if id == Self::ROOT_ID {
            Head::Root
        } else {
            Head::Word(id.to_string())
        }
    }

    /// The id form of this head.
    pub fn as_id(&self) -> &str {
        match self {
            Head::Root => Self::ROOT_ID,
            Head::Word(id) => id,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Head::Root)
    }

    /// Whether this head names the word with the given id.
    pub fn is_word(&self, id: &str) -> bool {
        match self {
            Head::Root => false,
            Head::Word(head_id) => head_id == id,
        }
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}

/// A word in a dependency tree.
///
/// The fields follow the Universal Dependencies word line. The identity
/// fields (`id` through `xpos`, `feats`, `misc`) are never touched by the
/// parser; `head`, `deprel` and `deps` hold annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Position id. Not necessarily an integer: multi-word tokens use ranges
    /// (`"1-2"`) and empty nodes use decimals (`"8.1"`).
    pub id: String,
    pub form: Option<String>,
    pub lemma: Option<String>,
    /// Universal part-of-speech tag
    pub upos: String,
    /// Language-specific part-of-speech tag
    pub xpos: Option<String>,
    /// Morphological features, e.g. `Number=Sing`, in input order
    pub feats: Vec<String>,
    pub head: Option<Head>,
    /// Dependency relation to the head
    pub deprel: Option<String>,
    /// Enhanced dependencies, e.g. `4:nsubj`, in input order
    pub deps: Vec<String>,
    pub misc: Option<String>,
}

impl Word {
    /// Create a word with only an id, form and coarse tag.
    pub fn new(id: impl Into<String>, form: impl Into<String>, upos: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            form: Some(form.into()),
            lemma: None,
            upos: upos.into(),
            xpos: None,
            feats: Vec::new(),
            head: None,
            deprel: None,
            deps: Vec::new(),
            misc: None,
        }
    }

    /// Set the reference head.
    pub fn with_head(mut self, head: Head) -> Self {
        self.head = Some(head);
        self
    }

    /// Set the dependency relation.
    pub fn with_deprel(mut self, deprel: impl Into<String>) -> Self {
        self.deprel = Some(deprel.into());
        self
    }

    /// The surface form, or `_` when the word has none.
    pub fn form_or_blank(&self) -> &str {
        self.form.as_deref().unwrap_or("_")
    }

    /// Remove all head annotation (head, relation and enhanced dependencies),
    /// returning the previous head.
    pub fn clear_annotation(&mut self) -> Option<Head> {
        self.deprel = None;
        self.deps.clear();
        self.head.take()
    }
}

/// An ordered sequence of words.
///
/// Word order is linear text order, which is also the initial queue order of
/// the parser. Words are looked up by id rather than by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Comment lines without the leading `#`, e.g. `sent_id = ...`
    pub comments: Vec<String>,
    words: Vec<Word>,
}

impl Sentence {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            comments: Vec::new(),
            words,
        }
    }

    /// Attach comment lines.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find a word by id.
    pub fn get(&self, id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Position of the word with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.words.iter().position(|w| w.id == id)
    }

    /// The value of a `key = value` comment, e.g. `sent_id`.
    pub fn comment_value(&self, key: &str) -> Option<&str> {
        self.comments.iter().find_map(|line| {
            let (k, v) = line.split_once('=')?;
            if k.trim() == key {
                Some(v.trim())
            } else {
                None
            }
        })
    }

    /// Heads of all words, in order.
    pub fn heads(&self) -> Vec<Option<Head>> {
        self.words.iter().map(|w| w.head.clone()).collect()
    }

    /// Clear head, relation and enhanced dependencies of every word,
    /// returning the previous heads in order.
    pub fn clear_annotations(&mut self) -> Vec<Option<Head>> {
        self.words.iter_mut().map(Word::clear_annotation).collect()
    }

    /// Number of words whose head is the root sentinel.
    pub fn root_count(&self) -> usize {
        self.words
            .iter()
            .filter(|w| w.head.as_ref().map_or(false, Head::is_root))
            .count()
    }

    /// Ids of the words whose head is the given word, in text order.
    pub fn dependents(&self, id: &str) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| w.head.as_ref().map_or(false, |h| h.is_word(id)))
            .map(|w| w.id.as_str())
            .collect()
    }

    /// Whether the head assignment forms a projective tree.
    ///
    /// An arc from head `h` to dependent `d` is projective when `h` dominates
    /// every word between them in text order. Words without a head are
    /// ignored; arcs from the root sentinel are always projective.
    pub fn is_projective(&self) -> bool {
        let positions: HashMap<&str, usize> = self
            .words
            .iter()
            .enumerate()
            .map(|(pos, w)| (w.id.as_str(), pos))
            .collect();

        let head_pos = |pos: usize| -> Option<usize> {
            match self.words[pos].head.as_ref()? {
                Head::Root => None,
                Head::Word(id) => positions.get(id.as_str()).copied(),
            }
        };

        let dominates = |ancestor: usize, mut pos: usize| -> bool {
            // bounded walk so that a malformed cycle cannot loop forever
            for _ in 0..self.words.len() {
                match head_pos(pos) {
                    Some(h) if h == ancestor => return true,
                    Some(h) => pos = h,
                    None => return false,
                }
            }
            false
        };

        (0..self.words.len()).all(|dep| match head_pos(dep) {
            None => true,
            Some(head) => {
                let (lo, hi) = if head < dep { (head, dep) } else { (dep, head) };
                (lo + 1..hi).all(|between| dominates(head, between))
            }
        })
    }
}

impl FromIterator<Word> for Sentence {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Sentence::new(iter.into_iter().collect())
    }
}
