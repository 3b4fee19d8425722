//! The arc-standard parser engine.
//!
//! The engine owns the stack and queue and applies actions chosen by an
//! [`ActionSource`]. It never decides anything itself except the fallback
//! for an action that is invalid in the current configuration.

use crate::{Action, Head, Sentence, Word};

/// A read-only view of the parser state handed to an [`ActionSource`].
///
/// Stack and queue hold positions into the sentence's words. The last stack
/// entry is the top; the first queue entry is the next word to shift.
#[derive(Debug, Clone, Copy)]
pub struct Configuration<'a> {
    words: &'a [Word],
    stack: &'a [usize],
    queue: &'a [usize],
}

impl<'a> Configuration<'a> {
    /// Build a configuration from word positions.
    ///
    /// Every position must be a valid index into `words`.
    pub fn new(words: &'a [Word], stack: &'a [usize], queue: &'a [usize]) -> Self {
        Self {
            words,
            stack,
            queue,
        }
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The stack word `depth` places below the top (0 is the top).
    pub fn stack_word(&self, depth: usize) -> Option<&'a Word> {
        let words = self.words;
        let idx = self.stack.len().checked_sub(depth + 1)?;
        Some(&words[self.stack[idx]])
    }

    /// The top of the stack.
    pub fn stack_top(&self) -> Option<&'a Word> {
        self.stack_word(0)
    }

    /// The word directly below the top of the stack.
    pub fn stack_second(&self) -> Option<&'a Word> {
        self.stack_word(1)
    }

    /// The next word to be shifted.
    pub fn queue_front(&self) -> Option<&'a Word> {
        let words = self.words;
        self.queue.first().map(move |&pos| &words[pos])
    }

    /// Stack words from bottom to top.
    pub fn stack(&self) -> impl Iterator<Item = &'a Word> + 'a {
        let (words, stack) = (self.words, self.stack);
        stack.iter().map(move |&pos| &words[pos])
    }

    /// Queue words from front to back.
    pub fn queue(&self) -> impl Iterator<Item = &'a Word> + 'a {
        let (words, queue) = (self.words, self.queue);
        queue.iter().map(move |&pos| &words[pos])
    }

    /// Empty queue with at most one word left on the stack.
    pub fn is_terminal(&self) -> bool {
        self.queue.is_empty() && self.stack.len() <= 1
    }
}

/// Anything that can choose the next parser action.
///
/// Implemented by the static oracle, the trained predictor, scripted action
/// lists and any `FnMut(&Configuration) -> Action` closure.
pub trait ActionSource {
    fn next_action(&mut self, config: &Configuration<'_>) -> Action;
}

impl<F> ActionSource for F
where
    F: FnMut(&Configuration<'_>) -> Action,
{
    fn next_action(&mut self, config: &Configuration<'_>) -> Action {
        self(config)
    }
}

/// Feeds a fixed list of actions to the parser, one per step.
///
/// Once the list is exhausted it keeps answering [`Action::Shift`] and
/// leaves it to the engine fallback to finish the parse.
#[derive(Debug, Clone)]
pub struct ScriptedActions {
    actions: std::vec::IntoIter<Action>,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Number of scripted actions not yet consumed.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionSource for ScriptedActions {
    fn next_action(&mut self, _config: &Configuration<'_>) -> Action {
        self.actions.next().unwrap_or(Action::Shift)
    }
}

/// Summary of a completed parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseTrace {
    /// Actions actually applied, after fallback substitution.
    pub actions: Vec<Action>,
    /// How many requested actions were replaced by a fallback.
    pub fallbacks: usize,
}

impl ParseTrace {
    pub fn steps(&self) -> usize {
        self.actions.len()
    }

    /// Number of applied LEFT_ARC and RIGHT_ARC actions.
    pub fn arcs(&self) -> usize {
        self.actions.iter().filter(|a| a.is_arc()).count()
    }
}

/// Replace an action that is invalid for the given stack and queue sizes.
///
/// Only called while the parse is not terminal, so a shallow stack implies a
/// non-empty queue and an empty queue implies at least two stack words.
fn fallback(requested: Action, stack_len: usize, queue_len: usize) -> Action {
    match requested {
        Action::Shift if queue_len == 0 => Action::RightArc,
        Action::LeftArc | Action::RightArc if stack_len < 2 => Action::Shift,
        valid => valid,
    }
}

/// Parse a sentence with arc-standard transitions.
///
/// Words start on the queue in text order, move to the stack on SHIFT, and
/// are combined into head-dependent pairs by LEFT_ARC and RIGHT_ARC. The
/// `source` is asked for an action at every step; an invalid answer is
/// replaced (an arc on a shallow stack becomes SHIFT, a SHIFT on an empty
/// queue becomes RIGHT_ARC) so the loop always progresses.
///
/// The `head` field of every word is overwritten: the final stack word gets
/// [`Head::Root`], every other word the id of the word it was attached to.
/// A sentence of `N` words takes at most `2N - 1` steps. An empty sentence
/// is left untouched.
pub fn parse<S>(sentence: &mut Sentence, source: &mut S) -> ParseTrace
where
    S: ActionSource + ?Sized,
{
    let order: Vec<usize> = (0..sentence.len()).collect();
    let mut next = 0;
    let mut stack: Vec<usize> = Vec::with_capacity(order.len());
    let mut trace = ParseTrace::default();

    while next < order.len() || stack.len() > 1 {
        let requested = {
            let config = Configuration::new(sentence.words(), &stack, &order[next..]);
            source.next_action(&config)
        };

        let action = fallback(requested, stack.len(), order.len() - next);
        if action != requested {
            log::debug!(
                "{} invalid with stack={} queue={}, applying {}",
                requested,
                stack.len(),
                order.len() - next,
                action
            );
            trace.fallbacks += 1;
        }

        let words = sentence.words_mut();
        match action {
            Action::Shift => {
                stack.push(order[next]);
                next += 1;
            }
            Action::LeftArc => {
                if let [.., lower, upper] = stack[..] {
                    let upper_id = words[upper].id.clone();
                    words[lower].head = Some(Head::Word(upper_id));
                    stack.truncate(stack.len() - 2);
                    stack.push(upper);
                }
            }
            Action::RightArc => {
                if let [.., lower, upper] = stack[..] {
                    let lower_id = words[lower].id.clone();
                    words[upper].head = Some(Head::Word(lower_id));
                    stack.truncate(stack.len() - 2);
                    stack.push(lower);
                }
            }
        }
        trace.actions.push(action);
    }

    if let [root] = stack[..] {
        sentence.words_mut()[root].head = Some(Head::Root);
    }

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(forms: &[&str]) -> Sentence {
        forms
            .iter()
            .enumerate()
            .map(|(i, form)| Word::new((i + 1).to_string(), *form, "X"))
            .collect()
    }

    fn head_ids(sentence: &Sentence) -> Vec<Option<&str>> {
        sentence
            .words()
            .iter()
            .map(|w| w.head.as_ref().map(Head::as_id))
            .collect()
    }

    #[test]
    fn test_empty_sentence_is_untouched() {
        let mut s = Sentence::default();
        let trace = parse(&mut s, &mut |_: &Configuration<'_>| Action::Shift);
        assert_eq!(trace.steps(), 0);
        assert_eq!(s.root_count(), 0);
    }

    #[test]
    fn test_single_word_becomes_root() {
        let mut s = sentence(&["Hello"]);
        let trace = parse(&mut s, &mut |_: &Configuration<'_>| Action::LeftArc);
        assert_eq!(trace.actions, vec![Action::Shift]);
        assert_eq!(trace.fallbacks, 1);
        assert_eq!(head_ids(&s), vec![Some("0")]);
    }

    #[test]
    fn test_scripted_actions_build_tree() {
        let mut s = sentence(&["the", "dog", "barked"]);
        let mut script = ScriptedActions::new(vec![
            Action::Shift,
            Action::Shift,
            Action::LeftArc,
            Action::Shift,
            Action::LeftArc,
        ]);
        let trace = parse(&mut s, &mut script);

        assert_eq!(trace.fallbacks, 0);
        assert_eq!(script.remaining(), 0);
        assert_eq!(head_ids(&s), vec![Some("2"), Some("3"), Some("0")]);
    }

    #[test]
    fn test_right_arc_keeps_lower_word() {
        let mut s = sentence(&["eat", "apples"]);
        parse(
            &mut s,
            &mut ScriptedActions::new(vec![Action::Shift, Action::Shift, Action::RightArc]),
        );
        assert_eq!(head_ids(&s), vec![Some("0"), Some("1")]);
    }

    #[test]
    fn test_always_shift_falls_back_to_right_arc() {
        let mut s = sentence(&["a", "b", "c"]);
        let trace = parse(&mut s, &mut |_: &Configuration<'_>| Action::Shift);

        assert_eq!(
            trace.actions,
            vec![
                Action::Shift,
                Action::Shift,
                Action::Shift,
                Action::RightArc,
                Action::RightArc
            ]
        );
        assert_eq!(trace.fallbacks, 2);
        assert_eq!(head_ids(&s), vec![Some("0"), Some("1"), Some("2")]);
    }

    #[test]
    fn test_always_left_arc_terminates() {
        let mut s = sentence(&["a", "b", "c"]);
        let trace = parse(&mut s, &mut |_: &Configuration<'_>| Action::LeftArc);

        assert_eq!(trace.steps(), 5);
        assert_eq!(trace.fallbacks, 3);
        assert_eq!(head_ids(&s), vec![Some("2"), Some("3"), Some("0")]);
    }

    #[test]
    fn test_always_right_arc_terminates() {
        let mut s = sentence(&["a", "b", "c"]);
        let trace = parse(&mut s, &mut |_: &Configuration<'_>| Action::RightArc);

        assert_eq!(trace.steps(), 5);
        assert_eq!(trace.fallbacks, 3);
        assert_eq!(head_ids(&s), vec![Some("0"), Some("1"), Some("1")]);
    }

    #[test]
    fn test_adversarial_sources_respect_bounds() {
        for n in 1..12 {
            let forms: Vec<String> = (0..n).map(|i| format!("w{}", i)).collect();
            let forms: Vec<&str> = forms.iter().map(String::as_str).collect();

            for &action in Action::ALL.iter() {
                let mut s = sentence(&forms);
                let trace = parse(&mut s, &mut |_: &Configuration<'_>| action);

                assert!(trace.steps() <= 2 * n - 1, "{} words, {}", n, action);
                assert_eq!(trace.arcs(), n - 1);
                assert_eq!(s.root_count(), 1);
                assert!(s.words().iter().all(|w| w.head.is_some()));
            }
        }
    }

    #[test]
    fn test_alternating_source_respects_bounds() {
        let mut s = sentence(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut step = 0;
        let trace = parse(&mut s, &mut |_: &Configuration<'_>| {
            step += 1;
            Action::ALL[step % 3]
        });
        assert!(trace.steps() <= 13);
        assert_eq!(s.root_count(), 1);
    }

    #[test]
    fn test_configuration_accessors() {
        let s = sentence(&["a", "b", "c", "d"]);
        let stack = [0, 2];
        let queue = [1, 3];
        let config = Configuration::new(s.words(), &stack, &queue);

        assert_eq!(config.stack_top().map(Word::form_or_blank), Some("c"));
        assert_eq!(config.stack_second().map(Word::form_or_blank), Some("a"));
        assert!(config.stack_word(2).is_none());
        assert_eq!(config.queue_front().map(Word::form_or_blank), Some("b"));
        assert_eq!(
            config.stack().map(Word::form_or_blank).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(
            config.queue().map(Word::form_or_blank).collect::<Vec<_>>(),
            vec!["b", "d"]
        );
        assert!(!config.is_terminal());
    }
}
