use crate::*;

/// Build a sentence from `(id, form, upos, head)` rows.
fn sentence(rows: &[(&str, &str, &str, &str)]) -> Sentence {
    rows.iter()
        .map(|(id, form, upos, head)| Word::new(*id, *form, *upos).with_head(Head::from_id(head)))
        .collect()
}

fn plaster_of_paris() -> Sentence {
    sentence(&[
        ("1", "Plaster", "NOUN", "4"),
        ("2", "of", "ADP", "3"),
        ("3", "Paris", "PROPN", "1"),
        ("4", "does", "VERB", "0"),
        ("5", "two", "NUM", "6"),
        ("6", "things", "NOUN", "4"),
    ])
}

fn future_president() -> Sentence {
    sentence(&[
        ("1", "The", "DET", "3"),
        ("2", "future", "ADJ", "3"),
        ("3", "president", "NOUN", "4"),
        ("4", "joined", "VERB", "0"),
        ("5", "the", "DET", "6"),
        ("6", "Guard", "PROPN", "4"),
        ("7", "in", "ADP", "8"),
        ("8", "May", "PROPN", "4"),
        ("9", "1968", "NUM", "8"),
        ("10", ".", "PUNCT", "4"),
    ])
}

/// Every head assignment over `n` words that forms a tree with one root.
/// Heads are encoded as 0 for the root and 1..=n for words.
fn all_trees(n: usize) -> Vec<Vec<usize>> {
    fn extend(n: usize, heads: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if heads.len() == n {
            if is_tree(heads) {
                out.push(heads.clone());
            }
            return;
        }
        let dependent = heads.len() + 1;
        for head in 0..=n {
            if head != dependent {
                heads.push(head);
                extend(n, heads, out);
                heads.pop();
            }
        }
    }

    fn is_tree(heads: &[usize]) -> bool {
        if heads.iter().filter(|&&h| h == 0).count() != 1 {
            return false;
        }
        (1..=heads.len()).all(|start| {
            let mut current = start;
            for _ in 0..heads.len() {
                current = heads[current - 1];
                if current == 0 {
                    return true;
                }
            }
            false
        })
    }

    let mut out = Vec::new();
    extend(n, &mut Vec::with_capacity(n), &mut out);
    out
}

fn tree_sentence(heads: &[usize]) -> Sentence {
    heads
        .iter()
        .enumerate()
        .map(|(i, head)| {
            Word::new((i + 1).to_string(), format!("w{}", i + 1), "X")
                .with_head(Head::from_id(&head.to_string()))
        })
        .collect()
}

#[test]
fn test_future_president_oracle_actions() {
    let mut sentence = future_president();
    let mut oracle = Oracle::new(&sentence);
    parse(&mut sentence, &mut oracle);

    use Action::*;
    assert_eq!(
        oracle.actions(),
        &[
            Shift, Shift, Shift, LeftArc, LeftArc, Shift, LeftArc, Shift, Shift, LeftArc,
            RightArc, Shift, Shift, LeftArc, Shift, RightArc, RightArc, Shift, RightArc,
        ]
    );
    assert_eq!(sentence.heads(), future_president().heads());
}

#[test]
fn test_oracle_round_trip_on_every_small_projective_tree() {
    for n in 1..=5 {
        for heads in all_trees(n) {
            let reference = tree_sentence(&heads);
            if !reference.is_projective() {
                continue;
            }

            let mut sentence = reference.clone();
            let mut oracle = Oracle::new(&sentence);
            sentence.clear_annotations();
            let trace = parse(&mut sentence, &mut oracle);

            assert_eq!(trace.fallbacks, 0, "heads {:?}", heads);
            assert!(trace.steps() <= 2 * n - 1);
            assert_eq!(trace.arcs(), n - 1);
            assert_eq!(sentence.heads(), reference.heads(), "heads {:?}", heads);

            sentence.clear_annotations();
            parse(&mut sentence, &mut ScriptedActions::new(oracle.actions().to_vec()));
            assert_eq!(sentence.heads(), reference.heads(), "heads {:?}", heads);
        }
    }
}

#[test]
fn test_non_projective_references_still_complete() {
    let mut checked = 0;
    for n in 1..=5 {
        for heads in all_trees(n) {
            let reference = tree_sentence(&heads);
            if reference.is_projective() {
                continue;
            }
            checked += 1;

            let mut sentence = reference.clone();
            let mut oracle = Oracle::new(&sentence);
            let trace = parse(&mut sentence, &mut oracle);

            assert!(trace.steps() <= 2 * n - 1);
            assert_eq!(sentence.root_count(), 1);
            assert!(sentence.is_projective());
            assert_ne!(sentence.heads(), reference.heads(), "heads {:?}", heads);
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_non_projective_hearing_sentence() {
    let reference = sentence(&[
        ("1", "A", "DET", "2"),
        ("2", "hearing", "NOUN", "4"),
        ("3", "is", "AUX", "4"),
        ("4", "scheduled", "VERB", "0"),
        ("5", "on", "ADP", "7"),
        ("6", "the", "DET", "7"),
        ("7", "issue", "NOUN", "2"),
        ("8", "today", "NOUN", "4"),
        ("9", ".", "PUNCT", "4"),
    ]);
    assert!(!reference.is_projective());

    let mut parsed = reference.clone();
    let mut oracle = Oracle::new(&parsed);
    parsed.clear_annotations();
    parse(&mut parsed, &mut oracle);

    assert_eq!(parsed.root_count(), 1);
    // arcs not involved in the crossing are still recovered
    assert_eq!(parsed.words()[0].head, reference.words()[0].head);
    assert_eq!(parsed.words()[4].head, reference.words()[4].head);
    assert_eq!(parsed.words()[5].head, reference.words()[5].head);
}

#[test]
fn test_feature_extraction_is_total_during_replay() {
    for sentence in [plaster_of_paris(), future_president()] {
        for example in oracle_examples(&sentence) {
            assert!(!example.features.is_empty());
        }
    }
}

#[test]
fn test_predictor_parses_unseen_sentence() {
    let corpus = vec![plaster_of_paris(), future_president()];
    let mut predictor = ActionPredictor::train(&corpus, &TrainingConfig::default());

    let mut unseen = sentence(&[
        ("1", "two", "NUM", "2"),
        ("2", "things", "NOUN", "3"),
        ("3", "joined", "VERB", "0"),
        ("4", "the", "DET", "5"),
        ("5", "Guard", "PROPN", "3"),
    ]);
    unseen.clear_annotations();
    let trace = parse(&mut unseen, &mut predictor);

    assert!(trace.steps() <= 9);
    assert_eq!(unseen.root_count(), 1);
    assert!(unseen.words().iter().all(|w| w.head.is_some()));
}

#[test]
fn test_display_oracle_parse() {
    let mut sentence = plaster_of_paris();
    let mut oracle = Oracle::new(&sentence);
    sentence.clear_annotations();
    parse(&mut sentence, &mut oracle);

    insta::assert_snapshot!(SentenceDisplay::new(&sentence).to_string(), @r###"
    Plaster  of  Paris  does  two  things
    ╰──────────────────────╯ Plaster → does
             ╰───────╯ of → Paris
    ╰────────────────╯ Paris → Plaster
                        ╰──╯ does → ROOT
                              ╰─────────╯ two → things
                        ╰───────────────╯ things → does
    "###);
}
