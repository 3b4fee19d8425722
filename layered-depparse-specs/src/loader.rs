//! Fixture file loading.

use crate::{SpecError, SpecResult};
use layered_depparse::Sentence;
use std::fs;
use std::path::Path;

const FIXTURE_EXTENSION: &str = "conllu";

/// Load the sentences of a single CoNLL-U fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<Vec<Sentence>> {
    layered_conllu::read_file(path).map_err(|e| SpecError::from_conllu(path.display().to_string(), e))
}

/// Load all fixtures from a directory (glob: **/*.conllu), sorted by their
/// path relative to `dir`.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, Vec<Sentence>)>> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, Vec<Sentence>)>,
) -> SpecResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let load_error = |e: std::io::Error| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    };

    for entry in fs::read_dir(dir).map_err(load_error)? {
        let path = entry.map_err(load_error)?.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == FIXTURE_EXTENSION) {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let sentences = load_fixture(&path)?;
            log::debug!("loaded {} sentences from {}", sentences.len(), relative.display());
            fixtures.push((relative.display().to_string(), sentences));
        }
    }

    Ok(())
}
