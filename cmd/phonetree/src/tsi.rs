//! Loader for the libchewing `tsi.src` phrase list.
//!
//! One record per line: `<phrase> <frequency> <syllable> <syllable> ...`.
//! Blank lines and `#` comments are skipped.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub phrase: String,
    pub frequency: u32,
    /// Space-separated syllables, normalized to single spaces.
    pub bopomofo: String,
}

pub fn load(path: &Path) -> Result<Vec<Record>> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("read vocabulary {}", path.display()))?;
    parse(&input).with_context(|| format!("parse vocabulary {}", path.display()))
}

pub fn parse(input: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(phrase), Some(frequency)) = (fields.next(), fields.next()) else {
            bail!("line {}: expected phrase and frequency", i + 1);
        };
        let frequency = frequency
            .parse()
            .with_context(|| format!("line {}: bad frequency {frequency:?}", i + 1))?;
        let bopomofo = fields.collect::<Vec<_>>().join(" ");
        if bopomofo.is_empty() {
            bail!("line {}: missing bopomofo", i + 1);
        }

        records.push(Record {
            phrase: phrase.to_string(),
            frequency,
            bopomofo,
        });
    }
    Ok(records)
}
