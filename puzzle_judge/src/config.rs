use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use wallwars::Puzzle;

/// A puzzle file holds either one puzzle or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum PuzzleFile {
    Single(Puzzle),
    Many(Vec<Puzzle>),
}

pub fn load_puzzles(path: &Path) -> anyhow::Result<Vec<Puzzle>> {
    let file = File::open(path)
        .with_context(|| format!("Could not open puzzle file '{}'", path.display()))?;
    parse_puzzles(BufReader::new(file))
        .with_context(|| format!("Could not read puzzles from '{}'", path.display()))
}

pub fn parse_puzzles(reader: impl std::io::Read) -> anyhow::Result<Vec<Puzzle>> {
    Ok(match serde_json::from_reader(reader)? {
        PuzzleFile::Single(puzzle) => vec![puzzle],
        PuzzleFile::Many(puzzles) => puzzles,
    })
}

/// Keeps only the puzzle with the given id, or all of them if there's no id.
pub fn select_puzzles(puzzles: Vec<Puzzle>, id: Option<&str>) -> anyhow::Result<Vec<Puzzle>> {
    let Some(id) = id else {
        return Ok(puzzles);
    };
    let selected: Vec<Puzzle> = puzzles.into_iter().filter(|p| p.id == id).collect();
    if selected.is_empty() {
        anyhow::bail!("No puzzle with id '{}'", id);
    }
    Ok(selected)
}
