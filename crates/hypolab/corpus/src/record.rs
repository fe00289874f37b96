//! Raw on-disk task record and its validation into typed examples.

use crate::error::CorpusError;
use hypolab_types::{Example, Grid, Split, MAX_COLOR};
use serde::Deserialize;

type RawGrid = Vec<Vec<i64>>;

#[derive(Debug, Deserialize)]
pub(crate) struct RawTask {
    pub train: Vec<RawExample>,
    #[serde(default)]
    pub test: Vec<RawExample>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawExample {
    pub input: Option<RawGrid>,
    pub output: Option<RawGrid>,
}

pub(crate) fn parse(task_id: &str, bytes: &[u8]) -> Result<(Vec<Example>, Vec<Example>), CorpusError> {
    let raw: RawTask = serde_json::from_slice(bytes)
        .map_err(|e| CorpusError::malformed(task_id, e.to_string()))?;
    let train = convert_split(task_id, Split::Train, raw.train)?;
    let test = convert_split(task_id, Split::Test, raw.test)?;
    Ok((train, test))
}

fn convert_split(
    task_id: &str,
    split: Split,
    examples: Vec<RawExample>,
) -> Result<Vec<Example>, CorpusError> {
    examples
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            let at = |field: &str| format!("{}[{}].{}", split, idx, field);
            let input = raw
                .input
                .ok_or_else(|| CorpusError::malformed(task_id, format!("{}: missing", at("input"))))?;
            let input = convert_grid(task_id, &at("input"), input)?;
            let output = match raw.output {
                Some(g) => Some(convert_grid(task_id, &at("output"), g)?),
                None if split == Split::Train => {
                    return Err(CorpusError::malformed(
                        task_id,
                        format!("{}: missing", at("output")),
                    ))
                }
                None => None,
            };
            Ok(Example { input, output })
        })
        .collect()
}

fn convert_grid(task_id: &str, at: &str, raw: RawGrid) -> Result<Grid, CorpusError> {
    let mut rows = Vec::with_capacity(raw.len());
    for (r, raw_row) in raw.into_iter().enumerate() {
        let mut row = Vec::with_capacity(raw_row.len());
        for (c, value) in raw_row.into_iter().enumerate() {
            match u8::try_from(value) {
                Ok(v) if v <= MAX_COLOR => row.push(v),
                _ => {
                    return Err(CorpusError::malformed(
                        task_id,
                        format!(
                            "{}: cell ({}, {}) = {} outside 0-{}",
                            at, r, c, value, MAX_COLOR
                        ),
                    ))
                }
            }
        }
        rows.push(row);
    }
    Grid::new(rows).map_err(|e| CorpusError::malformed(task_id, format!("{}: {}", at, e)))
}
