use crate::example::Split;
use crate::grid::{Grid, Position, Shape};
use serde::{Deserialize, Serialize};

/// Classification of a produced grid against an expected grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ComparisonVerdict {
    /// Test example without ground truth.
    NoExpectation,
    ShapeMismatch { produced: Shape, expected: Shape },
    /// `differences` is in row-major order.
    CellMismatch {
        differences: Vec<Position>,
        match_percentage: f64,
    },
    ExactMatch,
}

impl ComparisonVerdict {
    pub fn is_exact_match(&self) -> bool {
        matches!(self, Self::ExactMatch)
    }

    /// Populated only when cells were actually compared.
    pub fn match_percentage(&self) -> Option<f64> {
        match self {
            Self::CellMismatch {
                match_percentage, ..
            } => Some(*match_percentage),
            Self::ExactMatch => Some(100.0),
            _ => None,
        }
    }

    /// Status label used in reports and render titles.
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::NoExpectation => "",
            Self::ShapeMismatch { .. } => "Dimensions Mismatch",
            Self::CellMismatch { .. } => "Mismatch Detected",
            Self::ExactMatch => "Transformed Correctly",
        }
    }
}

/// A comparator result together with the grids it was computed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub input: Grid,
    pub expected: Option<Grid>,
    pub produced: Grid,
    pub verdict: ComparisonVerdict,
}

impl Comparison {
    /// 0/1 grid marking differing cells; only for cell mismatches.
    pub fn difference_grid(&self) -> Option<Grid> {
        match &self.verdict {
            ComparisonVerdict::CellMismatch { differences, .. } => {
                let shape = self.produced.shape();
                let mut rows = vec![vec![0u8; shape.cols]; shape.rows];
                for p in differences {
                    rows[p.row][p.col] = 1;
                }
                Grid::new(rows).ok()
            }
            _ => None,
        }
    }
}

/// Record handed to an external visualization collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderableExample {
    pub grids: Vec<Grid>,
    pub titles: Vec<String>,
    pub verdict: ComparisonVerdict,
    pub dimensions: Vec<Shape>,
    pub split: Split,
    pub index: usize,
}

impl RenderableExample {
    pub fn from_comparison(comparison: &Comparison, split: Split, index: usize) -> Self {
        let (expected, expected_title) = match &comparison.expected {
            Some(grid) => (grid.clone(), "Expected Output"),
            None => (Grid::empty(), "Expected Output (Not Provided)"),
        };
        let mut grids = vec![
            comparison.input.clone(),
            expected,
            comparison.produced.clone(),
        ];
        let mut titles = vec![
            "Input Grid".to_string(),
            expected_title.to_string(),
            "Transformed Output".to_string(),
        ];
        if let Some(diff) = comparison.difference_grid() {
            grids.push(diff);
            titles.push("Difference Grid".to_string());
        }
        let dimensions = grids.iter().map(Grid::shape).collect();
        Self {
            grids,
            titles,
            verdict: comparison.verdict.clone(),
            dimensions,
            split,
            index,
        }
    }
}
