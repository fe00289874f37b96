//! Terminal render sink: grids side by side in ARC colors.

use colored::Colorize;
use hypolab_engine::{RenderError, RenderSink};
use hypolab_types::{palette_rgb, ComparisonVerdict, Grid, RenderableExample, MISSING};
use std::io::Write;

/// Glyph for cells outside a grid's bounds.
const MISSING_GLYPH: &str = " ·";
const GAP: &str = "   ";

/// Writes each renderable example as a header line plus a block of grids.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, examples: &[RenderableExample]) -> Result<(), RenderError> {
        for example in examples {
            writeln!(self.out, "{}", header(example))?;
            for line in block(example) {
                writeln!(self.out, "  {}", line)?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn header(example: &RenderableExample) -> String {
    let title = format!("{} example {}", example.split.label(), example.index);
    let status = match &example.verdict {
        ComparisonVerdict::ExactMatch => format!("✓ {}", example.verdict.status_label())
            .green()
            .to_string(),
        ComparisonVerdict::NoExpectation => "no expected output".dimmed().to_string(),
        ComparisonVerdict::CellMismatch {
            match_percentage, ..
        } => format!(
            "✗ {} ({:.2}% match)",
            example.verdict.status_label(),
            match_percentage
        )
        .red()
        .to_string(),
        ComparisonVerdict::ShapeMismatch { produced, expected } => format!(
            "✗ {} (transformed {}, expected {})",
            example.verdict.status_label(),
            produced,
            expected
        )
        .red()
        .to_string(),
    };
    format!("{}: {}", title.bold(), status)
}

/// Title row followed by one row per grid line. Shorter grids are padded
/// with the missing glyph so columns stay aligned.
fn block(example: &RenderableExample) -> Vec<String> {
    let widths: Vec<usize> = example.grids.iter().map(|g| g.width().max(1) * 2).collect();
    let height = example.grids.iter().map(Grid::height).max().unwrap_or(0);

    let titles = example
        .titles
        .iter()
        .zip(&widths)
        .map(|(t, w)| format!("{:<w$}", t, w = (*w).max(t.chars().count())))
        .collect::<Vec<_>>()
        .join(GAP);

    let mut lines = vec![titles];
    for row in 0..height {
        let cells = example
            .grids
            .iter()
            .zip(&example.titles)
            .map(|(grid, title)| {
                let width = grid.width().max(1);
                let mut line: String = (0..width).map(|col| cell(grid.get(row, col))).collect();
                let pad = title.chars().count().saturating_sub(width * 2);
                line.push_str(&" ".repeat(pad));
                line
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(cells);
    }
    lines
}

fn cell(value: Option<u8>) -> String {
    match value {
        Some(v) => {
            let (r, g, b) = palette_rgb(i8::try_from(v).unwrap_or(i8::MAX));
            format!("{:>2}", v).on_truecolor(r, g, b).to_string()
        }
        None => {
            let (r, g, b) = palette_rgb(MISSING);
            MISSING_GLYPH.on_truecolor(r, g, b).to_string()
        }
    }
}
