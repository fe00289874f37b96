//! Candidates for task `29c11459`: the two end colors of a row grow toward
//! each other and meet at a gray separator.
//!
//! Output rows are always [`ROW_WIDTH`] cells: [`SEGMENT_LEN`] cells of the
//! first color, the separator, then [`SEGMENT_LEN`] cells of the second.

use hypolab_types::{Check, Grid};

pub const SEPARATOR: u8 = 5;
pub const SEGMENT_LEN: usize = 5;
pub const ROW_WIDTH: usize = 2 * SEGMENT_LEN + 1;

fn foreground(row: &[u8]) -> Vec<u8> {
    row.iter().copied().filter(|&c| c != 0).collect()
}

fn segmented(first: u8, second: u8) -> Vec<u8> {
    let mut row = vec![first; SEGMENT_LEN];
    row.push(SEPARATOR);
    row.extend(std::iter::repeat(second).take(SEGMENT_LEN));
    row
}

/// Shared row walk: blank input rows must stay blank, other rows must carry
/// exactly two colors and then pass `check`.
fn for_each_pair_row(
    input: &Grid,
    output: &Grid,
    check: impl Fn(usize, (u8, u8), &[u8]) -> Option<String>,
) -> Check {
    for (index, (in_row, out_row)) in input.rows().iter().zip(output.rows()).enumerate() {
        let colors = foreground(in_row);
        if colors.is_empty() {
            if out_row.iter().any(|&c| c != 0) {
                return Check::fails(format!(
                    "Row {}: expected all background, found non-background colors",
                    index
                ));
            }
            continue;
        }
        if colors.len() != 2 {
            return Check::fails(format!(
                "Row {}: expected exactly two non-background colors, found {}",
                index,
                colors.len()
            ));
        }
        if let Some(reason) = check(index, (colors[0], colors[1]), out_row) {
            return Check::fails(reason);
        }
    }
    Check::holds()
}

pub fn segmented_row_reconstruction(input: &Grid, output: &Grid) -> Check {
    for_each_pair_row(input, output, |index, (first, second), out_row| {
        let expected = segmented(first, second);
        (out_row != expected.as_slice())
            .then(|| format!("Row {}: expected {:?}, found {:?}", index, expected, out_row))
    })
}

pub fn fixed_separator_position(input: &Grid, output: &Grid) -> Check {
    for_each_pair_row(input, output, |index, _, out_row| {
        (out_row.get(SEGMENT_LEN) != Some(&SEPARATOR))
            .then(|| format!("Row {}: separator not at index {}", index, SEGMENT_LEN))
    })
}

pub fn color_order_preserved(input: &Grid, output: &Grid) -> Check {
    for_each_pair_row(input, output, |index, (first, second), out_row| {
        let head = out_row.get(..SEGMENT_LEN);
        let tail = out_row.get(SEGMENT_LEN + 1..);
        let ordered = head.is_some_and(|h| h.iter().all(|&c| c == first))
            && tail.is_some_and(|t| t.len() == SEGMENT_LEN && t.iter().all(|&c| c == second));
        (!ordered).then(|| format!("Row {}: color order not preserved", index))
    })
}

pub fn no_rotation_or_scaling(input: &Grid, output: &Grid) -> Check {
    if input.height() != output.height() {
        return Check::fails("Grid height changed");
    }
    if input.width() != output.width() {
        return Check::fails("Grid width changed");
    }
    Check::holds()
}

/// Background cells in the input stay background in the output.
pub fn background_preserved(input: &Grid, output: &Grid) -> Check {
    let altered = input
        .cells()
        .find(|(p, c)| *c == 0 && output.get(p.row, p.col).is_some_and(|o| o != 0));
    match altered {
        Some((p, _)) => Check::fails(format!(
            "Row {}, column {}: background altered",
            p.row, p.col
        )),
        None => Check::holds(),
    }
}

/// Rows with several colors get one separator fewer than they have colors.
pub fn single_separator_insertion(input: &Grid, output: &Grid) -> Check {
    for (index, (in_row, out_row)) in input.rows().iter().zip(output.rows()).enumerate() {
        let colors = foreground(in_row);
        if colors.len() <= 1 {
            continue;
        }
        let separators = out_row.iter().filter(|&&c| c == SEPARATOR).count();
        if separators != colors.len() - 1 {
            return Check::fails(format!(
                "Row {}: expected {} separator(s), found {}",
                index,
                colors.len() - 1,
                separators
            ));
        }
    }
    Check::holds()
}

/// The transformation for `29c11459`.
///
/// A blank row stays blank, a single color fills both segments, and rows
/// with more than two colors are unsupported.
pub fn reconstruct_rows(input: &Grid) -> anyhow::Result<Grid> {
    let rows = input
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| match foreground(row).as_slice() {
            [] => Ok(vec![0; ROW_WIDTH]),
            [color] => Ok(segmented(*color, *color)),
            [first, second] => Ok(segmented(*first, *second)),
            colors => anyhow::bail!(
                "Row {}: unsupported number of non-background colors ({})",
                index,
                colors.len()
            ),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Grid::new(rows)?)
}
