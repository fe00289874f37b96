//! Candidates for task `6150a2bd`: the output is the input turned half way
//! around.

use hypolab_types::{Check, Grid, Position};

fn expect_equal(label: &str, expected: Grid, output: &Grid) -> Check {
    if expected == *output {
        Check::holds()
    } else {
        Check::fails(format!(
            "{} grid does not match output. Expected {:?}, got {:?}",
            label,
            expected.rows(),
            output.rows()
        ))
    }
}

pub fn grid_rotated_180(input: &Grid, output: &Grid) -> Check {
    expect_equal("Rotated", input.rotate_180(), output)
}

pub fn grid_mirrored_horizontally(input: &Grid, output: &Grid) -> Check {
    expect_equal("Mirrored horizontally", input.flip_horizontal(), output)
}

pub fn grid_mirrored_vertically(input: &Grid, output: &Grid) -> Check {
    expect_equal("Mirrored vertically", input.flip_vertical(), output)
}

pub fn grid_transposed(input: &Grid, output: &Grid) -> Check {
    expect_equal("Transposed", input.transpose(), output)
}

pub fn grid_rotated_90_clockwise(input: &Grid, output: &Grid) -> Check {
    expect_equal("90-degree rotated", input.rotate_90_clockwise(), output)
}

/// Background cells sit at the same positions before and after.
pub fn background_positions_preserved(input: &Grid, output: &Grid) -> Check {
    let background = |g: &Grid| -> Vec<Position> {
        g.cells().filter(|(_, c)| *c == 0).map(|(p, _)| p).collect()
    };
    let before = background(input);
    let after = background(output);
    if before == after {
        Check::holds()
    } else {
        Check::fails(format!(
            "Background cells have been reordered. Input backgrounds: {:?}, output backgrounds: {:?}",
            before, after
        ))
    }
}

/// The transformation for `6150a2bd`.
pub fn rotate_180(input: &Grid) -> Grid {
    input.rotate_180()
}
