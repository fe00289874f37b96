//! Grid comparator.

use hypolab_types::{Comparison, ComparisonVerdict, Grid, Position};

/// Classify `produced` against `expected`.
///
/// Shape is checked before cells; a shape mismatch never yields a
/// difference map. Differences are reported in row-major order.
pub fn compare(produced: &Grid, expected: Option<&Grid>) -> ComparisonVerdict {
    let Some(expected) = expected else {
        return ComparisonVerdict::NoExpectation;
    };
    if produced.shape() != expected.shape() {
        return ComparisonVerdict::ShapeMismatch {
            produced: produced.shape(),
            expected: expected.shape(),
        };
    }
    let differences: Vec<Position> = produced
        .cells()
        .zip(expected.cells())
        .filter(|((_, a), (_, b))| a != b)
        .map(|((pos, _), _)| pos)
        .collect();
    if differences.is_empty() {
        return ComparisonVerdict::ExactMatch;
    }
    let total = produced.cell_count();
    let match_percentage = 100.0 * (total - differences.len()) as f64 / total as f64;
    ComparisonVerdict::CellMismatch {
        differences,
        match_percentage,
    }
}

/// Compare and keep the grids alongside the verdict for rendering.
pub fn compare_example(input: &Grid, expected: Option<&Grid>, produced: Grid) -> Comparison {
    let verdict = compare(&produced, expected);
    Comparison {
        input: input.clone(),
        expected: expected.cloned(),
        produced,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypolab_types::Shape;
    use proptest::prelude::*;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn absent_expectation() {
        assert_eq!(
            compare(&grid(&[&[1]]), None),
            ComparisonVerdict::NoExpectation
        );
    }

    #[test]
    fn shape_mismatch_takes_precedence() {
        let verdict = compare(&grid(&[&[1, 2]]), Some(&grid(&[&[1], &[2]])));
        assert_eq!(
            verdict,
            ComparisonVerdict::ShapeMismatch {
                produced: Shape::new(1, 2),
                expected: Shape::new(2, 1),
            }
        );
    }

    #[test]
    fn exact_match_including_empty() {
        let g = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(compare(&g, Some(&g)), ComparisonVerdict::ExactMatch);
        let empty = Grid::empty();
        assert_eq!(compare(&empty, Some(&empty)), ComparisonVerdict::ExactMatch);
    }

    #[test]
    fn cell_mismatch_percentage() {
        let verdict = compare(&grid(&[&[1, 2], &[3, 4]]), Some(&grid(&[&[1, 0], &[3, 0]])));
        assert_eq!(
            verdict,
            ComparisonVerdict::CellMismatch {
                differences: vec![Position::new(0, 1), Position::new(1, 1)],
                match_percentage: 50.0,
            }
        );
    }

    #[test]
    fn compare_example_keeps_grids() {
        let input = grid(&[&[1, 0], &[0, 2]]);
        let expected = grid(&[&[2, 0], &[0, 1]]);
        let c = compare_example(&input, Some(&expected), input.rotate_180());
        assert!(c.verdict.is_exact_match());
        assert_eq!(c.input, input);
        assert_eq!(c.expected, Some(expected));
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (0usize..6, 0usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(0u8..10, cols), rows)
                .prop_map(|rows| Grid::new(rows).unwrap())
        })
    }

    proptest! {
        #[test]
        fn self_comparison_is_exact(g in arb_grid()) {
            prop_assert_eq!(compare(&g, Some(&g)), ComparisonVerdict::ExactMatch);
        }

        #[test]
        fn differing_shapes_never_diff_cells(a in arb_grid(), b in arb_grid()) {
            prop_assume!(a.shape() != b.shape());
            let is_shape_mismatch = matches!(
                compare(&a, Some(&b)),
                ComparisonVerdict::ShapeMismatch { .. }
            );
            prop_assert!(is_shape_mismatch);
        }

        #[test]
        fn percentage_matches_differing_cells(a in arb_grid(), seed in any::<u64>()) {
            let b = Grid::from_fn(a.height(), a.width(), |r, c| {
                let v = a.get(r, c).unwrap_or(0);
                if (seed >> ((r * 7 + c) % 64)) & 1 == 1 { (v + 1) % 10 } else { v }
            });
            match compare(&a, Some(&b)) {
                ComparisonVerdict::ExactMatch => prop_assert_eq!(&a, &b),
                ComparisonVerdict::CellMismatch { differences, match_percentage } => {
                    let total = a.cell_count() as f64;
                    let expected = 100.0 * (1.0 - differences.len() as f64 / total);
                    prop_assert!((match_percentage - expected).abs() < 1e-9);
                    for p in &differences {
                        prop_assert_ne!(a.get(p.row, p.col), b.get(p.row, p.col));
                    }
                    let mut sorted = differences.clone();
                    sorted.sort();
                    prop_assert_eq!(sorted, differences);
                }
                other => prop_assert!(false, "unexpected verdict {:?}", other),
            }
        }
    }
}
