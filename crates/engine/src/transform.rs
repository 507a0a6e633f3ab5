//! Counter-clockwise grid rotation and the direction table built on it.

use tile_core::{CoreError, Direction, Grid, Rotation};

/// Rotate `grid` counter-clockwise. A rows x cols grid becomes cols x rows
/// for quarter turns.
pub fn rotate(grid: &Grid, rotation: Rotation) -> Grid {
    let rows = grid.height();
    let cols = grid.width();

    let out = match rotation {
        Rotation::Zero => return grid.clone(),
        Rotation::Quarter => (0..cols)
            .map(|c| (0..rows).map(|r| grid.get(r, cols - c - 1)).collect())
            .collect(),
        Rotation::Half => (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| grid.get(rows - r - 1, cols - c - 1))
                    .collect()
            })
            .collect(),
        Rotation::ThreeQuarter => (0..cols)
            .map(|c| (0..rows).map(|r| grid.get(rows - r - 1, c)).collect())
            .collect(),
    };
    Grid::from_rows(out)
}

/// [`rotate`] by a raw degree count; only 0, 90, 180 and 270 are accepted.
pub fn rotate_degrees(grid: &Grid, degrees: u16) -> Result<Grid, CoreError> {
    Ok(rotate(grid, Rotation::from_degrees(degrees)?))
}

/// Rotation that turns a move in `direction` into a move left.
pub fn forward_rotation(direction: Direction) -> Rotation {
    match direction {
        Direction::Left => Rotation::Zero,
        Direction::Up => Rotation::Quarter,
        Direction::Right => Rotation::Half,
        Direction::Down => Rotation::ThreeQuarter,
    }
}

/// Rotation that restores the orientation after [`forward_rotation`].
pub fn revert_rotation(direction: Direction) -> Rotation {
    match direction {
        Direction::Left => Rotation::Zero,
        Direction::Up => Rotation::ThreeQuarter,
        Direction::Right => Rotation::Half,
        Direction::Down => Rotation::Quarter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_values(&[[2, 4, 8], [16, 32, 64]])
    }

    #[test]
    fn test_zero_is_identity() {
        let g = sample();
        assert_eq!(rotate(&g, Rotation::Zero), g);
    }

    #[test]
    fn test_quarter_turn_ccw() {
        // right column ends up on top
        let r = rotate(&sample(), Rotation::Quarter);
        assert_eq!(r.to_values(), vec![vec![8, 64], vec![4, 32], vec![2, 16]]);
    }

    #[test]
    fn test_half_turn() {
        let r = rotate(&sample(), Rotation::Half);
        assert_eq!(r.to_values(), vec![vec![64, 32, 16], vec![8, 4, 2]]);
    }

    #[test]
    fn test_three_quarter_turn() {
        let r = rotate(&sample(), Rotation::ThreeQuarter);
        assert_eq!(r.to_values(), vec![vec![16, 2], vec![32, 4], vec![64, 8]]);
    }

    #[test]
    fn test_quarter_turns_swap_dimensions() {
        let r = rotate(&sample(), Rotation::Quarter);
        assert_eq!(r.shape(), Ok((3, 2)));
        let r = rotate(&sample(), Rotation::Half);
        assert_eq!(r.shape(), Ok((2, 3)));
    }

    #[test]
    fn test_revert_undoes_forward() {
        let g = Grid::from_values(&[[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 16, 0], [32, 0, 0, 2]]);
        for d in Direction::ALL {
            let there = rotate(&g, forward_rotation(d));
            assert_eq!(rotate(&there, revert_rotation(d)), g, "direction {d}");
            assert_eq!(forward_rotation(d).then(revert_rotation(d)), Rotation::Zero);
        }
    }

    #[test]
    fn test_rotate_degrees() {
        let g = sample();
        assert_eq!(
            rotate_degrees(&g, 180).expect("valid"),
            rotate(&g, Rotation::Half)
        );
        assert_eq!(
            rotate_degrees(&g, 45),
            Err(CoreError::InvalidRotation(45))
        );
    }
}
