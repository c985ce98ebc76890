//! Pure layout math: which row a button lands in, its slot within that row,
//! its stagger rank and its cosmetic variant. Everything here is a total
//! function of the button index; nothing is cached and nothing is mutated.

/// Placement of a child button in the row grid.
///
/// Rows are numbered from the middle in both directions. The middle row is 0,
/// top rows have positive numbers, bottom rows have negative numbers:
///
/// ```text
/// Row 2
/// Row 1
/// Row 0 (middle, also holds the main button)
/// Row -1
/// Row -2
/// ```
///
/// `pos` is the slot within the row, filled outward from the row's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub pos: u32,
}

/// Returns the placement for the child button with the given index.
///
/// Index 0 is the first child button (the main button is not indexed).
/// The first 8 indices fill rows 1, -1 and 0 in round-robin; the middle
/// row's slot counter starts at 1 because the main button already occupies
/// slot 0. From index 8 on, rows are added two at a time (top and bottom),
/// three slots each, one ring of distance per 6 indices.
pub fn resolve_position(index: usize) -> Position {
    if index < 8 {
        let pos = (index / 3) as u32;
        match index % 3 {
            0 => Position { row: 1, pos },
            1 => Position { row: -1, pos },
            _ => Position { row: 0, pos: pos + 1 },
        }
    } else {
        let expanded = index - 8;
        let distance = (expanded / 6 + 2) as i32;
        let pos = ((expanded / 2) % 3) as u32;
        if expanded % 2 == 0 {
            Position { row: distance, pos }
        } else {
            Position {
                row: -distance,
                pos,
            }
        }
    }
}

/// Row number for a child button; projection of [`resolve_position`].
pub fn row_for_button(index: usize) -> i32 {
    resolve_position(index).row
}

/// Stagger rank for a child button, in dimensionless delay units.
///
/// The first ring (rows 1, 0, -1) adds no row delay; each ring beyond it
/// adds one unit, and the slot within the row adds one unit per step. The
/// caller multiplies this by its configured time per unit.
pub fn delay_units_for_button(index: usize) -> u32 {
    let position = resolve_position(index);
    let distance = position.row.unsigned_abs();
    let row_delay = distance.saturating_sub(1);
    row_delay + position.pos
}

/// Cosmetic variant for a child button, cycling through `variant_count`
/// categories. A count of zero is treated as one, so degenerate
/// configurations yield a constant variant instead of dividing by zero.
pub fn variant_for_button(index: usize, variant_count: u32) -> u32 {
    let count = variant_count.max(1);
    let position = resolve_position(index);
    let distance = position.row.unsigned_abs();
    ((distance % count) * (count - 1) + position.pos % count) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_three_rows_fill_round_robin() {
        let expected = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (1, 1),
            (-1, 1),
            (0, 2),
            (1, 2),
            (-1, 2),
        ];

        for (index, &(row, pos)) in expected.iter().enumerate() {
            assert_eq!(resolve_position(index), Position { row, pos }, "index {index}");
        }
    }

    #[test]
    fn outer_rows_expand_two_at_a_time() {
        assert_eq!(resolve_position(8), Position { row: 2, pos: 0 });
        assert_eq!(resolve_position(9), Position { row: -2, pos: 0 });
        assert_eq!(resolve_position(10), Position { row: 2, pos: 1 });
        assert_eq!(resolve_position(11), Position { row: -2, pos: 1 });
        assert_eq!(resolve_position(13), Position { row: -2, pos: 2 });
        assert_eq!(resolve_position(14), Position { row: 3, pos: 0 });
        assert_eq!(resolve_position(20), Position { row: 4, pos: 0 });
    }

    #[test]
    fn row_projection_matches_resolved_position() {
        for index in 0..1000 {
            assert_eq!(row_for_button(index), resolve_position(index).row);
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for index in 0..1000 {
            assert_eq!(resolve_position(index), resolve_position(index));
            assert_eq!(delay_units_for_button(index), delay_units_for_button(index));
            assert_eq!(variant_for_button(index, 4), variant_for_button(index, 4));
        }
    }

    #[test]
    fn first_ring_has_no_row_delay() {
        assert_eq!(delay_units_for_button(0), 0);
        assert_eq!(delay_units_for_button(1), 0);
        assert_eq!(delay_units_for_button(2), 1); // slot 1 of the middle row
        assert_eq!(delay_units_for_button(8), 1); // ring 2, slot 0
        assert_eq!(delay_units_for_button(14), 2); // ring 3, slot 0
    }

    #[test]
    fn delay_grows_with_ring_distance() {
        // Slot 0 of each ring: indices 0 (row 1), 8 (row 2), 14 (row 3), 20 (row 4).
        let slot_zero = [0, 8, 14, 20];
        let units: Vec<u32> = slot_zero
            .iter()
            .map(|&i| {
                assert_eq!(resolve_position(i).pos, 0);
                delay_units_for_button(i)
            })
            .collect();
        assert!(units.windows(2).all(|w| w[0] <= w[1]), "{units:?}");
    }

    #[test]
    fn variant_stays_in_range() {
        for count in 1..=6 {
            for index in 0..1000 {
                assert!(variant_for_button(index, count) < count);
            }
        }
    }

    #[test]
    fn single_variant_is_constant() {
        for index in 0..1000 {
            assert_eq!(variant_for_button(index, 1), 0);
            // A zero count clamps to one instead of panicking.
            assert_eq!(variant_for_button(index, 0), 0);
        }
    }

    #[test]
    fn variant_mixes_row_and_slot() {
        // row 1, slots 0..3 with the default four variants:
        // ((1 % 4) * 3 + pos % 4) % 4 = (3 + pos) % 4
        assert_eq!(variant_for_button(0, 4), 3);
        assert_eq!(variant_for_button(3, 4), 0);
        assert_eq!(variant_for_button(6, 4), 1);
    }
}
