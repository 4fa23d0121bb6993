//! Warehouse layout derived from product positions.
//!
//! The layout is a grid model: products sit on shelf rows (their `floor(y)`)
//! at integer slots (their `floor(x)`). Shelf rows are expected on even
//! indices, with the odd indices between them acting as walkable aisles; the
//! aisle that services row `r` is `r + 1`. That even-row convention is a
//! precondition of the sweep solver, not an enforced rule: a layout built
//! from odd-row data still works, it just degrades the sweep's corner
//! placement (see the sweep module's fallback).
//!
//! Build the layout once from the catalog and pass it by reference to
//! whatever needs it; there is no process-global instance.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// One storage row of the warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShelfRow {
    /// Shelf index: the row's integer y coordinate.
    pub index: u32,
    /// Occupied integer x-slots. Never empty for a row that exists.
    pub occupied: BTreeSet<u32>,
    /// Leftmost occupied slot.
    pub begin: u32,
    /// Rightmost occupied slot.
    pub end: u32,
    /// Unoccupied slots within `[0, layout width)`.
    pub open: BTreeSet<u32>,
}

/// Shelf rows plus overall dimensions, derived from observed positions.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WarehouseLayout {
    rows: BTreeMap<u32, ShelfRow>,
    width: u32,
    height: u32,
}

impl WarehouseLayout {
    /// Builds a layout from catalog positions.
    ///
    /// Every position lands on shelf row `floor(y)`, slot `floor(x)`.
    /// Dimensions are `(max slot + 1, max row + 1)` over everything
    /// observed; positions with a negative coordinate (the catalog's "no
    /// known location" convention) are skipped.
    pub fn build<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut occupied: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
        let mut max_slot = None;
        let mut max_row = None;

        for position in positions {
            if position.is_unplaced() {
                log::debug!(
                    "skipping catalog position ({}, {}): no known location",
                    position.x,
                    position.y
                );
                continue;
            }
            let row = position.y.floor() as u32;
            let slot = position.x.floor() as u32;
            occupied.entry(row).or_default().insert(slot);
            max_slot = Some(max_slot.map_or(slot, |m: u32| m.max(slot)));
            max_row = Some(max_row.map_or(row, |m: u32| m.max(row)));
        }

        let width = max_slot.map_or(0, |m| m + 1);
        let height = max_row.map_or(0, |m| m + 1);

        let rows: BTreeMap<u32, ShelfRow> = occupied
            .into_iter()
            .filter_map(|(index, slots)| {
                let (Some(begin), Some(end)) = (slots.first().copied(), slots.last().copied())
                else {
                    return None;
                };
                if index % 2 != 0 {
                    log::warn!(
                        "shelf row {index} sits on an odd index; rows are expected on even \
                         indices with aisles between them"
                    );
                }
                let open = (0..width).filter(|slot| !slots.contains(slot)).collect();
                Some((
                    index,
                    ShelfRow {
                        index,
                        occupied: slots,
                        begin,
                        end,
                        open,
                    },
                ))
            })
            .collect();

        log::debug!(
            "built warehouse layout: {} rows, {}x{}",
            rows.len(),
            width,
            height
        );
        Self {
            rows,
            width,
            height,
        }
    }

    /// Looks up a shelf row; absent rows are `None`, never an error.
    pub fn row(&self, index: u32) -> Option<&ShelfRow> {
        self.rows.get(&index)
    }

    /// All shelf rows in ascending index order.
    pub fn rows(&self) -> impl Iterator<Item = &ShelfRow> + '_ {
        self.rows.values()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(width, height)`, i.e. `(max slot + 1, max row + 1)`; `(0, 0)` for an
    /// empty layout.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// One past the highest shelf row.
    ///
    /// The sweep's pairwise loop does no processing for aisles at or beyond
    /// this bound: there is nothing below them left to clear.
    pub fn row_ceiling(&self) -> u32 {
        self.height
    }

    /// The aisle that services shelf row `row`.
    pub const fn aisle_for_row(row: u32) -> u32 {
        row + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<Position> {
        vec![
            Position::new(2.0, 0.0),
            Position::new(5.5, 0.9),
            Position::new(1.0, 2.0),
            Position::new(7.0, 2.0),
            Position::new(4.0, 4.5),
        ]
    }

    #[test]
    fn test_build_groups_rows_and_slots() {
        let layout = WarehouseLayout::build(sample_catalog());
        assert_eq!(layout.row_count(), 3);

        let row0 = layout.row(0).unwrap();
        assert_eq!(row0.begin, 2);
        assert_eq!(row0.end, 5);
        assert!(row0.occupied.contains(&2));
        assert!(row0.occupied.contains(&5));

        let row2 = layout.row(2).unwrap();
        assert_eq!(row2.begin, 1);
        assert_eq!(row2.end, 7);
    }

    #[test]
    fn test_build_dimensions() {
        let layout = WarehouseLayout::build(sample_catalog());
        assert_eq!(layout.dimensions(), (8, 5));
        assert_eq!(layout.row_ceiling(), 5);
    }

    #[test]
    fn test_fractional_positions_floor_to_grid() {
        let layout = WarehouseLayout::build(vec![Position::new(3.9, 1.99)]);
        let row = layout.row(1).unwrap();
        assert!(row.occupied.contains(&3));
        assert_eq!(layout.dimensions(), (4, 2));
    }

    #[test]
    fn test_missing_row_is_absent() {
        let layout = WarehouseLayout::build(sample_catalog());
        assert!(layout.row(1).is_none());
        assert!(layout.row(99).is_none());
    }

    #[test]
    fn test_unplaced_positions_are_skipped() {
        let layout = WarehouseLayout::build(vec![
            Position::new(2.0, 0.0),
            Position::new(-1.0, -1.0),
            Position::new(-1.0, 3.0),
        ]);
        assert_eq!(layout.row_count(), 1);
        assert_eq!(layout.dimensions(), (3, 1));
    }

    #[test]
    fn test_empty_catalog() {
        let layout = WarehouseLayout::build(Vec::new());
        assert!(layout.is_empty());
        assert_eq!(layout.dimensions(), (0, 0));
        assert_eq!(layout.row_ceiling(), 0);
    }

    #[test]
    fn test_open_slots_complement_occupied() {
        let layout = WarehouseLayout::build(vec![
            Position::new(0.0, 0.0),
            Position::new(2.0, 0.0),
            Position::new(4.0, 2.0),
        ]);
        let row0 = layout.row(0).unwrap();
        // width is 5, row 0 occupies slots 0 and 2
        assert_eq!(row0.open.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
        let row2 = layout.row(2).unwrap();
        assert_eq!(
            row2.open.iter().copied().collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_rows_iterate_ascending() {
        let layout = WarehouseLayout::build(sample_catalog());
        let indices: Vec<u32> = layout.rows().map(|row| row.index).collect();
        assert_eq!(indices, vec![0, 2, 4]);
    }

    #[test]
    fn test_odd_row_is_stored() {
        // tolerated with a warning; the sweep degrades gracefully instead
        let layout = WarehouseLayout::build(vec![Position::new(1.0, 3.0)]);
        assert!(layout.row(3).is_some());
    }

    #[test]
    fn test_aisle_for_row() {
        assert_eq!(WarehouseLayout::aisle_for_row(0), 1);
        assert_eq!(WarehouseLayout::aisle_for_row(20), 21);
    }
}
