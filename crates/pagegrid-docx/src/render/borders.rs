//! Border propagation across merge regions
//!
//! A physical merge collapses per-cell border identity: once cells are
//! merged, the layout engine draws the merged cell's outline by sampling
//! whichever former interior cell sits at each corner. Copying the anchor's
//! borders onto every covered cell *before* the merge keeps that outline
//! uniform no matter which cell gets sampled.

use crate::model::{Table, TableRegion};

/// Copy the anchor cell's borders onto every other cell in the region
///
/// No failure modes; rectangles (or parts of them) outside the table are
/// simply skipped.
pub fn propagate(table: &mut Table, region: &TableRegion) {
    let Some(anchor) = table.cell(region.start_row, region.start_col) else {
        return;
    };
    let borders = anchor.borders.clone();

    for row in region.start_row..=region.end_row {
        for col in region.start_col..=region.end_col {
            if row == region.start_row && col == region.start_col {
                continue;
            }
            if let Some(cell) = table.cell_mut(row, col) {
                cell.borders = borders.clone();
            }
        }
    }
}

/// Re-run propagation over every merge already applied to a table
///
/// Used on a nested table after its recursive render returns.
pub fn propagate_merged(table: &mut Table) {
    let regions = table.merge_regions().to_vec();
    for region in &regions {
        propagate(table, region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BorderLine, LineStyle};
    use pagegrid_core::Color;

    #[test]
    fn test_propagate_copies_anchor_borders() {
        let mut table = Table::allocate(2, 2, 4.0);
        table.cell_mut(0, 0).unwrap().borders.top =
            Some(BorderLine::new(LineStyle::Single, 1.0, Color::BLACK));

        propagate(&mut table, &TableRegion::new(0, 1, 0, 1));

        for (r, c) in [(0, 1), (1, 0), (1, 1)] {
            let cell = table.cell(r, c).unwrap();
            assert_eq!(
                cell.borders.top,
                Some(BorderLine::new(LineStyle::Single, 1.0, Color::BLACK)),
                "cell ({r}, {c})"
            );
            assert!(cell.borders.bottom.is_none());
        }
    }

    #[test]
    fn test_propagate_overwrites_covered_cell_borders() {
        let mut table = Table::allocate(1, 2, 4.0);
        table.cell_mut(0, 1).unwrap().borders.bottom =
            Some(BorderLine::new(LineStyle::Double, 3.0, Color::BLACK));

        propagate(&mut table, &TableRegion::new(0, 0, 0, 1));

        // the anchor has no borders, so the covered cell ends up with none
        assert!(table.cell(0, 1).unwrap().borders.is_empty());
    }
}
