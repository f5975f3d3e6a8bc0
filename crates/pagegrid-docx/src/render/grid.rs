//! The grid-to-table renderer
//!
//! One render call walks one resolved grid document and mutates one table
//! inside the given host: dimensions and column shares first, then every
//! populated cell in row-major order, then merge regions. Nested grids
//! re-enter the same path with the cell as host, bounded by `max_depth`.

use log::{debug, trace};

use pagegrid_core::GridDocument;

use crate::error::{Error, Result};
use crate::model::{Table, TableHost, TableLook, TableRegion};
use crate::render::borders;
use crate::render::cell::{render_cell, CellContext};
use crate::render::convert::{self, MergeIndex};

/// Column count beyond which a table switches to the compact look
pub const COMPACT_COLUMN_THRESHOLD: u16 = 10;

/// Default bound on nested-grid recursion
///
/// Cross-sheet reference chains are shallow in practice; the bound turns a
/// cyclic reference into a fail-fast error instead of unbounded recursion.
pub const MAX_NESTING_DEPTH: usize = 16;

/// Renders resolved grid documents into document tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRenderer {
    max_depth: usize,
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl GridRenderer {
    /// Create a renderer with the default nesting bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a custom nesting bound
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Render a grid into a new table attached to the host
    ///
    /// The host is mutated in place through its exclusive borrow; the
    /// returned handle points at the table inside it. On error the host may
    /// hold a partially rendered table; discarding it is the caller's
    /// decision.
    pub fn render_into<'h>(
        &self,
        grid: &GridDocument,
        container_width: f64,
        host: &'h mut dyn TableHost,
    ) -> Result<&'h mut Table> {
        render_at_depth(grid, container_width, host, 0, self.max_depth)
    }
}

pub(crate) fn render_at_depth<'h>(
    grid: &GridDocument,
    container_width: f64,
    host: &'h mut dyn TableHost,
    depth: usize,
    max_depth: usize,
) -> Result<&'h mut Table> {
    if depth > max_depth {
        return Err(Error::NestingTooDeep { limit: max_depth });
    }
    grid.validate().map_err(Error::Core)?;

    let rows = grid.table_row_count();
    let cols = grid.table_col_count();
    debug!("rendering {rows}x{cols} table at depth {depth}");

    let table = host.host_table(Table::allocate(rows, cols, container_width));
    let shares = convert::pixel_widths_to_shares(&grid.pixel_widths(), container_width)?;
    if cols > COMPACT_COLUMN_THRESHOLD {
        table.set_look(TableLook::Compact);
    }

    // Every cell starts at its column's unmerged share; sparse rows keep it.
    for r in 0..rows {
        for (c, &share) in shares.iter().enumerate().take(cols as usize) {
            if let Some(cell) = table.cell_mut(r, c as u16) {
                cell.width = share;
            }
        }
    }

    let merges = MergeIndex::build(grid);
    let populated_cols = (cols as usize).min(shares.len());
    for (r, row) in grid.rows.iter().enumerate().take(rows as usize) {
        // Sparse rows stay blank; the row count was fixed at allocation.
        let Some(row) = row else { continue };
        for (c, record) in row.cells.iter().enumerate().take(populated_cols) {
            let ctx = CellContext {
                row: r as u32,
                col: c as u16,
                shares: &shares,
                merges: &merges,
                depth,
                max_depth,
            };
            if let Some(cell) = table.cell_mut(r as u32, c as u16) {
                render_cell(record, cell, shares[c], &ctx)?;
            }
        }
    }

    // Propagation must precede each physical merge: the merge collapses the
    // per-interior-cell border state it reads.
    for merge in &grid.merges {
        let region = TableRegion::from_merge(merge, grid.start_row, grid.start_col);
        trace!("applying merge {region}");
        borders::propagate(table, &region);
        table.merge(region)?;
    }

    Ok(table)
}
