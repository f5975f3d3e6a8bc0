//! Table hosts: anything a rendered table can be attached to
//!
//! Three host kinds exist: the document body, a header/footer region, and a
//! pre-existing table cell (nested embedding). The renderer is polymorphic
//! over the single capability they share.

use crate::model::styles::StyleRegistry;
use crate::model::table::{Table, TableCell};

/// The capability of containing a rendered table
pub trait TableHost {
    /// Attach a table to this host and hand back an exclusive handle to it
    fn host_table(&mut self, table: Table) -> &mut Table;
}

/// The main body of a document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentBody {
    tables: Vec<Table>,
}

impl DocumentBody {
    /// Create an empty body
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables attached so far, in order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }
}

impl TableHost for DocumentBody {
    fn host_table(&mut self, table: Table) -> &mut Table {
        self.tables.push(table);
        // Just pushed, so the vec is non-empty.
        let last = self.tables.len() - 1;
        &mut self.tables[last]
    }
}

/// A header or footer region of a document section
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderFooter {
    tables: Vec<Table>,
}

impl HeaderFooter {
    /// Create an empty region
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables attached so far, in order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }
}

impl TableHost for HeaderFooter {
    fn host_table(&mut self, table: Table) -> &mut Table {
        self.tables.push(table);
        let last = self.tables.len() - 1;
        &mut self.tables[last]
    }
}

impl TableHost for TableCell {
    /// A cell hosts at most one table; re-hosting replaces it
    fn host_table(&mut self, table: Table) -> &mut Table {
        &mut *self.nested.insert(Box::new(table))
    }
}

/// A document: body, header/footer regions, and the style registry the
/// hosts resolve named styles against
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Main body
    pub body: DocumentBody,
    /// Page header region
    pub header: HeaderFooter,
    /// Page footer region
    pub footer: HeaderFooter,
    /// Named paragraph styles
    pub styles: StyleRegistry,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_hosts_tables_in_order() {
        let mut body = DocumentBody::new();
        body.host_table(Table::allocate(1, 1, 1.0));
        let second = body.host_table(Table::allocate(2, 2, 2.0));
        assert_eq!(second.row_count(), 2);
        assert_eq!(body.tables().len(), 2);
        assert_eq!(body.tables()[0].row_count(), 1);
    }

    #[test]
    fn test_cell_rehosting_replaces() {
        let mut cell = TableCell::new();
        cell.host_table(Table::allocate(1, 1, 1.0));
        cell.host_table(Table::allocate(3, 1, 1.0));
        assert_eq!(cell.nested.as_ref().unwrap().row_count(), 3);
    }
}
