//! Port table model: rows keyed by port index, cells bound to column names.
//!
//! Detail values are stored per row under their column name, never under a position, so inserting
//! a dynamic column never moves existing data. Positions only exist in the [`ColumnRegistry`]
//! projection used for rendering.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::columns::{Column, ColumnKey, ColumnRegistry, FixedColumn};
use crate::model::{DetailCell, PortIcon, PortIndex, PortRecord};
use crate::sort::{SortKeyExtractor, SortOrder};

/// Errors raised by table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The row key is not part of the current table.
    #[error("no port with index `{0}` in the current table")]
    RowNotFound(PortIndex),
}

/// A merged detail value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailValue {
    /// Display HTML.
    pub html: String,
    /// Explicit sort key.
    pub sort_key: Option<String>,
}

/// Content of one rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Status icon.
    Icon {
        /// Image path.
        resource: String,
        /// Alternative text.
        alt: String,
    },
    /// Port name, rendered as the expand/collapse control.
    Name(String),
    /// Plain text.
    Text(String),
    /// Server-supplied HTML fragment.
    Html(String),
    /// No value.
    Empty,
}

/// One rendered port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRow {
    record: PortRecord,
    icon: PortIcon,
    expanded: bool,
    loading: bool,
    details: BTreeMap<String, DetailValue>,
}

impl PortRow {
    fn new(record: PortRecord) -> Self {
        let icon = PortIcon::for_port(&record);
        Self {
            record,
            icon,
            expanded: false,
            loading: false,
            details: BTreeMap::new(),
        }
    }

    /// Row key.
    pub fn index(&self) -> &PortIndex {
        &self.record.index
    }

    /// Source record.
    pub fn record(&self) -> &PortRecord {
        &self.record
    }

    /// Status icon.
    pub fn icon(&self) -> &PortIcon {
        &self.icon
    }

    /// Whether details are merged and shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether a detail request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Detail value for a dynamic column.
    pub fn detail(&self, column: &str) -> Option<&DetailValue> {
        self.details.get(column)
    }

    /// Cell content under `key`. Columns the row has no value for are empty.
    pub fn cell(&self, key: &ColumnKey) -> CellContent {
        match key {
            ColumnKey::Fixed(FixedColumn::State) => CellContent::Icon {
                resource: self.icon.resource.clone(),
                alt: self.icon.label.clone(),
            },
            ColumnKey::Fixed(FixedColumn::Name) => {
                CellContent::Name(self.record.display_name.clone())
            }
            ColumnKey::Fixed(FixedColumn::Alias) => {
                CellContent::Text(self.record.alias_text().to_string())
            }
            ColumnKey::Dynamic(name) => self
                .details
                .get(name)
                .map(|value| CellContent::Html(value.html.clone()))
                .unwrap_or(CellContent::Empty),
        }
    }
}

/// Port rows of the selected equipment plus its column registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortTable {
    columns: ColumnRegistry,
    rows: Vec<PortRow>,
}

impl PortTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every row and resets the registry to the fixed columns.
    ///
    /// Rows keep the input order. A repeated index keeps its first occurrence only.
    pub fn render_rows(&mut self, records: Vec<PortRecord>) {
        self.columns.clear();
        let mut seen = HashSet::new();
        self.rows = records
            .into_iter()
            .filter(|record| seen.insert(record.index.clone()))
            .map(PortRow::new)
            .collect();
    }

    /// Drops every row and dynamic column.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.rows.clear();
    }

    /// Merges detail tuples into a row, registering unseen columns.
    ///
    /// Repeating a column overwrites its previous value. The row ends expanded and not loading.
    pub fn merge_details(
        &mut self,
        index: &PortIndex,
        details: &[DetailCell],
    ) -> Result<(), TableError> {
        let position = self.position(index)?;
        for detail in details {
            self.columns.ensure_column(&detail.column);
        }
        let row = &mut self.rows[position];
        for detail in details {
            row.details.insert(
                detail.column.clone(),
                DetailValue {
                    html: detail.html.clone(),
                    sort_key: detail.sort_key.clone(),
                },
            );
        }
        row.expanded = true;
        row.loading = false;
        Ok(())
    }

    /// Flags a row as loading. Returns `false` when a request is already outstanding.
    pub fn begin_expand(&mut self, index: &PortIndex) -> Result<bool, TableError> {
        let row = self.row_mut(index)?;
        if row.loading {
            return Ok(false);
        }
        row.loading = true;
        Ok(true)
    }

    /// Clears the loading flag without merging anything.
    pub fn finish_loading(&mut self, index: &PortIndex) -> Result<(), TableError> {
        self.row_mut(index)?.loading = false;
        Ok(())
    }

    /// Empties a row's detail cells. Registered columns stay.
    pub fn collapse_details(&mut self, index: &PortIndex) -> Result<(), TableError> {
        let row = self.row_mut(index)?;
        row.details.clear();
        row.expanded = false;
        row.loading = false;
        Ok(())
    }

    /// Keys of rows that are neither expanded nor loading, in row order.
    pub fn collapsed_indexes(&self) -> Vec<PortIndex> {
        self.rows
            .iter()
            .filter(|row| !row.expanded && !row.loading)
            .map(|row| row.index().clone())
            .collect()
    }

    /// Row by key.
    pub fn row(&self, index: &PortIndex) -> Option<&PortRow> {
        self.rows.iter().find(|row| row.index() == index)
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[PortRow] {
        &self.rows
    }

    /// Column registry.
    pub fn registry(&self) -> &ColumnRegistry {
        &self.columns
    }

    /// Column projection in position order.
    pub fn columns(&self) -> Vec<Column> {
        self.columns.columns()
    }

    /// Shows or hides a dynamic column.
    pub fn set_column_visible(&mut self, name: &str, visible: bool) -> bool {
        self.columns.set_visible(name, visible)
    }

    /// Cells of `row` for every visible column, in position order.
    pub fn visible_cells(&self, row: &PortRow) -> Vec<CellContent> {
        self.columns
            .columns()
            .iter()
            .filter(|column| column.visible)
            .map(|column| row.cell(&column.key))
            .collect()
    }

    /// Reorders rows by `order`. Ties keep their current relative order.
    pub fn sort(&mut self, order: &SortOrder, keys: &impl SortKeyExtractor) {
        if order.is_empty() {
            return;
        }
        self.rows.sort_by(|a, b| order.compare(keys, a, b));
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, index: &PortIndex) -> Result<usize, TableError> {
        self.rows
            .iter()
            .position(|row| row.index() == index)
            .ok_or_else(|| TableError::RowNotFound(index.clone()))
    }

    fn row_mut(&mut self, index: &PortIndex) -> Result<&mut PortRow, TableError> {
        let position = self.position(index)?;
        Ok(&mut self.rows[position])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Duplex, PortState};

    fn eth0() -> PortRecord {
        PortRecord::new(1, "eth0")
            .with_state(PortState::Up)
            .with_speed(Some(1000))
            .with_duplex(Duplex::Full)
            .with_autoneg(Some(false))
    }

    #[test]
    fn expanding_a_port_adds_its_detail_column() {
        let mut table = PortTable::new();
        let rows: Vec<PortRecord> =
            serde_json::from_str(r#"[[1,"eth0",null,"up",1000,"full",0]]"#).expect("decode");
        table.render_rows(rows);
        let index = PortIndex::from(1);

        assert!(table.begin_expand(&index).expect("row"));
        table
            .merge_details(&index, &[DetailCell::new("VLAN", "100", None)])
            .expect("merge");

        let names = table
            .columns()
            .into_iter()
            .map(|column| column.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["State", "Port", "Alias", "VLAN"]);
        let row = table.row(&index).expect("row");
        assert_eq!(
            row.cell(&ColumnKey::dynamic("VLAN")),
            CellContent::Html("100".to_string())
        );
        assert!(row.is_expanded());
        assert!(!row.is_loading());
    }

    #[test]
    fn merging_twice_overwrites_the_value() {
        let mut table = PortTable::new();
        table.render_rows(vec![eth0()]);
        let index = PortIndex::from(1);

        table
            .merge_details(&index, &[DetailCell::new("Foo", "A", None)])
            .expect("merge");
        table
            .merge_details(&index, &[DetailCell::new("Foo", "B", None)])
            .expect("merge");

        assert_eq!(table.registry().dynamic_len(), 1);
        assert_eq!(
            table.row(&index).expect("row").detail("Foo"),
            Some(&DetailValue {
                html: "B".to_string(),
                sort_key: None
            })
        );
    }

    #[test]
    fn null_alias_renders_as_empty_text() {
        let mut table = PortTable::new();
        table.render_rows(vec![eth0()]);
        let row = &table.rows()[0];

        assert_eq!(
            row.cell(&ColumnKey::Fixed(FixedColumn::Alias)),
            CellContent::Text(String::new())
        );
        assert_eq!(
            row.cell(&ColumnKey::Fixed(FixedColumn::State)),
            CellContent::Icon {
                resource: "static/port-up-1000-full-false.png".to_string(),
                alt: "up 1000 full".to_string(),
            }
        );
    }

    #[test]
    fn render_rows_keeps_input_order_and_drops_duplicates() {
        let mut table = PortTable::new();
        table.render_rows(vec![
            PortRecord::new(3, "eth2"),
            PortRecord::new(1, "eth0"),
            PortRecord::new(3, "duplicate"),
        ]);

        let names = table
            .rows()
            .iter()
            .map(|row| row.record().display_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["eth2", "eth0"]);
    }

    #[test]
    fn render_rows_resets_dynamic_columns() {
        let mut table = PortTable::new();
        table.render_rows(vec![eth0()]);
        table
            .merge_details(&PortIndex::from(1), &[DetailCell::new("VLAN", "100", None)])
            .expect("merge");

        table.render_rows(vec![eth0()]);
        assert_eq!(table.registry().dynamic_len(), 0);
        assert_eq!(table.rows()[0].detail("VLAN"), None);
    }

    #[test]
    fn collapse_empties_cells_but_keeps_columns() {
        let mut table = PortTable::new();
        table.render_rows(vec![eth0(), PortRecord::new(2, "eth1")]);
        let index = PortIndex::from(1);
        table
            .merge_details(&index, &[DetailCell::new("VLAN", "100", None)])
            .expect("merge");

        table.collapse_details(&index).expect("collapse");

        assert_eq!(table.registry().position_of("VLAN"), Some(3));
        assert_eq!(
            table.row(&index).expect("row").cell(&ColumnKey::dynamic("VLAN")),
            CellContent::Empty
        );
        assert_eq!(
            table.collapsed_indexes(),
            vec![PortIndex::from(1), PortIndex::from(2)]
        );
    }

    #[test]
    fn hidden_columns_are_skipped_in_visible_cells() {
        let mut table = PortTable::new();
        table.render_rows(vec![eth0()]);
        let index = PortIndex::from(1);
        table
            .merge_details(
                &index,
                &[
                    DetailCell::new("VLAN", "100", None),
                    DetailCell::new("FDB", "aa:bb", None),
                ],
            )
            .expect("merge");
        assert!(table.set_column_visible("FDB", false));

        let row = table.row(&index).expect("row");
        let cells = table.visible_cells(row);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[3], CellContent::Html("100".to_string()));
        assert_eq!(
            row.detail("FDB").map(|value| value.html.as_str()),
            Some("aa:bb")
        );
    }

    #[test]
    fn unknown_row_is_reported() {
        let mut table = PortTable::new();
        let missing = PortIndex::from(42);

        assert_eq!(
            table.merge_details(&missing, &[]),
            Err(TableError::RowNotFound(missing.clone()))
        );
        assert_eq!(
            table.begin_expand(&missing),
            Err(TableError::RowNotFound(missing))
        );
    }

    #[test]
    fn outstanding_request_is_not_duplicated() {
        let mut table = PortTable::new();
        table.render_rows(vec![eth0()]);
        let index = PortIndex::from(1);

        assert_eq!(table.begin_expand(&index), Ok(true));
        assert_eq!(table.begin_expand(&index), Ok(false));
        table.finish_loading(&index).expect("row");
        assert_eq!(table.begin_expand(&index), Ok(true));
    }
}
