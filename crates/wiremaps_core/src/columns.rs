//! Dynamic column registry for the ports table.
//!
//! The first [`FIXED_COLUMN_COUNT`] positions are the state/name/alias columns. Dynamic columns
//! are discovered lazily from port-detail responses and kept lexicographically ordered by name, so
//! their table position is `FIXED_COLUMN_COUNT + rank`.

/// Number of fixed leading columns.
pub const FIXED_COLUMN_COUNT: usize = 3;

/// Fixed leading columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedColumn {
    /// Status icon.
    State,
    /// Port name.
    Name,
    /// Port alias.
    Alias,
}

impl FixedColumn {
    /// All fixed columns in display order.
    pub const ALL: [Self; FIXED_COLUMN_COUNT] = [Self::State, Self::Name, Self::Alias];

    /// Header label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::State => "State",
            Self::Name => "Port",
            Self::Alias => "Alias",
        }
    }

    /// Table position.
    pub const fn position(self) -> usize {
        match self {
            Self::State => 0,
            Self::Name => 1,
            Self::Alias => 2,
        }
    }
}

/// Identifies a column independently of its current position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    /// One of the fixed columns.
    Fixed(FixedColumn),
    /// A dynamic column, by name.
    Dynamic(String),
}

impl ColumnKey {
    /// Convenience constructor for dynamic columns.
    pub fn dynamic(name: impl Into<String>) -> Self {
        Self::Dynamic(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DynamicColumn {
    name: String,
    visible: bool,
}

/// Projection of one column for header rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column identity.
    pub key: ColumnKey,
    /// Header text.
    pub name: String,
    /// Position in the table.
    pub position: usize,
    /// Whether the operator has the column shown.
    pub visible: bool,
}

/// Ordered set of dynamic columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRegistry {
    dynamic: Vec<DynamicColumn>,
}

impl ColumnRegistry {
    /// Empty registry (fixed columns only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position of `name`, inserting it at its sorted place first if needed.
    ///
    /// Idempotent: a second call with the same name returns the same position and leaves the
    /// registry unchanged.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        let rank = match self.search(name) {
            Ok(rank) => rank,
            Err(rank) => {
                self.dynamic.insert(
                    rank,
                    DynamicColumn {
                        name: name.to_string(),
                        visible: true,
                    },
                );
                rank
            }
        };
        FIXED_COLUMN_COUNT + rank
    }

    /// Current position of `name`, if registered.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.search(name).ok().map(|rank| FIXED_COLUMN_COUNT + rank)
    }

    /// Number of dynamic columns.
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }

    /// Total column count including the fixed ones.
    pub fn len(&self) -> usize {
        FIXED_COLUMN_COUNT + self.dynamic.len()
    }

    /// Always `false`; the fixed columns are permanent.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Dynamic column names in position order.
    pub fn dynamic_names(&self) -> impl Iterator<Item = &str> {
        self.dynamic.iter().map(|column| column.name.as_str())
    }

    /// Every column in position order.
    pub fn columns(&self) -> Vec<Column> {
        let fixed = FixedColumn::ALL.into_iter().map(|column| Column {
            key: ColumnKey::Fixed(column),
            name: column.label().to_string(),
            position: column.position(),
            visible: true,
        });
        let dynamic = self
            .dynamic
            .iter()
            .enumerate()
            .map(|(rank, column)| Column {
                key: ColumnKey::Dynamic(column.name.clone()),
                name: column.name.clone(),
                position: FIXED_COLUMN_COUNT + rank,
                visible: column.visible,
            });
        fixed.chain(dynamic).collect()
    }

    /// Drops every dynamic column.
    pub fn clear(&mut self) {
        self.dynamic.clear();
    }

    /// Shows or hides a dynamic column. Returns `false` when the column is unknown.
    pub fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.search(name) {
            Ok(rank) => {
                self.dynamic[rank].visible = visible;
                true
            }
            Err(_) => false,
        }
    }

    fn search(&self, name: &str) -> Result<usize, usize> {
        self.dynamic
            .binary_search_by(|column| column.name.as_str().cmp(name))
    }
}
