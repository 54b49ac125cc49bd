use crate::model::Column;

/// A named group of columns nested under a row.
///
/// Column names are unique within a super-column: inserting a column whose
/// name is already present replaces the existing column in place, keeping
/// the original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperColumn {
    name: String,
    columns: Vec<Column>,
}

impl SuperColumn {
    pub fn new(name: impl Into<String>) -> Self {
        SuperColumn {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Build a super-column from a column sequence, deduplicating by name
    /// (the last occurrence wins).
    pub fn with_columns(name: impl Into<String>, columns: Vec<Column>) -> Self {
        let mut sc = SuperColumn::new(name);
        for column in columns {
            sc.insert(column);
        }
        sc
    }

    pub fn insert(&mut self, column: Column) {
        match self.columns.iter_mut().find(|c| c.name() == column.name()) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
