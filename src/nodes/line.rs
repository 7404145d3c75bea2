//! Grid rows and cells held by a node

use serde::{Deserialize, Serialize};

/// Index of a line within a node
pub type LineIndex = usize;

/// Index of a column within a line
pub type ColumnIndex = usize;

/// A single editable cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    pub value: String,
}

impl Data {
    /// Creates a cell holding the given value
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    /// Replaces the cell's value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// One row of a node's data grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub data: Vec<Data>,
}

impl Line {
    /// Creates a line with `columns` empty cells
    pub fn new(columns: usize) -> Self {
        Self {
            data: vec![Data::default(); columns],
        }
    }

    /// Creates a line from existing cells
    pub fn from_cells(data: Vec<Data>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends an empty cell at the end of the line
    pub fn push_empty_cell(&mut self) {
        self.data.push(Data::default());
    }

    pub fn cell(&self, column: ColumnIndex) -> Option<&Data> {
        self.data.get(column)
    }

    pub fn cell_mut(&mut self, column: ColumnIndex) -> Option<&mut Data> {
        self.data.get_mut(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_has_empty_cells() {
        let line = Line::new(3);
        assert_eq!(line.len(), 3);
        assert!(line.data.iter().all(|cell| cell.value.is_empty()));

        assert!(Line::new(0).is_empty());
    }

    #[test]
    fn test_cell_edit() {
        let mut line = Line::new(2);
        line.cell_mut(1).unwrap().set_value("x");

        assert_eq!(line.cell(0).unwrap().value, "");
        assert_eq!(line.cell(1).unwrap().value, "x");
        assert!(line.cell(2).is_none());
    }

    #[test]
    fn test_push_empty_cell() {
        let mut line = Line::from_cells(vec![Data::new("a")]);
        line.push_empty_cell();

        assert_eq!(line.data, vec![Data::new("a"), Data::default()]);
    }
}
