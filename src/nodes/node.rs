//! Node types and core node functionality

use super::line::{ColumnIndex, Data, Line, LineIndex};
use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Position of a node in the graph; also its only identity
pub type NodeIndex = usize;

/// A visual node: a titled box on the canvas holding a grid of data cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NodeShape")]
pub struct Node {
    pub title: String,
    #[serde(with = "pos2_serde")]
    pub position: Pos2,
    pub lines: Vec<Line>,
    /// Column count every line is kept in step with
    #[serde(skip_serializing)]
    columns: usize,
}

/// Serialized form of a node; the column count is derived from its lines
#[derive(Deserialize)]
struct NodeShape {
    title: String,
    #[serde(with = "pos2_serde")]
    position: Pos2,
    #[serde(default)]
    lines: Vec<Line>,
}

impl From<NodeShape> for Node {
    fn from(shape: NodeShape) -> Self {
        let mut node = Node::new(shape.title, shape.position);
        node.set_lines(shape.lines);
        node
    }
}

impl Node {
    /// Creates an empty node with no lines or columns
    pub fn new(title: impl Into<String>, position: Pos2) -> Self {
        Self {
            title: title.into(),
            position,
            lines: Vec::new(),
            columns: 0,
        }
    }

    /// Appends a line with one empty cell per current column
    pub fn add_line(&mut self) -> &mut Self {
        self.lines.push(Line::new(self.columns));
        self
    }

    /// Appends an empty cell to every line
    pub fn add_column(&mut self) -> &mut Self {
        self.columns += 1;
        for line in &mut self.lines {
            line.push_empty_cell();
        }
        self
    }

    /// Replaces all lines, taking the column count from the widest one.
    /// Shorter lines are padded with empty cells.
    pub fn set_lines(&mut self, mut lines: Vec<Line>) {
        self.columns = lines.iter().map(Line::len).max().unwrap_or(0);
        for line in &mut lines {
            while line.len() < self.columns {
                line.push_empty_cell();
            }
        }
        self.lines = lines;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn move_to_position(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line: LineIndex) -> Option<&Line> {
        self.lines.get(line)
    }

    pub fn cell(&self, line: LineIndex, column: ColumnIndex) -> Option<&Data> {
        self.lines.get(line).and_then(|l| l.cell(column))
    }

    pub fn cell_mut(&mut self, line: LineIndex, column: ColumnIndex) -> Option<&mut Data> {
        self.lines.get_mut(line).and_then(|l| l.cell_mut(column))
    }

    /// Builds an independent copy with a suffixed title, shifted by `offset`.
    ///
    /// Lines and cells are cloned by value, so edits to the copy never reach
    /// this node.
    pub fn duplicate(&self, title_suffix: &str, offset: Vec2) -> Node {
        let mut copy = Node::new(format!("{}{}", self.title, title_suffix), self.position + offset);
        copy.set_lines(self.lines.clone());
        // Keep column count even when the source has no lines yet
        copy.columns = self.columns;
        copy
    }
}

/// Serde helper for `Pos2`, stored as `[x, y]`
pub(crate) mod pos2_serde {
    use egui::Pos2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(pos: &Pos2, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [pos.x, pos.y].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pos2, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[f32; 2]>::deserialize(deserializer)?;
        Ok(Pos2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_track_column_count() {
        let mut node = Node::new("grid", Pos2::ZERO);
        node.add_line();
        node.add_column().add_column();
        node.add_line();

        assert_eq!(node.line_count(), 2);
        assert_eq!(node.column_count(), 2);
        assert!(node.lines.iter().all(|line| line.len() == 2));
    }

    #[test]
    fn test_column_before_any_line() {
        let mut node = Node::new("grid", Pos2::ZERO);
        node.add_column();
        node.add_line();

        assert_eq!(node.lines[0].len(), 1);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut source = Node::new("Source", Pos2::new(10.0, 20.0));
        source.add_column();
        source.add_line();
        source.cell_mut(0, 0).unwrap().set_value("original");

        let mut copy = source.duplicate(" - copy", Vec2::splat(100.0));
        assert_eq!(copy.title, "Source - copy");
        assert_eq!(copy.position, Pos2::new(110.0, 120.0));
        assert_eq!(copy.lines, source.lines);

        copy.cell_mut(0, 0).unwrap().set_value("changed");
        assert_eq!(source.cell(0, 0).unwrap().value, "original");
    }

    #[test]
    fn test_duplicate_keeps_columns_without_lines() {
        let mut source = Node::new("Source", Pos2::ZERO);
        source.add_column().add_column();

        let mut copy = source.duplicate(" - copy", Vec2::ZERO);
        copy.add_line();
        assert_eq!(copy.lines[0].len(), 2);
    }

    #[test]
    fn test_position_serializes_as_pair() {
        let node = Node::new("n", Pos2::new(1.5, -2.0));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["position"], serde_json::json!([1.5, -2.0]));

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_column_count_not_serialized() {
        let mut node = Node::new("n", Pos2::ZERO);
        node.add_line().add_column();

        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("columns").is_none());

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back.column_count(), 1);
        assert_eq!(back, node);
    }

    #[test]
    fn test_deserialize_pads_uneven_lines() {
        let node: Node = serde_json::from_value(serde_json::json!({
            "title": "uneven",
            "position": [0.0, 0.0],
            "lines": [
                { "data": [{ "value": "a" }, { "value": "b" }, { "value": "c" }] },
                { "data": [{ "value": "d" }] },
            ],
        }))
        .unwrap();

        assert_eq!(node.column_count(), 3);
        assert!(node.lines.iter().all(|line| line.len() == 3));
        assert_eq!(node.cell(1, 0).unwrap().value, "d");
        assert_eq!(node.cell(1, 2).unwrap().value, "");

        let mut node = node;
        node.add_line();
        assert_eq!(node.lines[2].len(), 3);
    }
}
