use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::nodes::{ColumnIndex, LineIndex, NodeIndex};

/// A mutation addressed something that does not exist. The state is left
/// untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NodeOutOfRange {
        index: NodeIndex,
        len: usize,
    },
    LineOutOfRange {
        node: NodeIndex,
        line: LineIndex,
        len: usize,
    },
    ColumnOutOfRange {
        node: NodeIndex,
        line: LineIndex,
        column: ColumnIndex,
        len: usize,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodeOutOfRange { index, len } => {
                write!(f, "node index {index} out of range (graph has {len} nodes)")
            }
            Self::LineOutOfRange { node, line, len } => {
                write!(f, "line {line} out of range for node {node} ({len} lines)")
            }
            Self::ColumnOutOfRange {
                node,
                line,
                column,
                len,
            } => write!(
                f,
                "column {column} out of range for node {node} line {line} ({len} columns)"
            ),
        }
    }
}

impl Error for StoreError {}
