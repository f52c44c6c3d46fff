//! Fixed board columns.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of one of the three fixed board columns.
///
/// Serialized with the wire names `todo`, `inprogress` and `done`, which also
/// double as droppable target ids for empty column space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// Declared column order, left to right.
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    /// Wire name used in persisted blobs and as a drop target id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Human label shown as the column heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Maps a wire name back to its column. Exact match only.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == value)
    }
}

impl Display for ColumnId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnId;

    #[test]
    fn parse_accepts_wire_names_only() {
        assert_eq!(ColumnId::parse("todo"), Some(ColumnId::Todo));
        assert_eq!(ColumnId::parse("inprogress"), Some(ColumnId::InProgress));
        assert_eq!(ColumnId::parse("done"), Some(ColumnId::Done));
        assert_eq!(ColumnId::parse("Done"), None);
        assert_eq!(ColumnId::parse("in_progress"), None);
    }

    #[test]
    fn labels_follow_declared_order() {
        let labels: Vec<_> = ColumnId::ALL.iter().map(|column| column.label()).collect();
        assert_eq!(labels, vec!["Todo", "In Progress", "Done"]);
    }
}
