/// A request to drop a disc into a column.
///
/// The column is not checked on construction; the grid rejects it at
/// placement time if it is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    column: usize,
}

impl Move {
    pub const fn new(column: usize) -> Self {
        Self { column }
    }

    /// Target column.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<usize> for Move {
    fn from(column: usize) -> Self {
        Move::new(column)
    }
}
