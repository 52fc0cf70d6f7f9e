use crate::PieceId;

/// The error type for [`BoardTracker::generate()`](crate::BoardTracker::generate).
#[derive(Debug)]
pub enum GenerateError {
    /// A board needs at least one row and one column.
    InvalidGrid { rows: u32, columns: u32 },
    /// The piece source could not cut the backing image.
    Source(anyhow::Error),
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Source(err) => Some(err.as_ref()),
            GenerateError::InvalidGrid { .. } => None,
        }
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::InvalidGrid { rows, columns } => write!(
                f,
                "Cannot cut a {}x{} board, both dimensions must be at least 1",
                rows, columns
            ),
            GenerateError::Source(_) => write!(f, "The piece source failed to cut the board"),
        }
    }
}

/// The error type for placement operations referencing a piece or slot
/// that is not part of the current generation.
///
/// A rejected operation leaves the tracker untouched.
#[derive(Debug, PartialEq, Eq)]
pub enum UnknownEntity {
    Piece { id: PieceId },
    Slot { index: usize, slot_count: usize },
}

impl std::error::Error for UnknownEntity {}

impl std::fmt::Display for UnknownEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnknownEntity::Piece { id } => {
                write!(f, "Piece {} is not part of the current board", id)
            }
            UnknownEntity::Slot { index, slot_count } => write!(
                f,
                "Slot {} does not exist, the board has slots 0..{}",
                index, slot_count
            ),
        }
    }
}
