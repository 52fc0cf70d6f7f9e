use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed shape of a puzzle board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
}

impl GridSpec {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// How many pieces a board of this shape is cut into.
    pub fn piece_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// How many slots the board offers. Always equal to the piece count.
    pub fn slot_count(&self) -> usize {
        self.piece_count()
    }

    /// All cell identities in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = PieceId> + '_ {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| PieceId { row, column }))
    }

    pub fn contains(&self, id: PieceId) -> bool {
        id.row < self.rows && id.column < self.columns
    }
}

/// Identity of one puzzle piece: the grid cell it was cut from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId {
    pub row: u32,
    pub column: u32,
}

impl PieceId {
    /// The slot this piece must occupy to count as correctly placed.
    pub fn correct_slot(&self, grid: GridSpec) -> usize {
        self.row as usize * grid.columns as usize + self.column as usize
    }
}

/// Pieces are addressed as `"<row>-<column>"`, which is also the identity
/// string a drag-and-drop surface attaches to the draggable element.
impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

/// The error type for the [`FromStr`] instance of [`PieceId`].
#[derive(Clone, Copy, Debug)]
pub enum PieceIdFromStrErr {
    MissingSeparator,
    InvalidRow,
    InvalidColumn,
}

impl FromStr for PieceId {
    type Err = PieceIdFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s.split_once('-').ok_or(PieceIdFromStrErr::MissingSeparator)?;
        let row = row.parse().map_err(|_| PieceIdFromStrErr::InvalidRow)?;
        let column = column.parse().map_err(|_| PieceIdFromStrErr::InvalidColumn)?;
        Ok(PieceId { row, column })
    }
}

/// Where a piece currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceLocation {
    /// Loose on the table, not counted towards completion.
    OnTable,
    /// Occupying the slot with this index.
    InSlot(usize),
}

/// One puzzle piece of the current generation.
///
/// The correct slot index is fixed when the board is cut; only the location
/// changes afterwards. Correctness is derived from the location rather than
/// stored, so the two can never disagree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub correct_slot: usize,
    pub location: PieceLocation,
}

impl Piece {
    pub fn is_correct(&self) -> bool {
        self.location == PieceLocation::InSlot(self.correct_slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_slots_cover_the_board_once() {
        let grid = GridSpec::new(4, 4);
        let mut seen = vec![false; grid.slot_count()];
        for id in grid.cells() {
            let slot = id.correct_slot(grid);
            assert!(!seen[slot], "slot {} assigned twice", slot);
            seen[slot] = true;
        }
        assert!(seen.into_iter().all(|hit| hit));
    }

    #[test]
    fn piece_id_round_trips_through_display() {
        let id = PieceId { row: 2, column: 3 };
        assert_eq!(id.to_string(), "2-3");
        assert_eq!("2-3".parse::<PieceId>().unwrap(), id);
    }

    #[test]
    fn piece_id_parse_rejects_garbage() {
        assert!("23".parse::<PieceId>().is_err());
        assert!("a-3".parse::<PieceId>().is_err());
        assert!("2-".parse::<PieceId>().is_err());
    }
}
