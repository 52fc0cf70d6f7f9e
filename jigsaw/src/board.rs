use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::{
    GenerateError, GridSpec, Piece, PieceId, PieceLocation, PieceSource, UnknownEntity,
};

/// How far along the current generation is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub correct: usize,
    pub total: usize,
}

/// The effects of a single drop onto a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Whether the piece now sits in its correct slot.
    pub correct: bool,
    /// The previous occupant of the slot, now back on the table. The UI
    /// layer uses this to move the evicted sprite.
    pub evicted: Option<PieceId>,
}

/// A sprite paired with the identity of the piece it belongs to.
pub struct TablePiece<S> {
    pub id: PieceId,
    pub sprite: S,
}

/// A serializable view of the board for the UI layer and for recordings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub grid: GridSpec,
    pub slots: Vec<Option<PieceId>>,
    pub table: Vec<PieceId>,
    pub progress: Progress,
}

/// Tracks the assignment of puzzle pieces to board slots for one generation.
///
/// The tracker owns the full piece registry and the slot occupancy, mediates
/// every placement, and reports completion. It holds no sprite data; the
/// sprites cut by the [`PieceSource`] are handed back to the caller.
#[derive(Clone, Debug)]
pub struct BoardTracker {
    grid: GridSpec,
    /// One entry per piece of the current generation. This is the placement
    /// registry; correctness is derived from each piece's location.
    pieces: BTreeMap<PieceId, Piece>,
    /// Index = slot, value = occupant. Never holds a piece twice.
    slots: Vec<Option<PieceId>>,
    /// Loose pieces in display order. Evicted pieces go to the end.
    table: Vec<PieceId>,
    /// Whether the completion announcement already fired this generation.
    announced: bool,
}

impl BoardTracker {
    /// Cuts a new board and deals the pieces onto the table.
    ///
    /// Creates one piece per grid cell with correct slot index
    /// `row * columns + column`, and shuffles the initial table ordering.
    /// Returns the tracker together with the sprites in that shuffled order.
    pub fn generate<S: PieceSource>(
        grid: GridSpec,
        source: &mut S,
        rng: &mut StdRng,
    ) -> Result<(Self, Vec<TablePiece<S::Sprite>>), GenerateError> {
        if grid.rows == 0 || grid.columns == 0 {
            return Err(GenerateError::InvalidGrid {
                rows: grid.rows,
                columns: grid.columns,
            });
        }

        let sprites = source.slice(grid).map_err(GenerateError::Source)?;
        if sprites.len() != grid.piece_count() {
            return Err(GenerateError::Source(anyhow::anyhow!(
                "Piece source produced {} sprites for a board of {} cells",
                sprites.len(),
                grid.piece_count()
            )));
        }

        let mut dealt: Vec<TablePiece<S::Sprite>> = grid
            .cells()
            .zip(sprites)
            .map(|(id, sprite)| TablePiece { id, sprite })
            .collect();
        dealt.shuffle(rng);

        let pieces = grid
            .cells()
            .map(|id| {
                let piece = Piece {
                    id,
                    correct_slot: id.correct_slot(grid),
                    location: PieceLocation::OnTable,
                };
                (id, piece)
            })
            .collect();

        let tracker = Self {
            grid,
            pieces,
            slots: vec![None; grid.slot_count()],
            table: dealt.iter().map(|table_piece| table_piece.id).collect(),
            announced: false,
        };
        Ok((tracker, dealt))
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Slot occupancy, indexed by slot.
    pub fn slots(&self) -> &[Option<PieceId>] {
        &self.slots
    }

    /// The loose pieces in display order.
    pub fn table(&self) -> &[PieceId] {
        &self.table
    }

    /// Drops a piece onto a slot.
    ///
    /// A piece already occupying the target slot is evicted back to the
    /// table first; the drop never silently overwrites. If the dropped piece
    /// came from another slot, that slot is vacated. Rejected drops leave
    /// the board unchanged.
    pub fn place_in_slot(
        &mut self,
        id: PieceId,
        slot_index: usize,
    ) -> Result<Placement, UnknownEntity> {
        let correct_slot = match self.pieces.get(&id) {
            Some(piece) => piece.correct_slot,
            None => return Err(UnknownEntity::Piece { id }),
        };
        if slot_index >= self.slots.len() {
            return Err(UnknownEntity::Slot {
                index: slot_index,
                slot_count: self.slots.len(),
            });
        }
        let correct = slot_index == correct_slot;

        let mut evicted = None;
        if let Some(occupant) = self.slots[slot_index] {
            if occupant == id {
                // Dropping a piece onto the slot it already occupies.
                return Ok(Placement { correct, evicted });
            }
            self.settle_on_table(occupant);
            evicted = Some(occupant);
        }

        self.vacate(id);
        self.slots[slot_index] = Some(id);
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.location = PieceLocation::InSlot(slot_index);
        }
        Ok(Placement { correct, evicted })
    }

    /// Moves a piece back to the table. Idempotent for loose pieces.
    pub fn return_to_table(&mut self, id: PieceId) -> Result<(), UnknownEntity> {
        let location = match self.pieces.get(&id) {
            Some(piece) => piece.location,
            None => return Err(UnknownEntity::Piece { id }),
        };
        if let PieceLocation::InSlot(slot_index) = location {
            self.slots[slot_index] = None;
            self.settle_on_table(id);
        }
        Ok(())
    }

    /// True iff every piece sits in its correct slot.
    pub fn is_complete(&self) -> bool {
        self.pieces.values().all(Piece::is_correct)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            correct: self.pieces.values().filter(|piece| piece.is_correct()).count(),
            total: self.pieces.len(),
        }
    }

    /// Edge-triggered completion check.
    ///
    /// Returns true the first time it is called on a completed board, and
    /// false on every later call until a new board is generated. The caller
    /// polls this after every mutating operation and fires the user-visible
    /// notification on true.
    pub fn poll_completion(&mut self) -> bool {
        if self.announced || !self.is_complete() {
            return false;
        }
        self.announced = true;
        true
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid: self.grid,
            slots: self.slots.clone(),
            table: self.table.clone(),
            progress: self.progress(),
        }
    }

    // Marks a piece as loose and appends it to the table ordering.
    // The caller is responsible for clearing the slot it came from.
    fn settle_on_table(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.location = PieceLocation::OnTable;
        }
        self.table.push(id);
    }

    // Detaches a piece from wherever it currently is, in preparation for
    // putting it into a slot.
    fn vacate(&mut self, id: PieceId) {
        match self.pieces.get(&id).map(|piece| piece.location) {
            Some(PieceLocation::InSlot(slot_index)) => self.slots[slot_index] = None,
            Some(PieceLocation::OnTable) => self.table.retain(|&other| other != id),
            None => {}
        }
    }
}
