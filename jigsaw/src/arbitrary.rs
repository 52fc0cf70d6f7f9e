use quickcheck::{Arbitrary, Gen};

use crate::{GridSpec, PieceId};

/// A random sequence of drag-and-drop interactions on a small board.
///
/// All referenced pieces and slots are in range, so every operation in the
/// sequence is expected to succeed.
#[derive(Clone, Debug)]
pub struct DropSequence {
    pub grid: GridSpec,
    pub ops: Vec<DropOp>,
}

#[derive(Clone, Copy, Debug)]
pub enum DropOp {
    Place { id: PieceId, slot_index: usize },
    Return { id: PieceId },
}

impl Arbitrary for DropSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let rows = u32::arbitrary(g) % 4 + 1;
        let columns = u32::arbitrary(g) % 4 + 1;
        let grid = GridSpec::new(rows, columns);

        let len = usize::arbitrary(g) % 64;
        let ops = (0..len)
            .map(|_| {
                let id = PieceId {
                    row: u32::arbitrary(g) % rows,
                    column: u32::arbitrary(g) % columns,
                };
                if bool::arbitrary(g) {
                    DropOp::Place {
                        id,
                        slot_index: usize::arbitrary(g) % grid.slot_count(),
                    }
                } else {
                    DropOp::Return { id }
                }
            })
            .collect();

        DropSequence { grid, ops }
    }
}
