use crate::BoardTracker;

/// Renders the slot grid with box-drawing characters.
///
/// Occupied slots show the piece id, marked with `+` when the piece sits in
/// its correct slot and `x` otherwise.
pub fn visualize_board(tracker: &BoardTracker) -> String {
    let grid = tracker.grid();
    const CELL_WIDTH: usize = 8;

    let mut result = String::from("╭");
    for _ in 0..grid.columns {
        result += &"─".repeat(CELL_WIDTH);
    }
    result += "╮\n";

    for row in 0..grid.rows {
        result += "│";
        for column in 0..grid.columns {
            let slot_index = (row * grid.columns + column) as usize;
            match tracker.slots()[slot_index] {
                Some(id) => {
                    let mark = match tracker.piece(id) {
                        Some(piece) if piece.is_correct() => '+',
                        _ => 'x',
                    };
                    result += &format!("{:>6} {}", id.to_string(), mark);
                }
                None => result += &" ".repeat(CELL_WIDTH),
            }
        }
        result += "│\n";
    }

    result += "╰";
    for _ in 0..grid.columns {
        result += &"─".repeat(CELL_WIDTH);
    }
    result += "╯";
    result
}
