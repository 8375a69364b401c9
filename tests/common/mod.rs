use notation_core::MoveInput;

/// Build a board encoding from `(file, rank, piece)` placements in the engine
/// frame. `side` is the side-to-move field (`w` or `b`).
pub fn encode(width: u32, height: u32, pieces: &[(u32, u32, &str)], side: &str) -> String {
    let mut rows = Vec::new();
    for rank in 1..=height {
        let mut row = String::new();
        let mut empty = 0;
        for file in (1..=width).rev() {
            match pieces.iter().find(|(f, r, _)| *f == file && *r == rank) {
                Some((_, _, piece)) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push_str(piece);
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            row.push_str(&empty.to_string());
        }
        rows.push(row);
    }
    format!("{} {}", rows.join("/"), side)
}

/// A move bundle with both positions.
pub fn bundle(uci: &str, prev_fen: &str, fen: &str) -> MoveInput {
    MoveInput::new(uci, fen).with_prev_fen(prev_fen)
}
