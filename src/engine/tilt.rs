//! The single slide-and-merge algorithm. Every direction runs it against a
//! [`BoardView`] oriented so that the direction of travel is "up".

use super::board::BoardView;

/// What a tilt did to the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TiltOutcome {
    /// True if any tile moved or merged.
    pub changed: bool,
    /// Sum of the values of tiles created by merges.
    pub score_delta: u64,
}

/// Slide every column of `view` toward increasing row, merging equal tiles.
///
/// A tile created by a merge is not merged again during the same tilt. With
/// three equal tiles in a line the two leading ones merge and the trailing one
/// closes up behind the result. Tiles of `Tile::MAX_VALUE` only slide.
pub(crate) fn tilt_up(view: &mut BoardView<'_>) -> TiltOutcome {
    let mut outcome = TiltOutcome::default();
    let size = view.size();
    if size < 2 {
        return outcome;
    }
    let top = size - 1;
    let mut merged = vec![false; size];
    for col in 0..size {
        merged.fill(false);
        for row in (0..top).rev() {
            let Some(tile) = view.tile(col, row) else { continue };

            // nearest occupied cell above, or the top edge
            let mut pointer = row + 1;
            while pointer < top && view.tile(col, pointer).is_none() {
                pointer += 1;
            }

            match view.tile(col, pointer) {
                None => {
                    view.move_tile(col, pointer, tile);
                    outcome.changed = true;
                }
                Some(dest) if dest.value() == tile.value() && tile.can_merge() && !merged[pointer] => {
                    view.move_tile(col, pointer, tile);
                    merged[pointer] = true;
                    let value = u64::from(tile.value()) * 2;
                    log::trace!("merge into ({col}, {pointer}) of {} view: {value}", view.side());
                    outcome.score_delta += value;
                    outcome.changed = true;
                }
                Some(_) if pointer > row + 1 => {
                    view.move_tile(col, pointer - 1, tile);
                    outcome.changed = true;
                }
                Some(_) => {}
            }
        }
    }
    outcome
}
