//! The forced-jump rule.

use crate::board::Board;
use crate::types::Player;

/// Moves `player` may choose from on `board`.
///
/// Captures are compulsory: when any jump exists only jumps are returned.
/// Otherwise the simple moves are returned. An empty result means `player`
/// cannot move.
pub fn available_moves<B: Board>(board: &B, player: Player) -> Vec<B::Move> {
    let jumps = board.jump_moves(player);
    if !jumps.is_empty() {
        return jumps;
    }

    board.simple_moves(player)
}
