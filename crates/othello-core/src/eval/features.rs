//! The six differential signals that make up a score.
//!
//! Every function returns `weight[band] * (mine - theirs)` from `player`'s
//! point of view and skips its work entirely when the band's weight is zero.

use super::{
    CORNER_WEIGHT, EDGE_WEIGHT, MOBILITY_WEIGHT, PIECE_COUNT_WEIGHT, POTENTIAL_MOBILITY_WEIGHT,
    XSQUARE_WEIGHT,
};
use crate::board::Board;
use crate::disc::Disc;
use crate::square::Square;
use crate::types::Score;

/// The four corners.
pub const CORNERS: [Square; 4] = [
    Square::new(0, 0),
    Square::new(0, 7),
    Square::new(7, 0),
    Square::new(7, 7),
];

/// Each X-square paired with the corner it touches diagonally.
pub const X_SQUARES: [(Square, Square); 4] = [
    (Square::new(1, 1), Square::new(0, 0)),
    (Square::new(1, 6), Square::new(0, 7)),
    (Square::new(6, 1), Square::new(7, 0)),
    (Square::new(6, 6), Square::new(7, 7)),
];

/// Returns `true` for the 24 non-corner squares on the outer ring.
#[inline]
pub fn is_edge(sq: Square) -> bool {
    let on_ring = sq.row() == 0 || sq.row() == 7 || sq.col() == 0 || sq.col() == 7;
    on_ring && !sq.is_corner()
}

/// Tallies `(mine, theirs)` over `squares`.
#[inline]
fn tally(
    board: &Board,
    squares: impl Iterator<Item = Square>,
    player: Disc,
    opponent: Disc,
) -> (Score, Score) {
    squares.fold((0, 0), |(mine, theirs), sq| match board.get_disc_at(sq) {
        d if d == player => (mine + 1, theirs),
        d if d == opponent => (mine, theirs + 1),
        _ => (mine, theirs),
    })
}

pub fn piece_differential(delta: &Board, band: usize, player: Disc, opponent: Disc) -> Score {
    let weight = PIECE_COUNT_WEIGHT[band];
    if weight == 0 {
        return 0;
    }
    let count = delta.count_stones();
    weight * (count.of(player) as Score - count.of(opponent) as Score)
}

pub fn corner_differential(delta: &Board, band: usize, player: Disc, opponent: Disc) -> Score {
    let weight = CORNER_WEIGHT[band];
    if weight == 0 {
        return 0;
    }
    let (mine, theirs) = tally(delta, CORNERS.into_iter(), player, opponent);
    weight * (mine - theirs)
}

pub fn edge_differential(delta: &Board, band: usize, player: Disc, opponent: Disc) -> Score {
    let weight = EDGE_WEIGHT[band];
    if weight == 0 {
        return 0;
    }
    let (mine, theirs) = tally(delta, Square::iter().filter(|&sq| is_edge(sq)), player, opponent);
    weight * (mine - theirs)
}

/// Penalises X-squares newly occupied while their corner is still empty.
///
/// A cell counts when it is set on `delta`, was empty on `start` and the
/// matching corner is empty on `board`. It is attributed to whoever holds it
/// on `board`.
pub fn xsquare_differential(
    start: &Board,
    board: &Board,
    delta: &Board,
    band: usize,
    player: Disc,
    opponent: Disc,
) -> Score {
    let weight = XSQUARE_WEIGHT[band];
    if weight == 0 {
        return 0;
    }
    let fresh = X_SQUARES
        .into_iter()
        .filter(|&(x, corner)| {
            !delta.is_square_empty(x) && start.is_square_empty(x) && board.is_square_empty(corner)
        })
        .map(|(x, _)| x);
    let (mine, theirs) = tally(board, fresh, player, opponent);
    weight * (mine - theirs)
}

/// Rewards growing the opponent's frontier and shrinking one's own.
pub fn potential_mobility_differential(
    start: &Board,
    board: &Board,
    band: usize,
    player: Disc,
    opponent: Disc,
) -> Score {
    let weight = POTENTIAL_MOBILITY_WEIGHT[band];
    if weight == 0 {
        return 0;
    }
    let frontier_change =
        |color: Disc| board.adjacency_count(color) as Score - start.adjacency_count(color) as Score;
    let mine = frontier_change(opponent);
    let theirs = frontier_change(player);
    weight * (mine - theirs)
}

pub fn mobility_differential(
    start: &Board,
    board: &Board,
    band: usize,
    player: Disc,
    opponent: Disc,
) -> Score {
    let weight = MOBILITY_WEIGHT[band];
    if weight == 0 {
        return 0;
    }
    let mobility_change = |color: Disc| {
        board.legal_moves(color).count() as Score - start.legal_moves(color).count() as Score
    };
    weight * (mobility_change(player) - mobility_change(opponent))
}
