use crate::hex::board::Board;
use crate::hex::cellset::CellSet;
use crate::hex::player::{Player, Winner};

fn edges<const N: u32>(side: Player) -> (CellSet<N>, CellSet<N>) {
    match side {
        Player::X => (CellSet::top(), CellSet::bottom()),
        Player::O => (CellSet::left(), CellSet::right()),
    }
}

fn owned<const N: u32>(board: &Board<N>, side: Player) -> CellSet<N> {
    match side {
        Player::X => board.vertical_cells(),
        Player::O => board.horizontal_cells(),
    }
}

/// Whether `side` has an actual edge-to-edge connection on `board`.
pub fn is_connected<const N: u32>(board: &Board<N>, side: Player) -> bool {
    if CellSet::<N>::board_side() == 1 {
        return owned(board, side).any();
    }

    let own = owned(board, side);
    let (e_start, e_stop) = edges::<N>(side);
    let mut start = own & e_start;
    let mut stop = own & e_stop;
    if start.none() || stop.none() {
        return false;
    }

    loop {
        let start_next = (start.neighbors() & own) | start;
        let stop_next = (stop.neighbors() & own) | stop;
        if (start_next & stop_next).any() {
            return true;
        }
        if start_next == start && stop_next == stop {
            return false;
        }
        start = start_next;
        stop = stop_next;
    }
}

/// Whether `side` has a virtual connection: the same bilateral flood, but
/// on stagnation the two frontiers are checked for a shared pair of vacant
/// common neighbours (a Hex bridge) before giving up.
pub fn is_virtually_connected<const N: u32>(board: &Board<N>, side: Player) -> bool {
    if CellSet::<N>::board_side() == 1 {
        return owned(board, side).any();
    }

    let own = owned(board, side);
    let empty = board.empty_cells();
    let (e_start, e_stop) = edges::<N>(side);
    let mut start = own & e_start;
    let mut stop = own & e_stop;
    if start.none() || stop.none() {
        return false;
    }

    loop {
        let start_next = (start.neighbors() & own) | start;
        let stop_next = (stop.neighbors() & own) | stop;
        if (start_next & stop_next).any() {
            return true;
        }
        if start_next == start && stop_next == stop {
            let bridge = start.neighbors() & stop.neighbors() & empty;
            return bridge.count() >= 2;
        }
        start = start_next;
        stop = stop_next;
    }
}

/// Decides which side (if either) has actually connected their edges.
/// `test_for`: restricts the query to one side when `Some`; evaluates
/// both when `None`.
pub fn winner<const N: u32>(board: &Board<N>, test_for: Option<Player>) -> Winner {
    let check_x = test_for.is_none_or(|p| p == Player::X);
    let check_o = test_for.is_none_or(|p| p == Player::O);
    if check_x && is_connected(board, Player::X) {
        return Winner::X;
    }
    if check_o && is_connected(board, Player::O) {
        return Winner::O;
    }
    Winner::Unknown
}

/// As `winner`, but for virtual (bridge-inclusive) connection.
pub fn virtual_winner<const N: u32>(board: &Board<N>, test_for: Option<Player>) -> Winner {
    let check_x = test_for.is_none_or(|p| p == Player::X);
    let check_o = test_for.is_none_or(|p| p == Player::O);
    if check_x && is_virtually_connected(board, Player::X) {
        return Winner::X;
    }
    if check_o && is_virtually_connected(board, Player::O) {
        return Winner::O;
    }
    Winner::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::sizes::{Board1, Board7, Board8};

    #[test]
    fn board1_connection_iff_cell_owned() {
        let empty = Board1::empty();
        assert_eq!(winner(&empty, None), Winner::Unknown);

        let played = empty.play(0).unwrap();
        assert_eq!(winner(&played, None), Winner::X);
    }

    #[test]
    fn horizontal_row_connects_left_to_right_on_side_8() {
        // Every cell of row 0 owned by O.
        let mut horz = crate::hex::sizes::CellSet8::empty();
        for c in 0..8u32 {
            horz.set(c).unwrap();
        }
        let b = Board8::from_cellsets(crate::hex::sizes::CellSet8::empty(), horz, None).unwrap();
        assert_eq!(winner(&b, None), Winner::O);
        assert_eq!(virtual_winner(&b, None), Winner::O);
    }

    #[test]
    fn middle_row_alone_does_not_connect_top_to_bottom_on_side_7() {
        let mut vert = crate::hex::sizes::CellSet7::empty();
        for c in 0..7u32 {
            vert.set(3 * 7 + c).unwrap();
        }
        let b = Board7::from_cellsets(vert, crate::hex::sizes::CellSet7::empty(), Some(Player::X)).unwrap();
        assert_eq!(winner(&b, None), Winner::Unknown);
        assert_eq!(virtual_winner(&b, None), Winner::Unknown);
    }

    #[test]
    fn test_for_restricts_reported_side() {
        let mut horz = crate::hex::sizes::CellSet8::empty();
        for c in 0..8u32 {
            horz.set(c).unwrap();
        }
        let b = Board8::from_cellsets(crate::hex::sizes::CellSet8::empty(), horz, None).unwrap();
        assert_eq!(winner(&b, Some(Player::X)), Winner::Unknown);
        assert_eq!(winner(&b, Some(Player::O)), Winner::O);
    }
}
