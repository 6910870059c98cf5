use crate::hex::cellset::CellSet;
use crate::hex::error::{HexError, Result};
use crate::hex::player::Player;

/// Game state: vertical/horizontal ownership sets plus the side to move.
#[derive(Clone, Copy, Debug)]
pub struct Board<const N: u32> {
    vert: CellSet<N>,
    horz: CellSet<N>,
    to_move: Player,
}

impl<const N: u32> Board<N> {
    /// An empty board, X to move.
    pub fn empty() -> Self {
        Board { vert: CellSet::empty(), horz: CellSet::empty(), to_move: Player::X }
    }

    /// Builds a board from two disjoint ownership sets. `to_move`, if not
    /// given, is derived from cell counts: `|vert| > |horz|` means O is
    /// due to move (X always moves first), else X.
    pub fn from_cellsets(vert: CellSet<N>, horz: CellSet<N>, to_move: Option<Player>) -> Result<Self> {
        if (vert & horz).any() {
            return Err(HexError::IllegalArgument {
                reason: "vertical and horizontal cell sets overlap".into(),
            });
        }
        let to_move = to_move.unwrap_or_else(|| {
            if vert.count() > horz.count() { Player::O } else { Player::X }
        });
        Ok(Board { vert, horz, to_move })
    }

    pub fn player(&self) -> Player {
        self.to_move
    }

    pub fn opponent(&self) -> Player {
        self.to_move.opponent()
    }

    /// Sets the side to move. `Player` is already a closed `{X, O}` enum,
    /// so this is total (a bad player value is rejected earlier, at
    /// `Player::from_char`).
    pub fn set_player(&mut self, p: Player) -> &mut Self {
        self.to_move = p;
        self
    }

    /// Plays cell `i` for the side to move, returning the resulting board.
    /// Fails with `IllegalArgument` if `i` is out of range, `CellOccupied`
    /// if `i` is already owned by either side.
    pub fn play(&self, i: u32) -> Result<Self> {
        let side = CellSet::<N>::board_side();
        if i >= side * side {
            return Err(HexError::IllegalArgument {
                reason: format!("cell {i} is out of range for a board of side {side}"),
            });
        }
        if self.vert.test(i) || self.horz.test(i) {
            return Err(HexError::CellOccupied { cell: i });
        }

        let mut next = *self;
        match self.to_move {
            Player::X => next.vert.set(i)?,
            Player::O => next.horz.set(i)?,
        };
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    pub fn vertical_cells(&self) -> CellSet<N> {
        self.vert
    }

    pub fn horizontal_cells(&self) -> CellSet<N> {
        self.horz
    }

    pub fn occupied(&self) -> CellSet<N> {
        self.vert | self.horz
    }

    pub fn empty_cells(&self) -> CellSet<N> {
        CellSet::universe() - self.occupied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::sizes::Board3;

    #[test]
    fn empty_board_has_all_cells_free_and_x_to_move() {
        let b = Board3::empty();
        assert_eq!(b.player(), Player::X);
        assert_eq!(b.empty_cells().count(), 9);
        assert!(b.occupied().none());
    }

    #[test]
    fn play_toggles_side_and_occupies_cell() {
        let b = Board3::empty();
        let b2 = b.play(4).unwrap();
        assert!(b2.vertical_cells().test(4));
        assert_eq!(b2.player(), Player::O);
        assert_eq!(b2.empty_cells().count(), 8);
    }

    #[test]
    fn play_rejects_occupied_cell() {
        let b = Board3::empty().play(4).unwrap();
        assert_eq!(b.play(4), Err(HexError::CellOccupied { cell: 4 }));
    }

    #[test]
    fn play_rejects_out_of_range_cell() {
        let b = Board3::empty();
        assert!(b.play(9).is_err());
    }

    #[test]
    fn from_cellsets_rejects_overlap() {
        let mut vert = crate::hex::sizes::CellSet3::empty();
        vert.set(0).unwrap();
        let mut horz = crate::hex::sizes::CellSet3::empty();
        horz.set(0).unwrap();
        assert!(Board3::from_cellsets(vert, horz, None).is_err());
    }

    #[test]
    fn from_cellsets_derives_to_move_from_counts() {
        let mut vert = crate::hex::sizes::CellSet3::empty();
        vert.set(0).unwrap();
        let horz = crate::hex::sizes::CellSet3::empty();
        let b = Board3::from_cellsets(vert, horz, None).unwrap();
        assert_eq!(b.player(), Player::O);
    }
}
