use crate::hex::board::Board;
use crate::hex::cellset::CellSet;

macro_rules! board_size {
    ($cellset_name:ident, $board_name:ident, $s:expr) => {
        pub type $cellset_name = CellSet<{ $s * $s }>;
        pub type $board_name = Board<{ $s * $s }>;
    };
}

board_size!(CellSet1, Board1, 1);
board_size!(CellSet2, Board2, 2);
board_size!(CellSet3, Board3, 3);
board_size!(CellSet4, Board4, 4);
board_size!(CellSet5, Board5, 5);
board_size!(CellSet6, Board6, 6);
board_size!(CellSet7, Board7, 7);
board_size!(CellSet8, Board8, 8);
board_size!(CellSet9, Board9, 9);
board_size!(CellSet10, Board10, 10);
board_size!(CellSet11, Board11, 11);
board_size!(CellSet12, Board12, 12);
board_size!(CellSet13, Board13, 13);
