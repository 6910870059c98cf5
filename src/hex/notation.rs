use crate::hex::board::Board;
use crate::hex::cellset::CellSet;
use crate::hex::error::{HexError, Result};
use crate::hex::player::Player;

/// Parses a glyph stream (whitespace ignored) into a `Board<N>`.
/// `X`/`O` own a cell for vertical/horizontal; `.`, `-`, and middle-dot
/// (`·`) mark it vacant. Any other character, or the wrong glyph count,
/// fails with `ParseError`. `to_move` is derived from cell counts, as
/// `Board::from_cellsets` does when not told otherwise.
pub fn parse_board<const N: u32>(content: &str) -> Result<Board<N>> {
    let side = CellSet::<N>::board_side();
    let expected = side * side;

    let glyphs: Vec<char> = content.chars().filter(|c| !c.is_whitespace()).collect();
    if glyphs.len() as u32 != expected {
        return Err(HexError::ParseError {
            reason: format!("expected {expected} glyphs, got {}", glyphs.len()),
        });
    }

    let mut vert = CellSet::empty();
    let mut horz = CellSet::empty();
    for (i, ch) in glyphs.into_iter().enumerate() {
        match ch {
            'X' => {
                vert.set(i as u32)?;
            }
            'O' => {
                horz.set(i as u32)?;
            }
            '.' | '-' | '\u{00B7}' => {}
            other => {
                return Err(HexError::ParseError { reason: format!("unexpected glyph '{other}'") });
            }
        }
    }
    Board::from_cellsets(vert, horz, None)
}

/// Renders the round-trippable state string `"P:GGG...G"`.
pub fn to_state_string<const N: u32>(board: &Board<N>) -> String {
    let side = CellSet::<N>::board_side();
    let mut s = String::with_capacity(2 + (side * side) as usize);
    s.push(board.player().glyph());
    s.push(':');
    for i in 0..side * side {
        if board.vertical_cells().test(i) {
            s.push('X');
        } else if board.horizontal_cells().test(i) {
            s.push('O');
        } else {
            s.push('-');
        }
    }
    s
}

/// Parses a state string produced by `to_state_string`.
pub fn parse_state_string<const N: u32>(s: &str) -> Result<Board<N>> {
    let (player_part, cells) = s
        .split_once(':')
        .ok_or_else(|| HexError::ParseError { reason: "missing ':' separator".into() })?;
    let mut chars = player_part.chars();
    let player_char = chars
        .next()
        .ok_or_else(|| HexError::ParseError { reason: "missing side-to-move glyph".into() })?;
    if chars.next().is_some() {
        return Err(HexError::ParseError { reason: "side-to-move segment must be a single glyph".into() });
    }
    let player = Player::from_char(player_char)?;

    let mut board = parse_board::<N>(cells)?;
    board.set_player(player);
    Ok(board)
}

/// A glyph-to-footprint mapping used by `render`; cells in none of the
/// listed sets render as `-`.
pub type GlyphMap<'a, const N: u32> = &'a [(char, CellSet<N>)];

fn glyph_for<const N: u32>(cell: u32, map: GlyphMap<N>) -> char {
    map.iter().find(|(_, set)| set.test(cell)).map_or('-', |(glyph, _)| *glyph)
}

/// Renders a header row (`a b c ...`) and one indented data row per board
/// row (`k: v v v ...`), each indented one more space than the previous,
/// giving the board's left-leaning rhombus layout.
pub fn render<const N: u32>(map: GlyphMap<N>) -> String {
    let side = CellSet::<N>::board_side();
    let mut out = String::new();

    let header: Vec<String> = (0..side).map(|c| ((b'a' + c as u8) as char).to_string()).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for r in 0..side {
        let indent = " ".repeat(r as usize);
        let row: Vec<String> = (0..side).map(|c| glyph_for(r * side + c, map).to_string()).collect();
        out.push_str(&format!("{indent}{}: {}\n", r + 1, row.join(" ")));
    }
    out
}
