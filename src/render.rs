// SVG board image. Pure function of the board and the display options; the whole
// document is written again for every repaint.

use shakmaty::{Board, Color, File, Piece, Rank, Role, Square};

use crate::geometry::MARGIN_FRACTION;

const LIGHT: &str = "#ffce9e";
const DARK: &str = "#d18b47";
const LIGHT_LASTMOVE: &str = "#cdd16a";
const DARK_LASTMOVE: &str = "#aaa23b";
const SELECTED: &str = "#7fa650";
const MARGIN_FILL: &str = "#212121";
const LABEL_FILL: &str = "#e5e5e5";

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub size: f32,
    pub coordinates: bool,
    pub last_move: Option<(Square, Square)>,
    pub selected: Option<Square>,
    /// King square to mark as in check.
    pub check: Option<Square>,
}

impl RenderOptions {
    pub fn new(size: f32, coordinates: bool) -> Self {
        Self {
            size,
            coordinates,
            last_move: None,
            selected: None,
            check: None,
        }
    }
}

const LABEL_FONT: &str = "DejaVu Sans, Segoe UI, Noto Sans, Arial, sans-serif";

/// Piece outlines in a 45x45 box, drawn with the fill of the piece's color.
fn piece_shapes(role: Role) -> &'static str {
    match role {
        Role::Pawn => {
            "<circle cx=\"22.5\" cy=\"15\" r=\"5.5\"/>\
             <path d=\"M 17 35 L 19.5 21 L 25.5 21 L 28 35 Z\"/>"
        }
        Role::Knight => {
            "<path d=\"M 14 35 L 17 24 L 11 22 L 13 15 L 20 9 L 22 6 L 24 9 \
             C 31 10 34 18 32 35 Z\"/>"
        }
        Role::Bishop => {
            "<circle cx=\"22.5\" cy=\"7\" r=\"2.5\"/>\
             <path d=\"M 22.5 9 C 16 14 15 22 18 27 L 27 27 C 30 22 29 14 22.5 9 Z\"/>\
             <path d=\"M 17 35 L 19 27 L 26 27 L 28 35 Z\"/>"
        }
        Role::Rook => {
            "<path d=\"M 11 16 L 11 9 L 15 9 L 15 12 L 20 12 L 20 9 L 25 9 L 25 12 \
             L 30 12 L 30 9 L 34 9 L 34 16 Z\"/>\
             <path d=\"M 13 35 L 14 16 L 31 16 L 32 35 Z\"/>"
        }
        Role::Queen => {
            "<circle cx=\"10\" cy=\"14\" r=\"2.5\"/>\
             <circle cx=\"22.5\" cy=\"10\" r=\"2.5\"/>\
             <circle cx=\"35\" cy=\"14\" r=\"2.5\"/>\
             <path d=\"M 10 16 L 14 30 L 31 30 L 35 16 L 28 25 L 22.5 12 L 17 25 Z\"/>\
             <path d=\"M 14 30 L 15 35 L 30 35 L 31 30 Z\"/>"
        }
        Role::King => {
            "<path d=\"M 21 4 L 24 4 L 24 8 L 27 8 L 27 11 L 24 11 L 24 15 L 21 15 \
             L 21 11 L 18 11 L 18 8 L 21 8 Z\"/>\
             <path d=\"M 12 35 L 11 22 C 15 16 30 16 34 22 L 33 35 Z\"/>"
        }
    }
}

fn piece_id(piece: Piece) -> String {
    let color = match piece.color {
        Color::White => "white",
        Color::Black => "black",
    };
    let role = match piece.role {
        Role::Pawn => "pawn",
        Role::Knight => "knight",
        Role::Bishop => "bishop",
        Role::Rook => "rook",
        Role::Queen => "queen",
        Role::King => "king",
    };
    format!("{color}-{role}")
}

fn piece_defs() -> String {
    let mut defs = String::new();
    for color in [Color::White, Color::Black] {
        let fill = match color {
            Color::White => "#ffffff",
            Color::Black => "#000000",
        };
        for role in Role::ALL {
            let piece = Piece { color, role };
            defs.push_str(&format!(
                "<g id=\"{}\" fill=\"{fill}\" stroke=\"#000000\" stroke-width=\"1.5\" \
                 stroke-linejoin=\"round\">{}\
                 <path d=\"M 9 39 L 36 39 L 36 35 L 9 35 Z\"/></g>\n",
                piece_id(piece),
                piece_shapes(role)
            ));
        }
    }
    defs
}

fn square_fill(square: Square, options: &RenderOptions) -> &'static str {
    let light = square.is_light();
    if options.selected == Some(square) {
        SELECTED
    } else if options
        .last_move
        .is_some_and(|(from, to)| from == square || to == square)
    {
        if light { LIGHT_LASTMOVE } else { DARK_LASTMOVE }
    } else if light {
        LIGHT
    } else {
        DARK
    }
}

/// Serializes `board` into a standalone SVG document of `options.size` pixels.
pub fn board_svg(board: &Board, options: &RenderOptions) -> String {
    let size = options.size;
    let margin = if options.coordinates {
        MARGIN_FRACTION * size
    } else {
        0.0
    };
    let sq = (size - 2.0 * margin) / 8.0;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\" version=\"1.1\" \
         width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n"
    );
    svg.push_str(
        "<defs><radialGradient id=\"check\">\
         <stop offset=\"0%\" stop-color=\"#ff0000\" stop-opacity=\"1.0\"/>\
         <stop offset=\"50%\" stop-color=\"#e70000\" stop-opacity=\"1.0\"/>\
         <stop offset=\"100%\" stop-color=\"#9e0000\" stop-opacity=\"0.0\"/>\
         </radialGradient>\n",
    );
    svg.push_str(&piece_defs());
    svg.push_str("</defs>\n");

    if options.coordinates {
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{size}\" height=\"{size}\" fill=\"{MARGIN_FILL}\"/>\n"
        ));
        let font = margin * 0.6;
        for i in 0..8u8 {
            let along = margin + (f32::from(i) + 0.5) * sq;
            let file = char::from(b'a' + i);
            let rank = char::from(b'8' - i);
            for (x, y, label) in [
                (along, margin * 0.7, file),
                (along, size - margin * 0.3, file),
                (margin * 0.5, along + font * 0.35, rank),
                (size - margin * 0.5, along + font * 0.35, rank),
            ] {
                svg.push_str(&format!(
                    "<text x=\"{x}\" y=\"{y}\" font-family=\"{LABEL_FONT}\" font-size=\"{font}\" \
                     text-anchor=\"middle\" fill=\"{LABEL_FILL}\">{label}</text>\n"
                ));
            }
        }
    }

    for rank in 0..8u32 {
        for file in 0..8u32 {
            let square = Square::from_coords(File::new(file), Rank::new(rank));
            let x = margin + file as f32 * sq;
            let y = margin + (7 - rank) as f32 * sq;
            svg.push_str(&format!(
                "<rect class=\"square {square}\" x=\"{x}\" y=\"{y}\" width=\"{sq}\" height=\"{sq}\" \
                 fill=\"{}\"/>\n",
                square_fill(square, options)
            ));
            if options.check == Some(square) {
                svg.push_str(&format!(
                    "<rect class=\"check\" x=\"{x}\" y=\"{y}\" width=\"{sq}\" height=\"{sq}\" \
                     fill=\"url(#check)\"/>\n"
                ));
            }
            if let Some(piece) = board.piece_at(square) {
                svg.push_str(&format!(
                    "<use class=\"piece {square}\" xlink:href=\"#{}\" \
                     transform=\"translate({x}, {y}) scale({})\"/>\n",
                    piece_id(piece),
                    sq / 45.0
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Image bytes for the display surface.
pub fn render(board: &Board, options: &RenderOptions) -> Vec<u8> {
    board_svg(board, options).into_bytes()
}
