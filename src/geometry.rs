// Pixel <-> square mapping for a board drawn with rank 8 at the top.

use shakmaty::{File, Rank, Square};

/// Share of the board size reserved on each side for coordinate labels.
pub const MARGIN_FRACTION: f32 = 0.05;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Region {
    /// Not on the board at all.
    Outside,
    /// On the label border around the squares.
    Margin,
    Square(Square),
}

/// Fixed per session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub size: f32,
    pub margin: f32,
    pub square_size: f32,
}

impl Geometry {
    pub fn new(origin_x: f32, origin_y: f32, size: f32, coordinates: bool) -> Self {
        let margin = if coordinates {
            MARGIN_FRACTION * size
        } else {
            0.0
        };
        Self {
            origin_x,
            origin_y,
            size,
            margin,
            square_size: (size - 2.0 * margin) / 8.0,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (self.origin_x..=self.origin_x + self.size).contains(&x)
            && (self.origin_y..=self.origin_y + self.size).contains(&y)
    }

    fn in_playing_area(&self, x: f32, y: f32) -> bool {
        let (lo_x, lo_y) = (self.origin_x + self.margin, self.origin_y + self.margin);
        let (hi_x, hi_y) = (
            self.origin_x + self.size - self.margin,
            self.origin_y + self.size - self.margin,
        );
        (lo_x..=hi_x).contains(&x) && (lo_y..=hi_y).contains(&y)
    }

    pub fn region(&self, x: f32, y: f32) -> Region {
        if !self.contains(x, y) {
            Region::Outside
        } else if !self.in_playing_area(x, y) {
            Region::Margin
        } else {
            let col = ((x - self.origin_x - self.margin) / self.square_size).floor();
            let row = ((y - self.origin_y - self.margin) / self.square_size).floor();
            // The far edges belong to the last file/rank.
            let file = (col as i32).clamp(0, 7) as u32;
            let rank = 7 - (row as i32).clamp(0, 7) as u32;
            Region::Square(Square::from_coords(File::new(file), Rank::new(rank)))
        }
    }

    /// Pixel center of a square, as displayed.
    pub fn square_center(&self, square: Square) -> (f32, f32) {
        let file = square.file() as u32 as f32;
        let row = (7 - square.rank() as u32) as f32;
        (
            self.origin_x + self.margin + (file + 0.5) * self.square_size,
            self.origin_y + self.margin + (row + 0.5) * self.square_size,
        )
    }
}
