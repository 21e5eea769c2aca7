use crate::ui::theme::{OverlayKind, Theme};
use chess::{Grid, PieceColor, Square};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Columns reserved left of the board for rank labels.
const RANK_LABEL_WIDTH: u16 = 3;
/// Rows reserved below the board for file labels.
const FILE_LABEL_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub square_width: u16,
    pub square_height: u16,
}

impl BoardSize {
    pub const SMALL: Self = Self {
        square_width: 3,
        square_height: 1,
    };

    pub const MEDIUM: Self = Self {
        square_width: 7,
        square_height: 3,
    };

    pub const LARGE: Self = Self {
        square_width: 11,
        square_height: 5,
    };

    /// Largest preset that fits in `inner`, falling back to small.
    fn for_area(inner: Rect) -> Self {
        let available_width = inner.width.saturating_sub(RANK_LABEL_WIDTH);
        let available_height = inner.height.saturating_sub(FILE_LABEL_HEIGHT);

        [Self::LARGE, Self::MEDIUM]
            .into_iter()
            .find(|size| {
                available_width >= size.square_width * 8
                    && available_height >= size.square_height * 8
            })
            .unwrap_or(Self::SMALL)
    }
}

/// Where the squares land on screen for a given widget area.
///
/// Rendering and mouse hit-testing both go through this, so a click always
/// resolves to the square that was drawn under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub inner: Rect,
    pub size: BoardSize,
    pub start_x: u16,
    pub start_y: u16,
}

impl BoardGeometry {
    pub fn for_area(area: Rect) -> Self {
        let inner = board_block().inner(area);
        let size = BoardSize::for_area(inner);

        let total_width = size.square_width * 8 + RANK_LABEL_WIDTH;
        let total_height = size.square_height * 8 + FILE_LABEL_HEIGHT;

        // Center the board within the available area
        let offset_x = inner.width.saturating_sub(total_width) / 2;
        let offset_y = inner.height.saturating_sub(total_height) / 2;

        Self {
            inner,
            size,
            start_x: inner.x + offset_x + RANK_LABEL_WIDTH,
            start_y: inner.y + offset_y,
        }
    }

    /// Top-left cell of a square.
    pub fn square_origin(&self, square: Square) -> (u16, u16) {
        let (row, col) = square.grid_index();
        (
            self.start_x + col as u16 * self.size.square_width,
            self.start_y + row as u16 * self.size.square_height,
        )
    }

    /// Cell where a square's glyph is drawn.
    pub fn square_center(&self, square: Square) -> (u16, u16) {
        let (x, y) = self.square_origin(square);
        (
            x + self.size.square_width / 2,
            y + self.size.square_height / 2,
        )
    }

    /// The square under a terminal cell, if any.
    pub fn square_at(&self, column: u16, row: u16) -> Option<Square> {
        if column < self.start_x || row < self.start_y {
            return None;
        }
        let col = (column - self.start_x) / self.size.square_width;
        let row = (row - self.start_y) / self.size.square_height;
        let square = Square::from_grid(row as usize, col as usize)?;

        // Clipped squares are not clickable
        let (x, y) = self.square_center(square);
        (x < self.inner.right() && y < self.inner.bottom()).then_some(square)
    }
}

fn board_block() -> Block<'static> {
    Block::default().title("♟ Board ♟").borders(Borders::ALL)
}

/// Squares to tint while the board is drawn.
#[derive(Debug, Clone, Default)]
pub struct Highlights {
    pub origin: Option<Square>,
    pub hover: Option<Square>,
    pub targets: Vec<Square>,
    pub last_move: Option<(Square, Square)>,
}

impl Highlights {
    fn overlay_for(&self, square: Square) -> Option<OverlayKind> {
        if self.origin == Some(square) {
            Some(OverlayKind::Origin)
        } else if self.hover == Some(square) {
            Some(OverlayKind::Hover)
        } else if self.targets.contains(&square) {
            Some(OverlayKind::Target)
        } else if self
            .last_move
            .is_some_and(|(from, to)| from == square || to == square)
        {
            Some(OverlayKind::LastMove)
        } else {
            None
        }
    }
}

pub struct BoardWidget<'a> {
    pub grid: &'a Grid,
    pub highlights: &'a Highlights,
    pub theme: &'a Theme,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = board_block().border_style(Style::default().fg(self.theme.board_border));
        block.render(area, buf);

        let geometry = BoardGeometry::for_area(area);
        let bounds = geometry.inner;
        let label_style = Style::default().fg(self.theme.board_label);

        // Rank labels on the left, 8 at the top
        for row in 0..8u16 {
            let y = geometry.start_y + row * geometry.size.square_height + geometry.size.square_height / 2;
            if y < bounds.bottom() {
                buf.set_string(
                    geometry.start_x.saturating_sub(2),
                    y,
                    format!("{}", 8 - row),
                    label_style,
                );
            }
        }

        // File labels at the bottom
        let label_y = geometry.start_y + 8 * geometry.size.square_height;
        for col in 0..8u16 {
            let x = geometry.start_x + col * geometry.size.square_width + geometry.size.square_width / 2;
            if x < bounds.right() && label_y < bounds.bottom() {
                let file = (b'a' + col as u8) as char;
                buf.set_string(x, label_y, file.to_string(), label_style);
            }
        }

        for square in Square::all() {
            let bg = self
                .theme
                .square_bg(self.highlights.overlay_for(square), square.is_light());
            render_square(buf, &geometry, square, bg);

            if let Some(piece) = self.grid.piece_at(square) {
                let fg = match piece.color {
                    PieceColor::White => self.theme.white_piece,
                    PieceColor::Black => self.theme.black_piece,
                };
                let (x, y) = geometry.square_center(square);
                if x < bounds.right() && y < bounds.bottom() {
                    let style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);
                    buf.set_string(x, y, piece.glyph().to_string(), style);
                }
            }
        }
    }
}

fn render_square(buf: &mut Buffer, geometry: &BoardGeometry, square: Square, bg: Color) {
    let style = Style::default().bg(bg);
    let (x, y) = geometry.square_origin(square);
    let bounds = geometry.inner;

    for dy in 0..geometry.size.square_height {
        for dx in 0..geometry.size.square_width {
            let px = x + dx;
            let py = y + dy;
            if px < bounds.right() && py < bounds.bottom() {
                buf[(px, py)].set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    #[test]
    fn picks_largest_size_that_fits() {
        assert_eq!(
            BoardGeometry::for_area(Rect::new(0, 0, 120, 60)).size,
            BoardSize::LARGE
        );
        assert_eq!(
            BoardGeometry::for_area(Rect::new(0, 0, 70, 30)).size,
            BoardSize::MEDIUM
        );
        assert_eq!(
            BoardGeometry::for_area(Rect::new(0, 0, 30, 12)).size,
            BoardSize::SMALL
        );
    }

    #[test]
    fn hit_test_matches_drawn_squares() {
        let geometry = BoardGeometry::for_area(Rect::new(0, 0, 70, 30));
        for square in Square::all() {
            let (x, y) = geometry.square_origin(square);
            assert_eq!(geometry.square_at(x, y), Some(square));
            let (cx, cy) = geometry.square_center(square);
            assert_eq!(geometry.square_at(cx, cy), Some(square));
        }
    }

    #[test]
    fn a8_is_top_left_and_h1_bottom_right() {
        let geometry = BoardGeometry::for_area(Rect::new(0, 0, 70, 30));
        assert_eq!(
            geometry.square_at(geometry.start_x, geometry.start_y),
            Some(sq("a8"))
        );
        let right = geometry.start_x + 8 * geometry.size.square_width - 1;
        let bottom = geometry.start_y + 8 * geometry.size.square_height - 1;
        assert_eq!(geometry.square_at(right, bottom), Some(sq("h1")));
    }

    #[test]
    fn cells_outside_board_hit_nothing() {
        let geometry = BoardGeometry::for_area(Rect::new(0, 0, 70, 30));
        assert_eq!(geometry.square_at(0, 0), None);
        assert_eq!(
            geometry.square_at(geometry.start_x - 1, geometry.start_y),
            None
        );
        let past_right = geometry.start_x + 8 * geometry.size.square_width;
        assert_eq!(geometry.square_at(past_right, geometry.start_y), None);
        let past_bottom = geometry.start_y + 8 * geometry.size.square_height;
        assert_eq!(geometry.square_at(geometry.start_x, past_bottom), None);
    }

    #[test]
    fn renders_glyphs_on_their_squares() {
        let grid = chess::decode(chess::STARTING_FEN).unwrap();
        let highlights = Highlights::default();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 70, 30);
        let mut buf = Buffer::empty(area);

        BoardWidget {
            grid: &grid,
            highlights: &highlights,
            theme: &theme,
        }
        .render(area, &mut buf);

        let geometry = BoardGeometry::for_area(area);
        let (x, y) = geometry.square_center(sq("e1"));
        assert_eq!(buf[(x, y)].symbol(), "♔");
        let (x, y) = geometry.square_center(sq("d8"));
        assert_eq!(buf[(x, y)].symbol(), "♛");
        let (x, y) = geometry.square_center(sq("e4"));
        assert_eq!(buf[(x, y)].symbol(), " ");
    }

    #[test]
    fn origin_overlay_wins_over_last_move() {
        let highlights = Highlights {
            origin: Some(sq("e2")),
            last_move: Some((sq("e2"), sq("e3"))),
            ..Default::default()
        };
        assert_eq!(highlights.overlay_for(sq("e2")), Some(OverlayKind::Origin));
        assert_eq!(highlights.overlay_for(sq("e3")), Some(OverlayKind::LastMove));
        assert_eq!(highlights.overlay_for(sq("a1")), None);
    }
}
