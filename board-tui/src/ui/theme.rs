use ratatui::style::Color;

/// All colors used by the board, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Board ──────────────────────────────────────────────────────
    pub light_square: Color,
    pub dark_square: Color,
    pub white_piece: Color,
    pub black_piece: Color,
    pub board_border: Color,
    pub board_label: Color,

    // ── Overlays (light-square variant, dark-square variant) ──────
    pub overlay_origin: (Color, Color),
    pub overlay_target: (Color, Color),
    pub overlay_hover: (Color, Color),
    pub overlay_last_move: (Color, Color),

    // ── Panel chrome ──────────────────────────────────────────────
    pub panel_border: Color,

    // ── Semantic status ───────────────────────────────────────────
    pub positive: Color,
    pub negative: Color,
    pub info: Color,
    pub muted: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,

    // ── Dialogs ───────────────────────────────────────────────────
    pub dialog_bg: Color,
    pub dialog_border: Color,
}

impl Theme {
    /// Designed for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            light_square: Color::Rgb(240, 217, 181),
            dark_square: Color::Rgb(181, 136, 99),
            // Use explicit RGB instead of ANSI White/Black — many terminals
            // remap ANSI colors, causing pieces to blend into the board.
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(0, 0, 0),
            board_border: Color::Cyan,
            board_label: Color::Yellow,

            overlay_origin: (Color::LightYellow, Color::Yellow),
            overlay_target: (Color::LightBlue, Color::Blue),
            overlay_hover: (Color::LightCyan, Color::Cyan),
            overlay_last_move: (Color::Rgb(205, 210, 106), Color::Rgb(170, 162, 58)),

            panel_border: Color::Cyan,

            positive: Color::Green,
            negative: Color::Red,
            info: Color::Cyan,
            muted: Color::DarkGray,

            text_primary: Color::White,

            dialog_bg: Color::Black,
            dialog_border: Color::Red,
        }
    }

    /// Designed for terminals with a light background. Darker board squares
    /// so white pieces keep their contrast.
    pub fn light() -> Self {
        Self {
            light_square: Color::Rgb(210, 180, 140),
            dark_square: Color::Rgb(150, 110, 70),
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(30, 30, 30),
            board_border: Color::Rgb(60, 60, 60),
            board_label: Color::Rgb(100, 80, 50),

            overlay_origin: (Color::Rgb(220, 200, 80), Color::Rgb(180, 160, 40)),
            overlay_target: (Color::Rgb(100, 160, 220), Color::Rgb(60, 120, 180)),
            overlay_hover: (Color::Rgb(80, 200, 200), Color::Rgb(40, 160, 160)),
            overlay_last_move: (Color::Rgb(190, 200, 90), Color::Rgb(150, 160, 50)),

            panel_border: Color::Rgb(60, 120, 140),

            positive: Color::Rgb(30, 140, 30),
            negative: Color::Rgb(200, 40, 40),
            info: Color::Rgb(30, 120, 150),
            muted: Color::Rgb(150, 150, 150),

            text_primary: Color::Rgb(30, 30, 30),

            dialog_bg: Color::Rgb(245, 245, 240),
            dialog_border: Color::Rgb(200, 40, 40),
        }
    }

    /// Detect theme from the `DRAGBOARD_THEME` environment variable.
    pub fn detect() -> Self {
        Self::from_preference(crate::config::get_theme_preference().as_deref())
    }

    /// Create a theme from a preference string ("light" or "dark").
    /// Returns dark for any unrecognized or `None` value.
    pub fn from_preference(pref: Option<&str>) -> Self {
        match pref {
            Some("light") => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Toggle between dark and light theme in place.
    pub fn toggle(&mut self) {
        *self = if self.is_dark() {
            Self::light()
        } else {
            Self::dark()
        };
    }

    /// Returns true if this is the dark theme variant.
    pub fn is_dark(&self) -> bool {
        // Dark theme uses ANSI Color::White for text_primary;
        // light theme uses Rgb(30,30,30).
        self.text_primary == Color::White
    }

    pub fn name(&self) -> &'static str {
        if self.is_dark() {
            "Dark"
        } else {
            "Light"
        }
    }

    /// Background for a square, with an optional overlay on top.
    pub fn square_bg(&self, overlay: Option<OverlayKind>, is_light_square: bool) -> Color {
        let (light, dark) = match overlay {
            Some(OverlayKind::Origin) => self.overlay_origin,
            Some(OverlayKind::Target) => self.overlay_target,
            Some(OverlayKind::Hover) => self.overlay_hover,
            Some(OverlayKind::LastMove) => self.overlay_last_move,
            None => (self.light_square, self.dark_square),
        };
        if is_light_square {
            light
        } else {
            dark
        }
    }
}

/// Square overlays, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Origin,
    Hover,
    Target,
    LastMove,
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
