use board_tui::ui::theme::Theme;
use board_tui::ui::view::ILLEGAL_MOVE_NOTICE;
use board_tui::{App, AppAction};
use chess::{Piece, PieceColor, PieceKind, Square};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn setup(fen: &str) -> (App, Terminal<TestBackend>) {
    let grid = chess::decode(fen).unwrap();
    let mut app = App::new(grid, Theme::dark());
    app.start();
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    (app, terminal)
}

fn redraw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> Buffer {
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal.backend().buffer().clone()
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_line(app: &mut App, text: &str) {
    for c in text.chars() {
        assert_eq!(app.handle_event(key(KeyCode::Char(c))), AppAction::Continue);
    }
    app.handle_event(key(KeyCode::Enter));
}

fn drag(app: &mut App, from: &str, to: &str) {
    let geometry = app.board_geometry();
    let (fx, fy) = geometry.square_center(sq(from));
    let (tx, ty) = geometry.square_center(sq(to));
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), fx, fy));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), tx, ty));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), tx, ty));
}

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

mod drag_and_drop {
    use super::*;

    #[test]
    fn legal_drag_moves_piece_on_grid_and_screen() {
        let (mut app, mut terminal) = setup(chess::STARTING_FEN);
        drag(&mut app, "g1", "f3");

        let knight = Piece::new(PieceKind::Knight, PieceColor::White);
        assert_eq!(app.grid().piece_at(sq("f3")), Some(knight));
        assert_eq!(app.grid().piece_at(sq("g1")), None);
        assert_eq!(app.view().last_move(), Some((sq("g1"), sq("f3"))));
        assert!(!app.drag().is_dragging());

        let buf = redraw(&mut app, &mut terminal);
        let geometry = app.board_geometry();
        let (x, y) = geometry.square_center(sq("f3"));
        assert_eq!(buf[(x, y)].symbol(), "♘");
        let (x, y) = geometry.square_center(sq("g1"));
        assert_eq!(buf[(x, y)].symbol(), " ");
    }

    #[test]
    fn illegal_drag_raises_notice_and_keeps_grid() {
        let (mut app, mut terminal) = setup(chess::STARTING_FEN);
        let before = app.grid().clone();

        drag(&mut app, "e2", "e4");

        assert_eq!(app.grid(), &before);
        let notice = app.view().notice().expect("notice should be shown");
        assert_eq!(notice.message, ILLEGAL_MOVE_NOTICE);

        let buf = redraw(&mut app, &mut terminal);
        assert!(buffer_text(&buf).contains(ILLEGAL_MOVE_NOTICE));
    }

    #[test]
    fn sliding_piece_jumps_over_others() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        drag(&mut app, "a1", "a8");
        assert_eq!(
            app.grid().piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Rook, PieceColor::White))
        );
    }

    #[test]
    fn drop_outside_board_cancels() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        let before = app.grid().clone();
        let (x, y) = app.board_geometry().square_center(sq("b1"));

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        assert!(app.drag().is_dragging());
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));

        assert!(!app.drag().is_dragging());
        assert_eq!(app.grid(), &before);
        assert!(app.view().notice().is_none());
    }

    #[test]
    fn pressing_empty_square_starts_nothing() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        let (x, y) = app.board_geometry().square_center(sq("e4"));
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        assert!(!app.drag().is_dragging());
    }

    #[test]
    fn dragging_highlights_shape_targets() {
        let (mut app, mut terminal) = setup(chess::STARTING_FEN);
        let (x, y) = app.board_geometry().square_center(sq("e2"));
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y));

        let buf = redraw(&mut app, &mut terminal);
        let theme = Theme::dark();
        let geometry = app.board_geometry();

        // e3 is a dark square, e4 is out of pawn reach
        let (x, y) = geometry.square_center(sq("e3"));
        assert_eq!(buf[(x, y)].bg, theme.overlay_target.1);
        let (x, y) = geometry.square_center(sq("e4"));
        assert_eq!(buf[(x, y)].bg, theme.light_square);
    }

    #[test]
    fn either_side_may_move_repeatedly() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        drag(&mut app, "e7", "e6");
        drag(&mut app, "d7", "d6");
        assert_eq!(
            chess::encode_placement(app.grid()),
            "rnbqkbnr/ppp2ppp/3pp3/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }
}

mod notice {
    use super::*;

    #[test]
    fn notice_blocks_keys_until_dismissed() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        drag(&mut app, "e2", "e4");
        assert!(app.view().notice().is_some());

        // 'q' would normally quit
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), AppAction::Continue);
        assert!(app.view().notice().is_some());
        assert_eq!(app.input(), "");

        app.handle_event(key(KeyCode::Enter));
        assert!(app.view().notice().is_none());
    }

    #[test]
    fn click_dismisses_without_starting_drag() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        drag(&mut app, "e2", "e4");

        let (x, y) = app.board_geometry().square_center(sq("d2"));
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y));

        assert!(app.view().notice().is_none());
        assert!(!app.drag().is_dragging());
    }
}

mod keyboard {
    use super::*;

    #[test]
    fn typed_move_goes_through_the_same_check() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        type_line(&mut app, "e2 e3");
        assert_eq!(
            app.grid().piece_at(sq("e3")),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(app.input(), "");

        type_line(&mut app, "e3e5");
        assert!(app.view().notice().is_some());
    }

    #[test]
    fn malformed_square_is_reported_inline() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        type_line(&mut app, "e2 e9");
        assert_eq!(app.view().status(), Some("Malformed square: \"e9\""));
        assert!(app.view().notice().is_none());
    }

    #[test]
    fn empty_origin_is_reported() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        type_line(&mut app, "e4 e5");
        assert_eq!(app.view().status(), Some("No piece on e4"));
    }

    #[test]
    fn escape_clears_input_before_quitting() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        app.handle_event(key(KeyCode::Char('e')));
        assert_eq!(app.handle_event(key(KeyCode::Esc)), AppAction::Continue);
        assert_eq!(app.input(), "");
        assert_eq!(app.handle_event(key(KeyCode::Esc)), AppAction::Quit);
    }

    #[test]
    fn q_quits_and_t_toggles_theme() {
        let (mut app, _terminal) = setup(chess::STARTING_FEN);
        assert!(app.theme().is_dark());
        app.handle_event(key(KeyCode::Char('t')));
        assert!(!app.theme().is_dark());
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), AppAction::Quit);
    }
}
