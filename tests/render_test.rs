//! Full-frame rendering through `TestBackend`.

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use netpulse::ui::{self, LOG_PANEL_TITLE};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

fn draw(app: &mut netpulse::app::App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn count_bg(buf: &Buffer, color: Color) -> usize {
    buf.content().iter().filter(|cell| cell.bg == color).count()
}

fn screen_text(buf: &Buffer) -> String {
    buf.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_initial_frame_is_red_without_panel() {
    let (mut app, _) = common::test_app();
    let buf = draw(&mut app, 80, 24);

    assert_eq!(count_bg(&buf, Color::Red), 15);
    assert_eq!(count_bg(&buf, Color::Green), 0);
    assert!(!screen_text(&buf).contains(LOG_PANEL_TITLE));
}

#[test]
fn test_connected_frame_is_green() {
    let (mut app, _) = common::test_app();
    app.store.set_connected(true);
    let buf = draw(&mut app, 80, 24);

    assert_eq!(count_bg(&buf, Color::Green), 15);
    assert_eq!(count_bg(&buf, Color::Red), 0);
}

/// Toggling the panel before any probe shows it and leaves the block red.
#[test]
fn test_toggle_before_first_probe() {
    let (mut app, sink) = common::test_app();
    app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));

    for line in sink.lines() {
        app.push_log_line(line);
    }
    let buf = draw(&mut app, 80, 30);
    let text = screen_text(&buf);

    assert!(!app.store.read_connected());
    assert!(text.contains(LOG_PANEL_TITLE));
    assert!(text.contains("Log view enabled."));
    assert!(!text.contains("[yellow]"));
    assert_eq!(count_bg(&buf, Color::Red), 15);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let (mut app, _) = common::test_app();
    app.toggle_log_panel();
    for (w, h) in [(1, 1), (4, 2), (10, 16), (3, 40)] {
        let _ = draw(&mut app, w, h);
    }
}

/// On a short terminal Home must still reach the oldest line.
#[test]
fn test_home_reaches_oldest_line_on_short_terminal() {
    let (mut app, _) = common::test_app();
    app.toggle_log_panel();
    for i in 0..40 {
        app.push_log_line(format!("entry {:02}", i));
    }

    // 10 rows leaves an 8-row inner log area, shorter than the default.
    let _ = draw(&mut app, 80, 10);
    app.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
    let text = screen_text(&draw(&mut app, 80, 10));

    assert!(text.contains("entry 00"), "oldest line not shown");
    assert!(!text.contains("entry 39"));
}
