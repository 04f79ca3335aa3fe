//! Foreground UI state and the event loop that drives it.
//!
//! [`App`] owns what only the UI task touches (the log history, the dirty
//! flag) and shares connectivity with the polling loop through the
//! [`StateStore`](crate::state::StateStore). [`run_app`] multiplexes
//! terminal input, incoming log lines and redraw requests.

use color_eyre::Result;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use crate::events::{EventReporter, MonitorEvent};
use crate::log_buffer::{LogBuffer, PAGE};
use crate::state::SharedState;
use crate::ui;

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

pub struct App {
    pub store: SharedState,
    pub log: LogBuffer,
    reporter: EventReporter,
    /// Set when the next loop iteration must redraw
    pub needs_redraw: bool,
    pub should_quit: bool,
}

/// Receivers the UI task drains.
pub struct AppChannels {
    pub log_rx: mpsc::UnboundedReceiver<String>,
    pub redraw_rx: mpsc::Receiver<()>,
}

impl App {
    pub fn new(store: SharedState, reporter: EventReporter, log_capacity: usize) -> Self {
        Self {
            store,
            log: LogBuffer::new(log_capacity)
                .with_viewport(usize::from(ui::LOG_PANEL_HEIGHT.saturating_sub(2))),
            reporter,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Flip the log panel. Showing it is narrated in the log itself.
    pub fn toggle_log_panel(&mut self) -> bool {
        let visible = self.store.toggle_log_visible();
        if visible {
            self.reporter.report(&MonitorEvent::LogPanelShown);
        }
        tracing::debug!(target: "netpulse::monitor", visible, "Log panel toggled");
        self.mark_dirty();
        visible
    }

    pub fn push_log_line(&mut self, line: String) {
        self.log.push(line);
        if self.store.read_log_visible() {
            self.mark_dirty();
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.toggle_log_panel();
            }
            code if self.store.read_log_visible() => {
                match code {
                    KeyCode::Up => self.log.scroll_up(1),
                    KeyCode::Down => self.log.scroll_down(1),
                    KeyCode::PageUp => self.log.scroll_up(PAGE),
                    KeyCode::PageDown => self.log.scroll_down(PAGE),
                    KeyCode::Home => self.log.scroll_to_top(),
                    KeyCode::End => self.log.scroll_to_bottom(),
                    _ => return,
                }
                self.mark_dirty();
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.store.read_log_visible() {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.log.scroll_up(WHEEL_STEP),
            MouseEventKind::ScrollDown => self.log.scroll_down(WHEEL_STEP),
            _ => return,
        }
        self.mark_dirty();
    }
}

/// Run the UI until the operator quits.
///
/// Draws only when something changed: a redraw request from the polling
/// loop, a visible log line, input, or a resize.
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    channels: AppChannels,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let AppChannels {
        mut log_rx,
        mut redraw_rx,
    } = channels;
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            event = event_stream.next() => match event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(err)) => return Err(err.into()),
                None => app.quit(),
            },
            Some(line) = log_rx.recv() => {
                app.push_log_line(line);
                while let Ok(line) = log_rx.try_recv() {
                    app.push_log_line(line);
                }
            }
            Some(()) = redraw_rx.recv() => app.mark_dirty(),
        }
    }
}
