use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use crate::{BoardInt, Coords};

/// Thin crossterm wrapper. The board never scrolls: every draw targets a
/// single cell by absolute position.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self, min_width: BoardInt, min_height: BoardInt) -> Result<()> {
        let (cols, rows) = terminal::size().context("reading terminal size")?;
        ensure!(
            cols >= min_width && rows >= min_height,
            "terminal is {cols}x{rows}, the board needs at least {min_width}x{min_height}"
        );

        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)
            .context("entering the alternate screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("disabling raw mode")?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
            .context("leaving the alternate screen")?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("clearing the screen")?;
        Ok(())
    }

    // board coordinates are 1-based, the terminal's are 0-based
    pub fn draw_cell(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0 - 1, pos.1 - 1), style::Print(ch))
            .context("queueing a cell draw")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("flushing the terminal")?;
        Ok(())
    }

    /// Non-blocking: returns every key press already waiting in the queue.
    pub fn drain_key_events(&self) -> Result<Vec<KeyEvent>> {
        let mut events = Vec::new();
        while poll(Duration::from_millis(0)).context("polling for input")? {
            if let Event::Key(ev) = read().context("reading input")? {
                if ev.kind == KeyEventKind::Press {
                    events.push(ev);
                }
            }
        }
        Ok(events)
    }
}
