//! Interactive raw-mode browser.
//!
//! Single-threaded and event-driven: one key event at a time, each toggle
//! applied and redrawn synchronously before the next event is read.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use tracing::debug;

use crate::view::{render_with_cursor, Glyphs, TreeView};

/// Run the interactive browser until the user quits.
pub fn browse(view: &mut TreeView, glyphs: &Glyphs) -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = event_loop(&mut stdout, view, glyphs);
    // Restore the terminal even when the loop errored
    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(stdout: &mut impl Write, view: &mut TreeView, glyphs: &Glyphs) -> io::Result<()> {
    let section_count = view.taxonomy().sections().len();
    let mut cursor = 0usize;

    loop {
        draw(stdout, view, glyphs, cursor)?;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Up | KeyCode::Char('k') => cursor = cursor.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => {
                    if cursor + 1 < section_count {
                        cursor += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(section) = view.taxonomy().sections().get(cursor) {
                        let key = section.key.clone();
                        debug!("toggle section: {}", key);
                        view.toggle(&key);
                    }
                }
                KeyCode::Esc | KeyCode::Char('q') => break,
                _ => {}
            },
            _ => {}
        }
    }
    Ok(())
}

fn draw(stdout: &mut impl Write, view: &TreeView, glyphs: &Glyphs, cursor: usize) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    // Raw mode needs explicit carriage returns
    for line in render_with_cursor(view, glyphs, cursor).lines() {
        queue!(stdout, Print(line), Print("\r\n"))?;
    }
    queue!(
        stdout,
        Print("\r\n"),
        Print("up/down move · space toggle · q quit")
    )?;
    stdout.flush()
}
