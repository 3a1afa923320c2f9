//! ANSI rendering of bursts and the announce message.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;

use super::burst::{Burst, GLYPH};
use super::palette::{ANNOUNCE_STYLE, RESET};

/// Calculate the starting column for centering text.
///
/// # Arguments
/// * `width` - Screen width in columns
/// * `text` - Visible text (no escape codes)
///
/// # Returns
/// The 1-based column, `(width - text_width) / 2` rounded down, at least 1
pub fn center_column(width: u16, text: &str) -> u16 {
    column_for_length(width, UnicodeWidthStr::width(text))
}

/// Starting column for the announce message on the assumed screen.
///
/// The measured length includes the bold-yellow and reset sequences around
/// the message, so the default message sits at column 24 of 80.
pub fn styled_center_column(width: u16, text: &str) -> u16 {
    let length = ANNOUNCE_STYLE.len() + UnicodeWidthStr::width(text) + RESET.len();
    column_for_length(width, length)
}

fn column_for_length(width: u16, length: usize) -> u16 {
    let free = (width as usize).saturating_sub(length);
    ((free / 2) as u16).max(1)
}

/// Writes show output to a terminal (or any writer).
///
/// Commands are queued; nothing reaches the terminal until [`flush`](Self::flush).
pub struct Renderer<W: Write> {
    out: W,
    cursor_hidden: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cursor_hidden: false,
        }
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Draw every glyph of a burst in its color.
    pub fn draw_burst(&mut self, burst: &Burst) -> io::Result<()> {
        let color = burst.color.sgr();
        for glyph in burst.glyphs() {
            queue!(
                self.out,
                MoveTo(glyph.col - 1, glyph.row - 1),
                Print(color),
                Print(GLYPH),
                Print(RESET)
            )?;
        }
        Ok(())
    }

    /// Draw the announce message in bold yellow at a 1-based position,
    /// followed by a newline.
    pub fn draw_message(&mut self, text: &str, row: u16, col: u16) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(col.saturating_sub(1), row.saturating_sub(1)),
            Print(ANNOUNCE_STYLE),
            Print(text),
            Print(RESET),
            Print('\n')
        )
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, Hide)?;
        self.cursor_hidden = true;
        Ok(())
    }

    /// Show the cursor again if it was hidden. Flushes.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            queue!(self.out, Print(RESET), Show)?;
            self.cursor_hidden = false;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
