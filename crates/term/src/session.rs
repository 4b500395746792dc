//! TerminalSession: flushes rendered frames to a real terminal.
//!
//! The drawing API stays small on purpose: encode one full frame into an
//! internal byte buffer, then hand it to stdout in a single write so the
//! terminal never shows a partially drawn frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::core::Screen;

pub struct TerminalSession {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame as a full redraw.
    pub fn draw(&mut self, screen: &Screen) -> Result<()> {
        self.buf.clear();
        encode_frame_into(screen, &mut self.buf)?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Every glyph is printed twice: terminal cells are roughly twice as tall
/// as they are wide, and doubling the columns keeps the image square.
pub fn encode_frame_into(screen: &Screen, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let height = screen.height() as usize;
    for (y, row) in screen.rows().enumerate() {
        for &glyph in row {
            out.queue(Print(glyph))?;
            out.queue(Print(glyph))?;
        }
        if y + 1 < height {
            out.queue(Print("\r\n"))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Terminal I/O itself is not unit-testable, but the encoder is pure.
    #[test]
    fn encoder_doubles_every_glyph() {
        let mut screen = Screen::new(2, 2).unwrap();
        screen.set(0, 0, 'A');
        screen.set(1, 0, 'B');
        screen.set(0, 1, 'C');
        screen.set(1, 1, 'D');

        let mut out = Vec::new();
        encode_frame_into(&screen, &mut out).unwrap();
        let encoded = String::from_utf8(out).unwrap();

        assert!(encoded.contains("AABB\r\nCCDD"));
        // No trailing row separator after the last row.
        assert!(!encoded.ends_with("\r\n"));
    }

    #[test]
    fn encoder_prefixes_clear_and_home() {
        let screen = Screen::new(1, 1).unwrap();

        let mut out = Vec::new();
        encode_frame_into(&screen, &mut out).unwrap();
        let encoded = String::from_utf8(out).unwrap();

        // Clear-all then cursor-home, before any glyph.
        let clear = encoded.find("\u{1b}[2J");
        let home = encoded.find("\u{1b}[1;1H");
        let glyph = encoded.find(' ');
        assert!(clear.is_some());
        assert!(home.is_some());
        assert!(clear < home);
        assert!(home.unwrap() < glyph.unwrap());
    }

    #[test]
    fn blank_frame_encodes_doubled_width() {
        let screen = Screen::new(4, 3).unwrap();

        let mut out = Vec::new();
        encode_frame_into(&screen, &mut out).unwrap();
        let encoded = String::from_utf8(out).unwrap();

        let blanks = encoded.chars().filter(|&c| c == ' ').count();
        assert_eq!(blanks, 4 * 3 * 2);
    }
}
