//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full redraw on size changes, per-row diffing otherwise. A turn-based
//! scorekeeper redraws rarely enough that nothing finer is needed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Tone};

const ACCENT: Color = Color::Rgb {
    r: 0xEE,
    g: 0x6F,
    b: 0xF8,
};
const DIM: Color = Color::Rgb {
    r: 0x62,
    g: 0x62,
    b: 0x62,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        for y in 0..fb.height() {
            let changed = match &self.last {
                Some(prev) if !full => (0..fb.width()).any(|x| prev.get(x, y) != fb.get(x, y)),
                _ => true,
            };
            if changed {
                self.draw_row(fb, y)?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        self.last = Some(fb.clone());
        Ok(())
    }

    fn draw_row(&mut self, fb: &FrameBuffer, y: u16) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, y))?;
        let mut current: Option<Tone> = None;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current != Some(cell.tone) {
                self.apply_tone(cell.tone)?;
                current = Some(cell.tone);
            }
            self.stdout.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn apply_tone(&mut self, tone: Tone) -> Result<()> {
        match tone {
            Tone::Normal => {
                self.stdout.queue(ResetColor)?;
            }
            Tone::Accent => {
                self.stdout.queue(SetForegroundColor(ACCENT))?;
            }
            Tone::Dim => {
                self.stdout.queue(SetForegroundColor(DIM))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
