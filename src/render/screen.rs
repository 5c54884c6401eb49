//! Terminal screen: raw mode, alternate screen and styled drawing.
//!
//! Every frame is queued with `crossterm` and flushed once at the end.

use super::board::{self, Tone};
use crate::models::color::Color;
use crate::shared::snapshot::RenderState;
use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

/// Terminal color of a lit button.
fn term_color(color: Color) -> TermColor {
    let [r, g, b, _] = color.rgba();
    TermColor::Rgb {
        r: (r * 255.0) as u8,
        g: (g * 255.0) as u8,
        b: (b * 255.0) as u8,
    }
}

pub struct Screen<W: Write> {
    writer: W,
}

impl<W: Write> Screen<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Enters raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )
    }

    /// Restores the terminal left by `init`.
    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    /// Draws one full frame.
    pub fn draw(&mut self, state: &RenderState) -> io::Result<()> {
        queue!(self.writer, MoveTo(0, 0), Clear(ClearType::All))?;

        for line in board::layout(state) {
            for span in &line {
                let text = Print(span.text.as_str());
                match span.tone {
                    Tone::Plain => queue!(self.writer, text)?,
                    Tone::Lit(color) => queue!(
                        self.writer,
                        SetForegroundColor(term_color(color)),
                        SetAttribute(Attribute::Bold),
                        text,
                        SetAttribute(Attribute::Reset),
                        ResetColor
                    )?,
                    Tone::Dim => queue!(
                        self.writer,
                        SetAttribute(Attribute::Dim),
                        text,
                        SetAttribute(Attribute::Reset)
                    )?,
                }
            }
            // Raw mode does not return the carriage on its own.
            queue!(self.writer, Print("\r\n"))?;
        }

        self.writer.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}
