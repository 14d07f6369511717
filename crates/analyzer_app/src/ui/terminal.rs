use std::io::{self, IsTerminal, Write};

use analyzer_logging::analyzer_warn;
use crossterm::style::{style, Color, Stylize};

use super::render::{Frame, Line, Tone};

/// Prints frames to stdout, skipping sections identical to the last frame.
#[derive(Debug, Default)]
pub struct Terminal {
    last: Frame,
}

impl Terminal {
    pub fn draw(&mut self, frame: &Frame) {
        let colored = io::stdout().is_terminal();
        let sections = [
            (&self.last.form, &frame.form),
            (&self.last.status, &frame.status),
            (&self.last.result, &frame.result),
        ];

        let mut stdout = io::stdout().lock();
        for (before, after) in sections {
            if before == after || after.is_empty() {
                continue;
            }
            if let Err(err) = write_section(&mut stdout, after, colored) {
                analyzer_warn!("Failed to write to stdout: {}", err);
                return;
            }
        }
        self.last = frame.clone();
    }
}

fn write_section(out: &mut impl Write, lines: &[Line], colored: bool) -> io::Result<()> {
    for line in lines {
        if colored {
            writeln!(out, "{}", styled(line))?;
        } else {
            writeln!(out, "{}", line.text)?;
        }
    }
    writeln!(out)?;
    out.flush()
}

fn styled(line: &Line) -> crossterm::style::StyledContent<&str> {
    let text = style(line.text.as_str());
    match line.tone {
        Tone::Plain => text,
        Tone::Heading => text.with(Color::Magenta).bold(),
        Tone::Muted => text.with(Color::DarkGrey),
        Tone::Accent => text.with(Color::Magenta),
        Tone::Error => text.with(Color::Red).bold(),
        Tone::Good => text.with(Color::Green),
        Tone::Fair => text.with(Color::Yellow),
        Tone::Poor => text.with(Color::Red),
    }
}
