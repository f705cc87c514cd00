//! Output targets for rendering reports.

use std::io::{self, Write};

/// Marker in front of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bullet {
    /// A file that was just created.
    Added,
    Plain,
}

impl Bullet {
    fn as_str(self) -> &'static str {
        match self {
            Bullet::Added => "+",
            Bullet::Plain => "-",
        }
    }
}

/// Semantic sink a [`Report`] draws itself onto.
pub trait Output {
    fn heading(&mut self, text: &str);
    fn field(&mut self, key: &str, value: &str);
    fn item(&mut self, bullet: Bullet, text: &str);
    /// Problems go to a separate stream from regular output.
    fn problem(&mut self, text: &str);
    fn divider(&mut self, label: &str);
    fn text(&mut self, text: &str);
    fn blank(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain-text output over a pair of writers.
///
/// Write errors (a closed pipe, usually) are ignored: there is nowhere
/// left to report them.
pub struct TextOutput<O, E> {
    out: O,
    err: E,
}

/// Text output on the process's stdout and stderr.
pub type TerminalOutput = TextOutput<io::Stdout, io::Stderr>;

impl TerminalOutput {
    pub fn new() -> Self {
        TextOutput {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> Output for TextOutput<O, E> {
    fn heading(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}:", text);
    }

    fn field(&mut self, key: &str, value: &str) {
        let _ = writeln!(self.out, "{}: {}", key, value);
    }

    fn item(&mut self, bullet: Bullet, text: &str) {
        let _ = writeln!(self.out, "  {} {}", bullet.as_str(), text);
    }

    fn problem(&mut self, text: &str) {
        let _ = writeln!(self.err, "{}", text);
    }

    fn divider(&mut self, label: &str) {
        let _ = writeln!(self.out, "── {} ──", label);
    }

    fn text(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    fn blank(&mut self) {
        let _ = writeln!(self.out);
    }
}

/// In-memory output for inspecting what a report renders.
#[cfg(test)]
pub type BufferOutput = TextOutput<Vec<u8>, Vec<u8>>;

#[cfg(test)]
impl BufferOutput {
    pub fn buffered() -> Self {
        TextOutput {
            out: Vec::new(),
            err: Vec::new(),
        }
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}
