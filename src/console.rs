//! Line-oriented console used by the driver.
//!
//! [`Terminal`] talks to stdin/stdout/stderr and hides the subscription key
//! while it is typed. [`BufferedConsole`] reads from any `BufRead` and writes
//! everything to one `Write`, which is what the driver tests use.

use std::io::{self, BufRead, IsTerminal, Write};

/// Prompt/response I/O for the interactive runner.
pub trait Console {
    /// Write one line of regular output.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Write one line of diagnostic output.
    fn warn(&mut self, line: &str) -> io::Result<()>;

    /// Print `prompt` and read one line without its terminator.
    /// Returns `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Like [`Console::ask`], but for secrets.
    fn ask_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.ask(prompt)
    }
}

fn strip_line_ending(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    line
}

/// Read one line. Bytes that are not UTF-8 become U+FFFD, so a garbled line
/// is still just an answer that matches nothing.
fn read_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    match reader.read_until(b'\n', &mut line)? {
        0 => Ok(None),
        _ => Ok(Some(
            String::from_utf8_lossy(&strip_line_ending(line)).into_owned(),
        )),
    }
}

/// The process terminal.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }
}

impl Console for Terminal {
    fn say(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
    }

    fn warn(&mut self, line: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", line)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        drop(stdout);

        read_line(&mut io::stdin().lock())
    }

    fn ask_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !io::stdin().is_terminal() {
            return self.ask(prompt);
        }

        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Console over an arbitrary reader and writer.
#[derive(Debug)]
pub struct BufferedConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BufferedConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for BufferedConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn warn(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        read_line(&mut self.reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_strips_line_endings() {
        let mut console = BufferedConsole::new(Cursor::new("first\nsecond\r\nlast"), Vec::new());
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("last"));
        assert_eq!(console.ask("> ").unwrap(), None);
    }

    #[test]
    fn test_ask_keeps_inner_whitespace() {
        let mut console = BufferedConsole::new(Cursor::new(" 1 \n\n"), Vec::new());
        assert_eq!(console.ask("").unwrap().as_deref(), Some(" 1 "));
        assert_eq!(console.ask("").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_ask_replaces_invalid_utf8() {
        let input: &[u8] = &[0xff, 0xfe, b'\n', b'0', b'\n'];
        let mut console = BufferedConsole::new(Cursor::new(input), Vec::new());
        assert_eq!(
            console.ask("").unwrap().as_deref(),
            Some("\u{FFFD}\u{FFFD}")
        );
        assert_eq!(console.ask("").unwrap().as_deref(), Some("0"));
        assert_eq!(console.ask("").unwrap(), None);
    }

    #[test]
    fn test_prompts_and_lines_are_written() {
        let mut console = BufferedConsole::new(Cursor::new("x\n"), Vec::new());
        console.say("hello").unwrap();
        console.ask_secret("key: ").unwrap();
        console.warn("oops").unwrap();

        let (_, out) = console.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "hello\nkey: oops\n");
    }
}
