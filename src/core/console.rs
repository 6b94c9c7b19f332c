/// Console surface — screen clearing, line output, and line input.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};

/// The terminal the game talks to.
///
/// The engine owns no I/O of its own; everything the player sees or
/// types goes through this trait.
pub trait Console {
    /// Clear the screen before a scene or menu is drawn.
    fn clear(&mut self) -> io::Result<()>;

    /// Write text exactly as given.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write a line of text.
    fn say(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Console backed by the process's stdin and stdout.
pub struct Terminal {
    stdin: io::Stdin,
    stdout: io::Stdout,
    clear_screen: bool,
}

impl Terminal {
    pub fn new(clear_screen: bool) -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
            clear_screen,
        }
    }
}

impl Console for Terminal {
    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
