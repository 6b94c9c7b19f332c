//! Blocking prompts built on top of [`Console`].
//!
//! Every prompt re-reads input in a loop until it gets an acceptable
//! answer; only a closed input stream ends the wait early.

use log::debug;

use crate::core::console::Console;
use crate::core::game::SessionError;

/// Prompt shown when choosing an action or menu entry.
pub const CHOICE_PROMPT: &str = "? ";
/// Prompt shown when asking for a password.
pub const PASSWORD_PROMPT: &str = "> ";
const PAUSE_PROMPT: &str = "Press ENTER to continue...";

/// Read a non-empty line, trimmed and lower-cased.
pub fn get_input(console: &mut dyn Console, prompt: &str) -> Result<String, SessionError> {
    loop {
        let line = console
            .read_line(prompt)?
            .ok_or(SessionError::InputClosed)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_lowercase());
        }
    }
}

/// Ask for an integer in `[min, max]`, re-prompting until one is given.
pub fn ask_choice(console: &mut dyn Console, min: usize, max: usize) -> Result<usize, SessionError> {
    loop {
        let input = get_input(console, CHOICE_PROMPT)?;
        match input.parse::<i64>() {
            Ok(n) if n >= min as i64 && n <= max as i64 => return Ok(n as usize),
            _ => {
                debug!("rejected choice '{}' outside {}..={}", input, min, max);
                console.say(&format!(
                    "Invalid input. Choose an integer between {} and {}",
                    min, max
                ))?;
            }
        }
    }
}

/// Wait for the player to press ENTER. A closed input does not block.
pub fn pause(console: &mut dyn Console) -> Result<(), SessionError> {
    console.read_line(PAUSE_PROMPT)?;
    Ok(())
}

/// Show a recoverable error and wait for acknowledgement.
pub fn report_error(console: &mut dyn Console, message: &str) -> Result<(), SessionError> {
    console.say(&format!("ERROR!\n  {}", message))?;
    pause(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConsole;

    #[test]
    fn get_input_skips_blank_lines() {
        let mut console = ScriptedConsole::new(["", "   ", "  HeLLo "]);
        assert_eq!(get_input(&mut console, "? ").unwrap(), "hello");
        assert_eq!(console.prompts(), vec!["? ", "? ", "? "]);
    }

    #[test]
    fn get_input_closed() {
        let mut console = ScriptedConsole::new(Vec::<&str>::new());
        assert!(matches!(
            get_input(&mut console, "? "),
            Err(SessionError::InputClosed)
        ));
    }

    #[test]
    fn ask_choice_reprompts_until_in_range() {
        let mut console = ScriptedConsole::new(["x", "5", "-1", "2"]);
        assert_eq!(ask_choice(&mut console, 0, 3).unwrap(), 2);
        let out = console.output();
        assert_eq!(
            out.matches("Invalid input. Choose an integer between 0 and 3")
                .count(),
            3
        );
    }

    #[test]
    fn ask_choice_accepts_bounds() {
        let mut console = ScriptedConsole::new(["1", "4"]);
        assert_eq!(ask_choice(&mut console, 1, 4).unwrap(), 1);
        assert_eq!(ask_choice(&mut console, 1, 4).unwrap(), 4);
    }

    #[test]
    fn report_error_format() {
        let mut console = ScriptedConsole::new([""]);
        report_error(&mut console, "Tag 9 leads nowhere.").unwrap();
        assert!(console.output().contains("ERROR!\n  Tag 9 leads nowhere.\n"));
        assert_eq!(console.remaining(), 0);
    }
}
