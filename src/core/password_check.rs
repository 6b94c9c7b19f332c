use crate::core::console::Console;
use crate::core::game::SessionError;
use crate::core::prompt::{get_input, PASSWORD_PROMPT};
use crate::schema::password::{EntryRule, Password};

/// Ask the player for `password`, returning whether the attempt matched.
///
/// The password's own entry rule wins over `default_rule`. Attempts the
/// rule rejects are not counted; the player is asked again.
pub fn check(
    console: &mut dyn Console,
    password: &Password,
    default_rule: EntryRule,
) -> Result<bool, SessionError> {
    let rule = password.entry().unwrap_or(default_rule);
    loop {
        let attempt = get_input(console, PASSWORD_PROMPT)?;
        if rule.accepts(&attempt) {
            return Ok(password.matches(&attempt));
        }
        console.say(rule.rejection_message())?;
    }
}
