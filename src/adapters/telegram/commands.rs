//! Slash-command parsing.

use crate::application::Command;

/// Parses a message as a slash-command. `None` means ordinary text.
///
/// A trailing bot mention (`/start@some_bot`) is accepted and stripped.
pub fn parse_command(text: &str) -> Option<Command> {
    let trimmed = text.trim();
    if !trimmed.starts_with('/') {
        return None;
    }
    let name = trimmed.split_whitespace().next()?;
    let name = name.split('@').next()?;
    match name {
        "/start" => Some(Command::Start),
        "/newpatient" => Some(Command::NewPatient),
        "/exit" => Some(Command::Cancel),
        "/letak_karies" => Some(Command::CariesGallery),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_commands_parse() {
        assert_eq!(parse_command("/start"), Some(Command::Start));
        assert_eq!(parse_command("/newpatient"), Some(Command::NewPatient));
        assert_eq!(parse_command("/exit"), Some(Command::Cancel));
        assert_eq!(parse_command("/letak_karies"), Some(Command::CariesGallery));
    }

    #[test]
    fn bot_mention_is_stripped() {
        assert_eq!(parse_command("/start@klinik_bot"), Some(Command::Start));
    }

    #[test]
    fn ordinary_text_is_not_a_command() {
        assert_eq!(parse_command("Budi"), None);
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command("/unknown"), None);
    }
}
