//! Single-key command parsing.

/// One keypress delivered by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl-C, or end of input on a non-interactive stdin.
    Interrupt,
}

/// Parsed command actions consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddTask,
    ToggleTask,
    DeleteTask,
    SwitchTheme,
    NewTheme,
    Quit,
    Interrupt,
    Unknown(char),
}

/// Map one key to its command. Matching is case-sensitive.
pub fn parse_key(key: Key) -> Command {
    match key {
        Key::Interrupt => Command::Interrupt,
        Key::Char('a') => Command::AddTask,
        Key::Char('t') => Command::ToggleTask,
        Key::Char('d') => Command::DeleteTask,
        Key::Char('s') => Command::SwitchTheme,
        Key::Char('n') => Command::NewTheme,
        Key::Char('q') => Command::Quit,
        Key::Char(other) => Command::Unknown(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_help_line_key_parses_to_a_known_command() {
        for key in ['a', 't', 'd', 's', 'n', 'q'] {
            assert!(
                !matches!(parse_key(Key::Char(key)), Command::Unknown(_)),
                "{key} is unbound"
            );
        }
    }

    #[test]
    fn unbound_and_uppercase_keys_are_unknown() {
        assert_eq!(parse_key(Key::Char('x')), Command::Unknown('x'));
        assert_eq!(parse_key(Key::Char('A')), Command::Unknown('A'));
    }

    #[test]
    fn interrupt_key_maps_to_interrupt() {
        assert_eq!(parse_key(Key::Interrupt), Command::Interrupt);
    }
}
