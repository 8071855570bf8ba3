use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;

pub fn map_key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('n') => Some(Command::NextProject),
            KeyCode::Char('p') => Some(Command::PrevProject),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Command::NextPage),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Some(Command::PrevPage),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::NextProject),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::PrevProject),
        KeyCode::Char(digit @ '1'..='9') => Some(Command::GotoPage {
            index: digit as usize - '1' as usize,
        }),
        KeyCode::Char('t') => Some(Command::ToggleTheme),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::map_key_to_command;
    use crate::command::Command;

    fn press(code: KeyCode) -> Option<Command> {
        map_key_to_command(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn page_and_project_keys() {
        assert_eq!(press(KeyCode::Char('l')), Some(Command::NextPage));
        assert_eq!(press(KeyCode::Left), Some(Command::PrevPage));
        assert_eq!(press(KeyCode::Char('j')), Some(Command::NextProject));
        assert_eq!(press(KeyCode::Up), Some(Command::PrevProject));
        assert_eq!(press(KeyCode::Char('x')), None);
    }

    #[test]
    fn digits_jump_to_zero_based_page() {
        assert_eq!(press(KeyCode::Char('1')), Some(Command::GotoPage { index: 0 }));
        assert_eq!(press(KeyCode::Char('5')), Some(Command::GotoPage { index: 4 }));
    }

    #[test]
    fn ctrl_c_quits() {
        let quit = map_key_to_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(quit, Some(Command::Quit));
    }
}
