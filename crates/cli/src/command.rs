//! Line commands accepted by the interactive loop.

use tile_core::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
    Restart,
    Quit,
}

impl Command {
    /// `None` for anything unrecognised; the loop prints help instead.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_ascii_lowercase();
        let cmd = match word.as_str() {
            "w" | "k" => Command::Move(Direction::Up),
            "s" | "j" => Command::Move(Direction::Down),
            "a" | "h" => Command::Move(Direction::Left),
            "d" | "l" => Command::Move(Direction::Right),
            "u" | "undo" => Command::Undo,
            "r" | "restart" => Command::Restart,
            "q" | "quit" | "exit" => Command::Quit,
            other => Command::Move(other.parse().ok()?),
        };
        Some(cmd)
    }
}

pub const HELP: &str =
    "moves: w/a/s/d, h/j/k/l or up/down/left/right | u: undo | r: restart | q: quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_words() {
        assert_eq!(Command::parse("w"), Some(Command::Move(Direction::Up)));
        assert_eq!(Command::parse("D"), Some(Command::Move(Direction::Right)));
        assert_eq!(Command::parse("left"), Some(Command::Move(Direction::Left)));
        assert_eq!(Command::parse(" down \n"), Some(Command::Move(Direction::Down)));
        assert_eq!(Command::parse("undo"), Some(Command::Undo));
        assert_eq!(Command::parse("r"), Some(Command::Restart));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_is_none() {
        assert_eq!(Command::parse("x"), None);
        assert_eq!(Command::parse(""), None);
    }
}
