//! Line-oriented input for the `play` command.
//!
//! Moves are written either as direction words (`up`, `left`) or as runs of
//! single letters (`uurrd`). Everything else on a line is a session command.

use std::path::PathBuf;

use anyhow::{Result, bail};
use tower_core::Direction;

/// One decoded input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Queue these moves, in order, and resolve them.
    Moves(Vec<Direction>),
    /// Redraw the current room.
    Show,
    Help,
    /// Write a snapshot of the session to a file.
    Save(PathBuf),
    /// Replace the session state with a snapshot file.
    Load(PathBuf),
    Quit,
}

pub const HELP: &str = "\
moves:    u d l r (runs like `uurr` allowed) or up/down/left/right
show:     redraw the room (also an empty line)
save F:   write a snapshot to F
load F:   restore a snapshot from F
help, quit";

pub fn parse_line(line: &str) -> Result<PlayCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "" | "show" => PlayCommand::Show,
        "?" | "help" => PlayCommand::Help,
        "q" | "quit" | "exit" => PlayCommand::Quit,
        "save" => PlayCommand::Save(path_argument(word, rest)?),
        "load" => PlayCommand::Load(path_argument(word, rest)?),
        _ => PlayCommand::Moves(parse_moves(line)?),
    };
    Ok(command)
}

/// Decodes a move script such as `"uu right dd"`.
pub fn parse_moves(script: &str) -> Result<Vec<Direction>> {
    let mut moves = Vec::new();
    for token in script.split_whitespace() {
        if let Ok(direction) = token.parse::<Direction>() {
            moves.push(direction);
            continue;
        }
        for letter in token.chars() {
            moves.push(direction_letter(letter)?);
        }
    }
    Ok(moves)
}

fn direction_letter(letter: char) -> Result<Direction> {
    let direction = match letter.to_ascii_lowercase() {
        'u' => Direction::Up,
        'd' => Direction::Down,
        'l' => Direction::Left,
        'r' => Direction::Right,
        other => bail!("'{other}' is not a move (use u, d, l or r)"),
    };
    Ok(direction)
}

fn path_argument(command: &str, rest: &str) -> Result<PathBuf> {
    if rest.is_empty() {
        bail!("{command} needs a file path");
    }
    Ok(PathBuf::from(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn letters_and_words_mix() {
        assert_eq!(
            parse_moves("uuR left Down").unwrap(),
            vec![Up, Up, Right, Left, Down]
        );
        assert!(parse_moves("").unwrap().is_empty());
    }

    #[test]
    fn unknown_letter_is_rejected() {
        let error = parse_moves("uux").unwrap_err();
        assert!(error.to_string().contains("'x'"));
    }

    #[test]
    fn session_commands() {
        assert_eq!(parse_line("").unwrap(), PlayCommand::Show);
        assert_eq!(parse_line("  quit ").unwrap(), PlayCommand::Quit);
        assert_eq!(parse_line("?").unwrap(), PlayCommand::Help);
        assert_eq!(
            parse_line("save run one.json").unwrap(),
            PlayCommand::Save(PathBuf::from("run one.json"))
        );
        assert!(parse_line("load").is_err());
        assert_eq!(parse_line("rd").unwrap(), PlayCommand::Moves(vec![Right, Down]));
    }
}
