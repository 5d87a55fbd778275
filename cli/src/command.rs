use floodit_core::{Coord2, Point};
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
the game clock keeps running between commands
commands:
  c COL ROW   click the cell at COL, ROW
  p X Y       click the point X, Y in drawing units
  t [N]       advance N ticks (default 1)
  k KEY       press KEY
  r           press 'r', starts a new board once the game ended
  s           show the board
  json        dump the game state as JSON
  h           show this help
  q           quit";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Click(Coord2),
    Point(Point),
    Tick(u32),
    Key(String),
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}, type 'h' for help")]
    Unknown(String),
    #[error("{0} expects {1} argument(s)")]
    Arity(&'static str, &'static str),
    #[error("invalid number {0:?}")]
    Number(String),
}

fn number<T: FromStr>(arg: &str) -> Result<T, CommandError> {
    arg.parse().map_err(|_| CommandError::Number(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        Ok(match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("c" | "click", [col, row]) => Command::Click((number(col)?, number(row)?)),
            ("c" | "click", _) => return Err(CommandError::Arity("click", "2")),
            ("p" | "point", [x, y]) => Command::Point(Point::new(number(x)?, number(y)?)),
            ("p" | "point", _) => return Err(CommandError::Arity("point", "2")),
            ("t" | "tick", []) => Command::Tick(1),
            ("t" | "tick", [count]) => Command::Tick(number(count)?),
            ("t" | "tick", _) => return Err(CommandError::Arity("tick", "0 or 1")),
            ("k" | "key", [key]) => Command::Key(key.to_string()),
            ("k" | "key", _) => return Err(CommandError::Arity("key", "1")),
            ("r", []) => Command::Key(name.to_string()),
            ("s" | "show", []) => Command::Show,
            ("json", []) => Command::Json,
            ("h" | "help" | "?", []) => Command::Help,
            ("q" | "quit" | "exit", []) => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        })
    }
}
