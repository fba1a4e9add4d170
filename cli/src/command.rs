use anyhow::{Context, bail};
use core::str::FromStr;
use hexsweeper_core::{Coord, Coord2};

pub(crate) const HELP: &str = "\
Commands:
  r ROW COL   reveal a cell
  f ROW COL   toggle a flag
  n           start a new game
  h           show this help
  q           quit";

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Restart,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "n" | "new" | "restart" => Self::Restart,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command `{other}`, try `h`"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument `{extra}`");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = parse_axis(words.next(), "row")?;
    let col = parse_axis(words.next(), "column")?;
    Ok((row, col))
}

fn parse_axis(word: Option<&str>, axis: &str) -> anyhow::Result<Coord> {
    let word = word.with_context(|| format!("missing {axis}"))?;
    word.parse()
        .with_context(|| format!("invalid {axis} `{word}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("r 1 2".parse::<Command>().unwrap(), Command::Reveal((1, 2)));
        assert_eq!(
            "  flag 0   4 ".parse::<Command>().unwrap(),
            Command::Flag((0, 4))
        );
        assert_eq!("R 3 3".parse::<Command>().unwrap(), Command::Reveal((3, 3)));
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!("n".parse::<Command>().unwrap(), Command::Restart);
        assert_eq!("restart".parse::<Command>().unwrap(), Command::Restart);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_malformed_input() {
        for line in ["", "x", "r", "r 1", "r -1 2", "f a b", "r 1 2 3", "n now"] {
            assert!(line.parse::<Command>().is_err(), "{line:?}");
        }
    }
}
