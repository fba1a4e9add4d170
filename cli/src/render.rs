use hexsweeper_core::{CellView, GameState, Snapshot};

/// Text view of a snapshot. Each board row takes two lines: even columns on
/// the first, odd columns half a row lower on the second.
pub(crate) fn render(snapshot: &Snapshot) -> String {
    let (_, cols) = snapshot.size();
    let show_mines = snapshot.state == GameState::Lost;
    let mut out = String::new();

    let mut header = String::from("    ");
    for col in 0..cols {
        header.push(char::from(b'0' + (col % 10) as u8));
        header.push(' ');
    }
    push_line(&mut out, &header);

    for (row, cells) in snapshot.rows().enumerate() {
        for parity in [0, 1] {
            let mut line = if parity == 0 {
                format!("{row:>3} ")
            } else {
                String::from("    ")
            };
            for cell in cells {
                line.push(if cell.col % 2 == parity {
                    glyph(cell, show_mines)
                } else {
                    ' '
                });
                line.push(' ');
            }
            push_line(&mut out, &line);
        }
    }

    let status = match snapshot.state {
        GameState::Playing => format!("Mines left: {}", snapshot.mines_left),
        GameState::Lost => String::from("Boom! Press n to try again"),
        GameState::Won => String::from("Cleared! Press n to play again"),
    };
    push_line(&mut out, &status);
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn glyph(cell: &CellView, show_mines: bool) -> char {
    match (cell.is_revealed, cell.is_flagged, cell.is_mine) {
        (true, _, true) => 'X',
        (true, _, false) => cell
            .visible_count()
            .map_or('.', |count| char::from(b'0' + count)),
        (false, true, _) => 'F',
        (false, false, true) if show_mines => '*',
        _ => '#',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexsweeper_core::{GameConfig, PresetBoardGenerator, Session};

    fn session() -> Session<PresetBoardGenerator> {
        let config = GameConfig::new(2, 2, 0.3).unwrap();
        Session::with_generator(config, PresetBoardGenerator::new(&[(0, 0)])).unwrap()
    }

    #[test]
    fn fresh_board_is_all_hidden() {
        let expected = "    0 1\n  0 #\n      #\n  1 #\n      #\nMines left: 1\n";

        assert_eq!(render(&session().snapshot()), expected);
    }

    #[test]
    fn won_board_keeps_mines_hidden() {
        let mut session = session();
        session.reveal((1, 1)).unwrap();

        let expected = "    0 1\n  0 #\n      1\n  1 1\n      .\nCleared! Press n to play again\n";

        assert_eq!(render(&session.snapshot()), expected);
    }

    #[test]
    fn lost_board_shows_mines_and_flags() {
        let config = GameConfig::new(2, 2, 0.5).unwrap();
        let mut session =
            Session::with_generator(config, PresetBoardGenerator::new(&[(0, 0), (1, 1)])).unwrap();
        session.toggle_flag((0, 0)).unwrap();
        session.reveal((1, 1)).unwrap();

        let expected = "    0 1\n  0 F\n      #\n  1 #\n      X\nBoom! Press n to try again\n";

        assert_eq!(render(&session.snapshot()), expected);
    }
}
