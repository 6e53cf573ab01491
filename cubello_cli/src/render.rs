//! Text rendering of the board and game status.

use core::fmt::Write as _;

use cubello_core::engine;

/// Draws the four x-layers top to bottom; rows are y, columns are z.
///
/// `X` is Black, `O` is White, `.` is empty and `*` marks a legal move for
/// the side to move when `hints` is on.
pub fn board(game: &engine::Game, hints: bool) -> String {
    let legal = if hints && game.phase() == engine::Phase::InProgress {
        game.legal_moves(game.side_to_move())
    } else {
        Vec::new()
    };

    let mut text = String::new();
    for coord in engine::Coord::all() {
        if coord.y() == 0 && coord.z() == 0 {
            let _ = writeln!(text, "x={}", coord.x());
        }
        if coord.z() == 0 {
            text.push_str("  ");
        }

        let mark = match game.board().cell(coord) {
            engine::Cell::Black => 'X',
            engine::Cell::White => 'O',
            engine::Cell::Empty if legal.contains(&coord) => '*',
            engine::Cell::Empty => '.',
        };
        text.push(mark);
        text.push(if coord.z() == 3 { '\n' } else { ' ' });
    }

    text
}

/// One-line summary: whose turn it is, or the result once the game is over.
pub fn status(game: &engine::Game) -> String {
    let score = game.score();
    let tally = format!("Black {} - White {}", score.black, score.white);

    match game.outcome() {
        None => format!("{} to move | {tally}", game.side_to_move()),
        Some(engine::Outcome::Winner(color)) => format!("Game over: {color} wins | {tally}"),
        Some(_) => format!("Game over: draw | {tally}"),
    }
}

/// Notice shown when a side had to skip its turn.
pub fn pass_notice(passed: engine::Color) -> String {
    format!("No legal moves for {passed}. Turn passes to {}.", passed.opponent())
}

pub fn coord_list(coords: &[engine::Coord]) -> String {
    if coords.is_empty() {
        return "none".to_owned();
    }

    coords
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{board, coord_list, pass_notice, status};
    use cubello_core::engine;

    #[test]
    fn initial_board() {
        let game = engine::Game::new();
        let expected = "\
x=0
  . . . .
  . . . .
  . . . .
  . . . .
x=1
  . . . .
  . O X .
  . X O .
  . . . .
x=2
  . . . .
  . X O .
  . O X .
  . . . .
x=3
  . . . .
  . . . .
  . . . .
  . . . .
";
        assert_eq!(board(&game, false), expected);
    }

    #[test]
    fn hints_mark_every_legal_move() {
        let game = engine::Game::new();
        let drawn = board(&game, true);
        assert_eq!(drawn.matches('*').count(), 16);
        assert!(drawn.starts_with("x=0\n  * . . .\n"));
    }

    #[test]
    fn status_lines() {
        let mut game = engine::Game::new();
        assert_eq!(status(&game), "Black to move | Black 4 - White 4");

        assert!(game.apply_move(0, 1, 1).is_ok());
        assert_eq!(status(&game), "White to move | Black 6 - White 3");
    }

    #[test]
    fn notices_and_lists() {
        assert_eq!(
            pass_notice(engine::Color::Black),
            "No legal moves for Black. Turn passes to White."
        );
        assert_eq!(coord_list(&[]), "none");

        let game = engine::Game::new();
        let moves = game.legal_moves(engine::Color::Black);
        assert!(coord_list(&moves).starts_with("(0, 0, 0) (0, 1, 1)"));
    }
}
