use tracing::{debug, info};

use crate::engine::board::{ApplyMoveError, Board, coords};
use crate::engine::types::{Cell, Color, Coord, Direction, OutOfBounds};

/// ゲームの進行段階。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Phase {
    /// 進行中。
    InProgress,
    /// 終局（双方とも合法手なし）。
    Over,
}

/// 石数。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Score {
    /// 黒の石数。
    pub black: u32,
    /// 白の石数。
    pub white: u32,
}

impl Score {
    /// 石数から勝敗を判定する。
    #[inline]
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        if self.black > self.white {
            Outcome::Winner(Color::Black)
        } else if self.white > self.black {
            Outcome::Winner(Color::White)
        } else {
            Outcome::Draw
        }
    }
}

/// 終局時の勝敗。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Outcome {
    /// 引き分け。
    Draw,
    /// 勝者。
    Winner(Color),
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("the game is over; no further moves are accepted")]
    GameOver,
    /// 指定マスが合法手ではない（石がある、または何も挟めない）。
    #[error("illegal move: the cell is occupied or brackets no opponent piece")]
    IllegalMove,
    /// 盤外の座標。
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}

/// 着手に成功したときの結果。描画側はこれだけで再描画できる。
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct MoveOutcome {
    /// 打ったマス。
    pub placed: Coord,
    /// 打った側。
    pub mover: Color,
    /// 反転したマス（走査順）。
    pub flipped: Vec<Coord>,
    /// 強制パスされた側（あれば）。
    pub passed: Option<Color>,
    /// 着手後の進行段階。
    pub phase: Phase,
    /// 着手後の手番。
    pub side_to_move: Color,
    /// 着手後の石数。
    pub score: Score,
}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 進行段階。
    phase: Phase,
    /// 手番。
    side_to_move: Color,
}

impl Game {
    /// 着手後の手番交代。強制パスがあればパスされた側を返す。
    fn advance_turn(&mut self) -> Option<Color> {
        let next = self.side_to_move.opponent();
        self.side_to_move = next;

        if self.board.can_play_for(next) {
            return None;
        }

        if self.board.can_play_for(next.opponent()) {
            self.side_to_move = next.opponent();
            info!(passed = %next, side_to_move = %self.side_to_move, "forced pass");
            return Some(next);
        }

        self.phase = Phase::Over;
        let score = self.score();
        info!(black = score.black, white = score.white, "game over");
        None
    }

    /// 符号付き座標で着手する。
    ///
    /// # Errors
    ///
    /// 次の順に判定してエラーを返す（いずれも盤面は変更しない）：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合（座標の妥当性によらない）
    /// - `PlayError::OutOfBounds`: 座標が盤外の場合
    /// - `PlayError::IllegalMove`: 指定されたマスが合法手でない場合
    #[inline]
    pub fn apply_move(&mut self, x: i32, y: i32, z: i32) -> Result<MoveOutcome, PlayError> {
        if self.phase == Phase::Over {
            debug!(x, y, z, "move rejected: game over");
            return Err(PlayError::GameOver);
        }

        let coord = match Coord::new(x, y, z) {
            Ok(value) => value,
            Err(err) => {
                debug!(x, y, z, "move rejected: out of bounds");
                return Err(PlayError::from(err));
            }
        };

        self.play(coord)
    }

    /// 現在の盤面を返す（読み取り専用）。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 指定マスの状態を返す。
    ///
    /// # Errors
    ///
    /// 座標が盤外なら `OutOfBounds` を返す。
    #[inline]
    pub fn cell_at(&self, x: i32, y: i32, z: i32) -> Result<Cell, OutOfBounds> {
        Coord::new(x, y, z).map(|coord| self.board.cell(coord))
    }

    /// `(x, y, z)` から `direction` 方向に挟める相手石を近い順に返す。
    ///
    /// # Errors
    ///
    /// 座標が盤外なら `OutOfBounds` を返す。
    #[inline]
    pub fn flips_in_direction(
        &self,
        x: i32,
        y: i32,
        z: i32,
        direction: Direction,
        color: Color,
    ) -> Result<Vec<Coord>, OutOfBounds> {
        Coord::new(x, y, z).map(|coord| self.board.flips_in_direction(coord, direction, color))
    }

    /// 盤面・手番・段階を直接指定して生成する（テスト用）。
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) const fn from_parts(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            phase: Phase::InProgress,
            side_to_move,
        }
    }

    /// 指定マスが指定手番の合法手かを返す。
    ///
    /// # Errors
    ///
    /// 座標が盤外なら `OutOfBounds` を返す。
    #[inline]
    pub fn is_legal_move(&self, x: i32, y: i32, z: i32, color: Color) -> Result<bool, OutOfBounds> {
        Coord::new(x, y, z).map(|coord| self.board.is_legal_move(coord, color))
    }

    /// 指定手番の合法手を走査順で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Coord> {
        self.board.legal_moves(color)
    }

    /// 初期局面からゲームを開始する。
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            phase: Phase::InProgress,
            side_to_move: Color::Black,
        }
    }

    /// 終局していれば勝敗を返す。
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Over => Some(self.score().outcome()),
            Phase::InProgress => None,
        }
    }

    /// 進行段階を返す。
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// 検証済みの座標に現手番で着手する。
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが合法手でない場合
    #[inline]
    pub fn play(&mut self, coord: Coord) -> Result<MoveOutcome, PlayError> {
        if self.phase == Phase::Over {
            debug!(%coord, "move rejected: game over");
            return Err(PlayError::GameOver);
        }

        let mover = self.side_to_move;
        let (next, flipped) = match self.board.apply_move(coord, mover) {
            Ok(value) => value,
            Err(err) => {
                debug!(%coord, %mover, "move rejected: illegal");
                return Err(match err {
                    ApplyMoveError::IllegalMove => PlayError::IllegalMove,
                });
            }
        };

        self.board = next;
        debug!(%coord, %mover, flipped = flipped.count_ones(), "move applied");

        let passed = self.advance_turn();

        Ok(MoveOutcome {
            placed: coord,
            mover,
            flipped: coords(flipped).collect(),
            passed,
            phase: self.phase,
            side_to_move: self.side_to_move,
            score: self.score(),
        })
    }

    /// 初期局面に戻す。
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    /// 石数を返す。
    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        let (black, white) = self.board.counts();
        Score { black, white }
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
