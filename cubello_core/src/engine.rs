/// 盤面（ビットボード）と挟み判定・合法手の実装。
pub mod board;
/// ゲーム進行（手番、パス、終局判定など）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type Cell = types::Cell;
pub type Color = types::Color;
pub type Coord = types::Coord;
pub type Direction = types::Direction;
pub type Game = game::Game;
pub type MoveOutcome = game::MoveOutcome;
pub type Outcome = game::Outcome;
pub type OutOfBounds = types::OutOfBounds;
pub type Phase = game::Phase;
pub type PlayError = game::PlayError;
pub type Score = game::Score;

pub use types::DIRECTIONS;
