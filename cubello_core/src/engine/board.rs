use crate::engine::types::{Cell, Color, Coord, DIRECTIONS, Direction};

/// 初期配置の黒石（(1,1,2), (1,2,1), (2,1,1), (2,2,2)）。
const START_BLACK: [Coord; 4] = [
    Coord::from_index_unchecked(22),
    Coord::from_index_unchecked(25),
    Coord::from_index_unchecked(37),
    Coord::from_index_unchecked(42),
];

/// 初期配置の白石（(1,1,1), (1,2,2), (2,1,2), (2,2,1)）。
const START_WHITE: [Coord; 4] = [
    Coord::from_index_unchecked(21),
    Coord::from_index_unchecked(26),
    Coord::from_index_unchecked(38),
    Coord::from_index_unchecked(41),
];

/// 4×4×4 の盤面。1マス1ビットのビットボード2枚で表す。
///
/// 書き込みは crate 内（`Game`）からのみ行う。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 黒石のビットボード。
    black: u64,
    /// 白石のビットボード。
    white: u64,
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub(crate) enum ApplyMoveError {
    /// 指定マスが合法手ではない。
    IllegalMove,
}

impl Board {
    /// 着手を適用し、新しい盤面と反転した石の集合を返す。
    ///
    /// # Errors
    ///
    /// 指定されたマスが合法手でない場合、`ApplyMoveError::IllegalMove` を返す。
    #[inline]
    pub(crate) fn apply_move(self, coord: Coord, color: Color) -> Result<(Self, u64), ApplyMoveError> {
        if !self.is_legal_move(coord, color) {
            return Err(ApplyMoveError::IllegalMove);
        }

        let flipped = self.flips(coord, color);
        let (player, opponent) = self.sides(color);
        let next_player = player | coord.bit() | flipped;
        let next_opponent = opponent & !flipped;

        let next = match color {
            Color::Black => Self {
                black: next_player,
                white: next_opponent,
            },
            Color::White => Self {
                black: next_opponent,
                white: next_player,
            },
        };

        Ok((next, flipped))
    }

    /// 黒石のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn black(self) -> u64 {
        self.black
    }

    /// 指定手番で着手可能かを返す。
    #[inline]
    #[must_use]
    pub fn can_play_for(self, color: Color) -> bool {
        self.legal_moves_mask(color) != u64::MIN
    }

    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell(self, coord: Coord) -> Cell {
        let mask = coord.bit();
        if self.black & mask != u64::MIN {
            Cell::Black
        } else if self.white & mask != u64::MIN {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub const fn counts(self) -> (u32, u32) {
        (self.black.count_ones(), self.white.count_ones())
    }

    /// `origin` に打ったときに反転する石の集合を返す（全方向）。
    #[inline]
    #[must_use]
    pub fn flips(self, origin: Coord, color: Color) -> u64 {
        DIRECTIONS.iter().fold(u64::MIN, |acc, &direction| {
            acc | self.run_in_direction(origin, direction, color)
        })
    }

    /// `origin` から `direction` 方向に挟める相手石を、近い順に返す（1方向）。
    ///
    /// 自分の石で閉じていない列（空きマスや盤端で途切れる列）は空になる。
    #[inline]
    #[must_use]
    pub fn flips_in_direction(self, origin: Coord, direction: Direction, color: Color) -> Vec<Coord> {
        let run = self.run_in_direction(origin, direction, color);

        core::iter::successors(origin.step(direction), |coord| coord.step(direction))
            .take_while(|coord| run & coord.bit() != u64::MIN)
            .collect()
    }

    /// 盤面を生のビットボードから生成する（crate 内部向け）。
    ///
    /// - `black` と `white` は重複しないこと（`black & white == 0`）
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) const fn from_raw(black: u64, white: u64) -> Self {
        Self { black, white }
    }

    /// 初期局面を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let black = START_BLACK.iter().fold(u64::MIN, |acc, coord| acc | coord.bit());
        let white = START_WHITE.iter().fold(u64::MIN, |acc, coord| acc | coord.bit());

        Self { black, white }
    }

    /// 指定手番にとって `coord` が合法手かを返す。
    #[inline]
    #[must_use]
    pub fn is_legal_move(self, coord: Coord, color: Color) -> bool {
        if self.occupied() & coord.bit() != u64::MIN {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&direction| self.run_in_direction(coord, direction, color) != u64::MIN)
    }

    /// 指定手番の合法手を走査順（x→y→z の昇順）で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(self, color: Color) -> Vec<Coord> {
        coords(self.legal_moves_mask(color)).collect()
    }

    /// 指定手番の合法手ビットボードを返す。
    #[inline]
    #[must_use]
    pub fn legal_moves_mask(self, color: Color) -> u64 {
        Coord::all()
            .filter(|&coord| self.is_legal_move(coord, color))
            .fold(u64::MIN, |acc, coord| acc | coord.bit())
    }

    /// 盤面の占有ビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn occupied(self) -> u64 {
        self.black | self.white
    }

    /// 1方向の挟み判定。閉じた列ならその相手石のビット集合、そうでなければ0。
    fn run_in_direction(self, origin: Coord, direction: Direction, color: Color) -> u64 {
        let (player, opponent) = self.sides(color);
        let mut run = u64::MIN;
        let mut cursor = origin.step(direction);

        while let Some(coord) = cursor {
            let bit = coord.bit();
            if opponent & bit != u64::MIN {
                run |= bit;
            } else if player & bit != u64::MIN {
                return run;
            } else {
                return u64::MIN;
            }
            cursor = coord.step(direction);
        }

        u64::MIN
    }

    /// （手番側、相手側）のビットボードを返す。
    const fn sides(self, color: Color) -> (u64, u64) {
        match color {
            Color::Black => (self.black, self.white),
            Color::White => (self.white, self.black),
        }
    }

    /// 白石のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn white(self) -> u64 {
        self.white
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

/// ビットボードに立っているマスを昇順に返す。
#[inline]
pub fn coords(mask: u64) -> impl Iterator<Item = Coord> {
    core::iter::successors(Some(mask), |&bits| Some(bits & bits.wrapping_sub(1)))
        .take_while(|&bits| bits != u64::MIN)
        .filter_map(|bits| u8::try_from(bits.trailing_zeros()).ok())
        .map(Coord::from_index_unchecked)
}

#[cfg(test)]
mod tests {
    use super::{Board, coords};
    use crate::engine::types::{Cell, Color, Coord, DIRECTIONS, Direction};

    fn at(x: i32, y: i32, z: i32) -> Coord {
        Coord::new(x, y, z).unwrap_or_else(|err| panic!("bad test coordinate: {err}"))
    }

    fn dir(dx: i8, dy: i8, dz: i8) -> Direction {
        Direction::new(dx, dy, dz).unwrap_or_else(|| panic!("bad test direction"))
    }

    fn mask(cells: &[(i32, i32, i32)]) -> u64 {
        cells
            .iter()
            .fold(u64::MIN, |acc, &(x, y, z)| acc | at(x, y, z).bit())
    }

    #[test]
    fn initial_layout_is_two_interleaved_tetrahedra() {
        let board = Board::initial();
        assert_eq!(board.counts(), (4, 4));
        assert_eq!(board.black() & board.white(), u64::MIN);

        for (x, y, z) in [(1, 1, 2), (1, 2, 1), (2, 1, 1), (2, 2, 2)] {
            assert_eq!(board.cell(at(x, y, z)), Cell::Black, "({x}, {y}, {z})");
        }
        for (x, y, z) in [(1, 1, 1), (1, 2, 2), (2, 1, 2), (2, 2, 1)] {
            assert_eq!(board.cell(at(x, y, z)), Cell::White, "({x}, {y}, {z})");
        }
    }

    #[test]
    fn initial_legal_moves_for_black_in_scan_order() {
        let expected: Vec<Coord> = [
            (0, 0, 0),
            (0, 1, 1),
            (0, 2, 2),
            (0, 3, 3),
            (1, 0, 1),
            (1, 1, 0),
            (1, 2, 3),
            (1, 3, 2),
            (2, 0, 2),
            (2, 1, 3),
            (2, 2, 0),
            (2, 3, 1),
            (3, 0, 3),
            (3, 1, 2),
            (3, 2, 1),
            (3, 3, 0),
        ]
        .iter()
        .map(|&(x, y, z)| at(x, y, z))
        .collect();

        assert_eq!(Board::initial().legal_moves(Color::Black), expected);
        assert_eq!(Board::initial().legal_moves(Color::White).len(), 16);
    }

    #[test]
    fn run_closed_by_own_piece_is_returned_nearest_first() {
        // (0,0,0) 黒, (0,0,1) (0,0,2) 白, (0,0,3) に黒が打つ。
        let board = Board::from_raw(mask(&[(0, 0, 0)]), mask(&[(0, 0, 1), (0, 0, 2)]));
        let run = board.flips_in_direction(at(0, 0, 3), dir(0, 0, -1), Color::Black);

        assert_eq!(run, vec![at(0, 0, 2), at(0, 0, 1)]);
        assert_eq!(board.flips(at(0, 0, 3), Color::Black), mask(&[(0, 0, 1), (0, 0, 2)]));
    }

    #[test]
    fn run_ending_on_empty_or_edge_is_discarded() {
        // 白石の列が空きマスで途切れる。
        let gap = Board::from_raw(mask(&[(0, 0, 3)]), mask(&[(0, 0, 1)]));
        assert!(gap.flips_in_direction(at(0, 0, 0), dir(0, 0, 1), Color::Black).is_empty());

        // 白石の列が盤端に達する。
        let edge = Board::from_raw(u64::MIN, mask(&[(0, 0, 2), (0, 0, 3)]));
        assert!(edge.flips_in_direction(at(0, 0, 1), dir(0, 0, 1), Color::Black).is_empty());

        // 隣が自分の石なら反転なし。
        let own = Board::from_raw(mask(&[(0, 0, 1)]), mask(&[(0, 0, 2)]));
        assert!(own.flips_in_direction(at(0, 0, 0), dir(0, 0, 1), Color::Black).is_empty());
    }

    #[test]
    fn space_diagonal_runs_are_bracketed() {
        let board = Board::from_raw(mask(&[(3, 3, 3)]), mask(&[(1, 1, 1), (2, 2, 2)]));
        let run = board.flips_in_direction(at(0, 0, 0), dir(1, 1, 1), Color::Black);

        assert_eq!(run, vec![at(1, 1, 1), at(2, 2, 2)]);
        assert!(board.is_legal_move(at(0, 0, 0), Color::Black));
        assert!(!board.is_legal_move(at(0, 0, 0), Color::White));
    }

    #[test]
    fn flips_are_the_union_over_directions() {
        // (1,1,1) に黒が打つと z 方向と y 方向の2列を同時に挟む。
        let board = Board::from_raw(
            mask(&[(1, 1, 3), (1, 3, 1)]),
            mask(&[(1, 1, 2), (1, 2, 1)]),
        );

        assert_eq!(
            board.flips(at(1, 1, 1), Color::Black),
            mask(&[(1, 1, 2), (1, 2, 1)])
        );

        let applied = board.apply_move(at(1, 1, 1), Color::Black);
        assert!(applied.is_ok());
        if let Ok((next, flipped)) = applied {
            assert_eq!(flipped, mask(&[(1, 1, 2), (1, 2, 1)]));
            assert_eq!(next.counts(), (5, 0));
            assert_eq!(next.cell(at(1, 1, 1)), Cell::Black);
        }
    }

    #[test]
    fn occupied_cell_is_never_legal() {
        let board = Board::initial();
        for coord in coords(board.occupied()) {
            assert!(!board.is_legal_move(coord, Color::Black));
            assert!(!board.is_legal_move(coord, Color::White));
        }
        assert!(board.apply_move(at(1, 1, 1), Color::Black).is_err());
    }

    #[test]
    fn legality_agrees_with_enumeration() {
        let board = Board::initial();
        for color in [Color::Black, Color::White] {
            let moves = board.legal_moves(color);
            for coord in Coord::all() {
                assert_eq!(
                    board.is_legal_move(coord, color),
                    moves.contains(&coord),
                    "{color} at {coord}"
                );
            }
        }
    }

    #[test]
    fn seed_corner_brackets_nothing_for_black() {
        let board = Board::initial();
        let corner = at(3, 3, 3);
        for direction in DIRECTIONS {
            assert!(board.flips_in_direction(corner, direction, Color::Black).is_empty());
        }
    }

    #[test]
    fn coords_iterates_bits_in_ascending_order() {
        let bits = mask(&[(3, 0, 0), (0, 0, 1), (1, 2, 3)]);
        let listed: Vec<Coord> = coords(bits).collect();
        assert_eq!(listed, vec![at(0, 0, 1), at(1, 2, 3), at(3, 0, 0)]);
        assert_eq!(coords(u64::MIN).count(), 0);
        assert_eq!(coords(u64::MAX).count(), 64);
    }
}
