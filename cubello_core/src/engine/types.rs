use core::fmt;

/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Black => formatter.write_str("Black"),
            Self::White => formatter.write_str("White"),
        }
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    /// 空きマス。
    Empty,
    /// 黒石。
    Black,
    /// 白石。
    White,
}

impl From<Color> for Cell {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

/// 盤外の座標が指定された。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("coordinate ({x}, {y}, {z}) is outside the 4x4x4 lattice")]
pub struct OutOfBounds {
    /// 指定された x。
    pub x: i32,
    /// 指定された y。
    pub y: i32,
    /// 指定された z。
    pub z: i32,
}

/// 格子上のマス（0..=63のインデックス）。
///
/// インデックスは `x * 16 + y * 4 + z`。昇順に並べると x→y→z の走査順になる。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coord(
    /// `x * 16 + y * 4 + z` に対応する0..=63の値。
    u8,
);

impl Coord {
    /// 1軸あたりのマス数。
    pub const BOARD_LEN: u8 = 4;

    /// 1層（x 固定）あたりのマス数。
    const LAYER_LEN: u8 = 16;

    /// 全マス数。
    pub const CELL_COUNT: u8 = 64;

    /// 符号付きの座標から `Coord` を生成する。
    ///
    /// # Errors
    ///
    /// いずれかの軸が 0..=3 の範囲外なら `OutOfBounds` を返す。
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, OutOfBounds> {
        match (axis(x), axis(y), axis(z)) {
            (Some(ax), Some(ay), Some(az)) => Ok(Self::from_axes(ax, ay, az)),
            _ => Err(OutOfBounds { x, y, z }),
        }
    }

    /// 軸座標（x, y, z）から `Coord` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_xyz(x: u8, y: u8, z: u8) -> Option<Self> {
        if x >= Self::BOARD_LEN || y >= Self::BOARD_LEN || z >= Self::BOARD_LEN {
            return None;
        }

        Some(Self::from_axes(x, y, z))
    }

    /// 範囲チェック済みの軸座標から生成する。
    #[inline]
    const fn from_axes(x: u8, y: u8, z: u8) -> Self {
        Self(
            x.wrapping_mul(Self::LAYER_LEN)
                .wrapping_add(y.wrapping_mul(Self::BOARD_LEN))
                .wrapping_add(z),
        )
    }

    /// インデックスから `Coord` を生成する（範囲チェックなし）。
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// 全マスを走査順に返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::MIN..Self::CELL_COUNT).map(Self::from_index_unchecked)
    }

    /// そのマスを表すビット（`u64`）を返す。
    #[inline]
    #[must_use]
    pub fn bit(self) -> u64 {
        let one = u64::MIN.wrapping_add(1);
        let shift = u32::from(self.0);

        one.checked_shl(shift).unwrap_or(u64::MIN)
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// `direction` 方向へ1マス進んだ座標を返す。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let x = i32::from(self.x()).saturating_add(i32::from(direction.dx));
        let y = i32::from(self.y()).saturating_add(i32::from(direction.dy));
        let z = i32::from(self.z()).saturating_add(i32::from(direction.dz));

        Self::new(x, y, z).ok()
    }

    /// x 座標（0..=3）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        match self.0.checked_div(Self::LAYER_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// y 座標（0..=3）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        let in_layer = match self.0.checked_rem(Self::LAYER_LEN) {
            Some(value) => value,
            None => u8::MIN,
        };

        match in_layer.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// z 座標（0..=3）を返す。
    #[inline]
    #[must_use]
    pub const fn z(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

impl fmt::Display for Coord {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

/// 1軸の値を 0..=3 に収まる `u8` に変換する。
fn axis(value: i32) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|&converted| converted < Coord::BOARD_LEN)
}

/// 格子上の方向ベクトル（各成分 -1, 0, 1、零ベクトルを除く）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    /// x 成分。
    dx: i8,
    /// y 成分。
    dy: i8,
    /// z 成分。
    dz: i8,
}

impl Direction {
    /// 方向の総数（3^3 - 1）。
    pub const COUNT: usize = 26;

    /// 成分から方向を生成する。成分が範囲外、または零ベクトルなら `None`。
    #[inline]
    #[must_use]
    pub const fn new(dx: i8, dy: i8, dz: i8) -> Option<Self> {
        if !is_unit(dx) || !is_unit(dy) || !is_unit(dz) {
            return None;
        }
        if dx == 0 && dy == 0 && dz == 0 {
            return None;
        }

        Some(Self { dx, dy, dz })
    }

    /// 反対方向を返す。
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            dx: self.dx.wrapping_neg(),
            dy: self.dy.wrapping_neg(),
            dz: self.dz.wrapping_neg(),
        }
    }

    /// x 成分。
    #[inline]
    #[must_use]
    pub const fn dx(self) -> i8 {
        self.dx
    }

    /// y 成分。
    #[inline]
    #[must_use]
    pub const fn dy(self) -> i8 {
        self.dy
    }

    /// z 成分。
    #[inline]
    #[must_use]
    pub const fn dz(self) -> i8 {
        self.dz
    }
}

/// -1, 0, 1 のいずれか。
const fn is_unit(component: i8) -> bool {
    component >= -1 && component <= 1
}

/// 全26方向（(dx, dy, dz) の辞書順）。
pub const DIRECTIONS: [Direction; Direction::COUNT] = build_directions();

/// `DIRECTIONS` をコンパイル時に構築する。
#[allow(
    clippy::indexing_slicing,
    reason = "const 評価中の範囲外アクセスはコンパイルエラーになる"
)]
const fn build_directions() -> [Direction; Direction::COUNT] {
    let mut table = [Direction {
        dx: 0,
        dy: 0,
        dz: 0,
    }; Direction::COUNT];
    let mut slot = 0_usize;

    let mut dx = -1_i8;
    while dx <= 1 {
        let mut dy = -1_i8;
        while dy <= 1 {
            let mut dz = -1_i8;
            while dz <= 1 {
                if let Some(direction) = Direction::new(dx, dy, dz) {
                    table[slot] = direction;
                    slot = slot.wrapping_add(1);
                }
                dz = dz.wrapping_add(1);
            }
            dy = dy.wrapping_add(1);
        }
        dx = dx.wrapping_add(1);
    }

    table
}
