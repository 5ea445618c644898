//! Board geometry: sliding rays, fixed step rings, and segment intersection.
//!
//! Nothing here knows about pieces. Blocking is expressed through an
//! occupancy [`SquareSet`].

use crate::square::Square;
use crate::square_set::SquareSet;

/// An unchecked `(rank, file)` pair. May lie off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub rank: i8,
    pub file: i8,
}

impl Coord {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Coord {
        Coord { rank, file }
    }

    /// `self + steps * dir`, computed in `i16` so far-off inputs cannot overflow.
    #[inline]
    pub fn step(self, dir: Direction, steps: u8) -> Coord {
        let rank = self.rank as i16 + dir.rank as i16 * steps as i16;
        let file = self.file as i16 + dir.file as i16 * steps as i16;
        Coord::new(
            rank.clamp(i8::MIN as i16, i8::MAX as i16) as i8,
            file.clamp(i8::MIN as i16, i8::MAX as i16) as i8,
        )
    }

    #[inline]
    pub fn to_square(self) -> Option<Square> {
        Square::from_coords(self.rank, self.file)
    }
}

/// Whether `pos` lies on the 8x8 grid.
#[inline]
pub const fn on_board(pos: Coord) -> bool {
    pos.rank >= 0 && pos.rank < 8 && pos.file >= 0 && pos.file < 8
}

/// One of the eight compass directions, as a unit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub rank: i8,
    pub file: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(1, 0);
    pub const SOUTH: Direction = Direction::new(-1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(1, 1);
    pub const NORTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(-1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(-1, -1);

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::EAST,
        Direction::SOUTH,
        Direction::WEST,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTH_EAST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
        Direction::NORTH_WEST,
    ];

    /// Orthogonals followed by diagonals: the rays a queen slides along.
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::EAST,
        Direction::SOUTH,
        Direction::WEST,
        Direction::NORTH_EAST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
        Direction::NORTH_WEST,
    ];

    const fn new(rank: i8, file: i8) -> Direction {
        Direction { rank, file }
    }

    #[inline]
    pub const fn reverse(self) -> Direction {
        Direction::new(-self.rank, -self.file)
    }

    /// True when both directions run along the same line, either way.
    #[inline]
    pub fn is_parallel(self, other: Direction) -> bool {
        self == other || self == other.reverse()
    }

    /// Direction and distance from `from` to `to` when they share a rank, file
    /// or diagonal.
    pub fn between(from: Square, to: Square) -> Option<(Direction, u8)> {
        let dr = to.rank() - from.rank();
        let df = to.file() - from.file();
        if (dr, df) == (0, 0) || (dr != 0 && df != 0 && dr.abs() != df.abs()) {
            return None;
        }
        let distance = dr.abs().max(df.abs()) as u8;
        Some((Direction::new(dr.signum(), df.signum()), distance))
    }
}

/// Number of steps from `pos` along `dir` before leaving the board or reaching
/// an occupied square. The occupied square itself counts as a step.
pub fn ray_length(pos: Square, dir: Direction, occupied: SquareSet) -> u8 {
    let mut steps = 0u8;
    let mut cursor = pos.coord();
    loop {
        cursor = cursor.step(dir, 1);
        let Some(sq) = cursor.to_square() else {
            return steps;
        };
        steps += 1;
        if occupied.contains(sq) {
            return steps;
        }
    }
}

/// Squares `pos + dir` through `pos + length * dir`, in walking order.
/// Steps that would leave the board are dropped.
pub fn ray_path(pos: Square, dir: Direction, length: u8) -> impl Iterator<Item = Square> {
    let origin = pos.coord();
    (1..=length).filter_map(move |i| origin.step(dir, i).to_square())
}

/// King steps: every cell at Chebyshev distance 1.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
];

/// Knight jumps: the cells of the radius-2 frame that are not on a rank, file
/// or diagonal through the centre.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
];

/// On-board cells of the ring pattern with the given radius.
///
/// Radius 1 is the king's neighbourhood, radius 2 the knight's jumps. Any
/// other radius has no pattern and yields nothing.
pub fn ring_path(pos: Square, radius: u8) -> impl Iterator<Item = Square> {
    let offsets: &'static [(i8, i8)] = match radius {
        1 => &KING_OFFSETS,
        2 => &KNIGHT_OFFSETS,
        _ => &[],
    };
    offsets.iter().filter_map(move |&(dr, df)| pos.offset(dr, df))
}

/// A finite run of cells `start + k * dir` for `k` in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Coord,
    pub dir: Direction,
    pub len: u8,
}

impl Segment {
    pub const fn new(start: Coord, dir: Direction, len: u8) -> Segment {
        Segment { start, dir, len }
    }

    /// The cells a slider reaches from `pos`: `pos + dir` to `pos + length * dir`.
    pub fn ray(pos: Square, dir: Direction, length: u8) -> Segment {
        Segment::new(pos.coord().step(dir, 1), dir, length)
    }

    /// Position along the segment of `c`, if `c` is one of its cells.
    fn index_of(&self, c: Coord) -> Option<u8> {
        let dr = c.rank as i16 - self.start.rank as i16;
        let df = c.file as i16 - self.start.file as i16;
        let k = if self.dir.rank != 0 {
            dr / self.dir.rank as i16
        } else {
            df / self.dir.file as i16
        };
        let on_line = k * self.dir.rank as i16 == dr && k * self.dir.file as i16 == df;
        (on_line && k >= 0 && k < self.len as i16).then_some(k as u8)
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.index_of(c).is_some()
    }

    pub fn squares(&self) -> SquareSet {
        (0..self.len)
            .filter_map(|k| self.start.step(self.dir, k).to_square())
            .collect()
    }

    /// On-board cells shared by both segments.
    ///
    /// Crossing lines are solved with 2D cross products: for
    /// `p + t*d = q + s*e`, `t = (q - p) x e / (d x e)`. The crossing counts
    /// only if it lands on a lattice cell inside both finite segments.
    /// Collinear segments overlap along a run, which is collected cell by cell.
    pub fn intersection(&self, other: &Segment) -> SquareSet {
        let cross = |ar: i16, af: i16, br: i16, bf: i16| ar * bf - af * br;
        let (dr, df) = (self.dir.rank as i16, self.dir.file as i16);
        let (er, ef) = (other.dir.rank as i16, other.dir.file as i16);
        let qr = other.start.rank as i16 - self.start.rank as i16;
        let qf = other.start.file as i16 - self.start.file as i16;

        let denom = cross(dr, df, er, ef);
        if denom == 0 {
            if cross(qr, qf, dr, df) != 0 {
                return SquareSet::EMPTY;
            }
            return self
                .squares()
                .filter(|sq| other.contains(sq.coord()))
                .collect();
        }

        let t_num = cross(qr, qf, er, ef);
        if t_num % denom != 0 {
            return SquareSet::EMPTY;
        }
        let t = t_num / denom;
        if t < 0 || t >= self.len as i16 {
            return SquareSet::EMPTY;
        }
        let point = self.start.step(self.dir, t as u8);
        match point.to_square() {
            Some(sq) if other.contains(point) => sq.set(),
            _ => SquareSet::EMPTY,
        }
    }
}
