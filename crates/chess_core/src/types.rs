use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Rank delta of a forward pawn step.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Back rank (king and rooks) on a board of `size` ranks.
    pub fn home_rank(self, size: u8) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => size as i8 - 1,
        }
    }
    pub fn pawn_start_rank(self, size: u8) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => size as i8 - 2,
        }
    }
    pub fn promotion_rank(self, size: u8) -> i8 {
        match self {
            Color::White => size as i8 - 1,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Lower-case letter used in notation.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece instance. `has_moved` drives castling eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Board-dump symbol: upper case for White, lower case for Black.
    pub fn symbol(&self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A `(file, rank)` coordinate. Validity depends on the board size, so
/// out-of-range values are representable and checked with `is_valid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    pub fn is_valid(self, size: u8) -> bool {
        (0..size as i8).contains(&self.file) && (0..size as i8).contains(&self.rank)
    }

    pub fn offset(self, df: i8, dr: i8) -> Position {
        Position::new(self.file + df, self.rank + dr)
    }

    /// Algebraic coordinate, e.g. `e4`. Ranks are 1-based.
    ///
    /// Positions no board can hold print as a raw `(file, rank)` pair.
    pub fn to_coord(self) -> String {
        if !(0..crate::board::MAX_BOARD_SIZE as i8).contains(&self.file) || self.rank < 0 {
            return format!("({}, {})", self.file, self.rank);
        }
        let f = (b'a' + self.file as u8) as char;
        format!("{f}{}", self.rank as i32 + 1)
    }

    pub fn from_coord(c: &str) -> Option<Position> {
        let mut chars = c.chars();
        let f = chars.next()?;
        if !f.is_ascii_lowercase() {
            return None;
        }
        let rank: i32 = chars.as_str().parse().ok()?;
        if !(1..=i8::MAX as i32).contains(&rank) {
            return None;
        }
        Some(Position::new((f as u8 - b'a') as i8, (rank - 1) as i8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_coord())
    }
}

/// A self-describing state transition. Replaying it against the board it was
/// generated from applies it without re-deriving capture/castle/en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub promo: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
    /// What the move captures, as seen at generation time.
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promo: None,
            is_castle: false,
            is_en_passant: false,
            captured: None,
        }
    }

    pub fn capture(from: Position, to: Position, captured: Piece) -> Self {
        Self {
            captured: Some(captured),
            ..Self::new(from, to)
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promo {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
