use crate::*;

/// Stone color of the player making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn flip(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "B"),
            Self::White => write!(f, "W"),
        }
    }
}

/// 1-based board coordinate, (1, 1) is the upper-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl From<(u8, u8)> for Point {
    fn from((x, y): (u8, u8)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

/// Board dimensions.
///
/// Parsed leniently from configuration text: either `"N"` for a square
/// board or `"X:Y"`, with whitespace ignored anywhere. Anything else, or any
/// side outside `MIN_SIZE..=MAX_SIZE`, falls back to the default 19x19.
/// JSON may also give a bare number for a square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "Side", into = "String")]
pub struct Size {
    pub x: u8,
    pub y: u8,
}

impl Size {
    const SEPARATOR: char = ':';
    pub fn square(side: u8) -> Self {
        Self { x: side, y: side }
    }
    pub fn contains(&self, point: &Point) -> bool {
        (MIN_SIZE..=self.x).contains(&point.x) && (MIN_SIZE..=self.y).contains(&point.y)
    }
    fn side(text: &str) -> Option<u8> {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        text.parse::<u32>()
            .ok()
            .filter(|n| (MIN_SIZE as u32..=MAX_SIZE as u32).contains(n))
            .map(|n| n as u8)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::square(DEFAULT_SIZE)
    }
}

impl From<&str> for Size {
    fn from(text: &str) -> Self {
        let text = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        let sides = match text.split_once(Self::SEPARATOR) {
            Some((x, y)) => Self::side(x).zip(Self::side(y)),
            None => Self::side(&text).map(|n| (n, n)),
        };
        match sides {
            Some((x, y)) => Self { x, y },
            None => Self::default(),
        }
    }
}

impl From<String> for Size {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

/// Configuration may carry a size as text or as a bare number.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Side {
    Text(String),
    Number(f64),
}

impl From<Side> for Size {
    fn from(side: Side) -> Self {
        match side {
            Side::Text(text) => Self::from(text.as_str()),
            Side::Number(n) if n.fract() == 0.0 && (MIN_SIZE as f64..=MAX_SIZE as f64).contains(&n) => {
                Self::square(n as u8)
            }
            Side::Number(_) => Self::default(),
        }
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.to_string()
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.x == self.y {
            write!(f, "{}", self.x)
        } else {
            write!(f, "{}{}{}", self.x, Self::SEPARATOR, self.y)
        }
    }
}

/// A stone placement or a pass.
///
/// Two nodes "hold the same move" when color and point match; this is the
/// equality the position codec relies on for sibling lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub point: Option<Point>,
}

impl Move {
    pub fn stone(color: Color, x: u8, y: u8) -> Self {
        Self {
            color,
            point: Some(Point { x, y }),
        }
    }
    pub fn pass(color: Color) -> Self {
        Self { color, point: None }
    }
    pub fn is_pass(&self) -> bool {
        self.point.is_none()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.point {
            Some(point) => write!(f, "{} {}", self.color, point),
            None => write!(f, "{} pass", self.color),
        }
    }
}
