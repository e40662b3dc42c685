use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Sub,
};

use ordered_float::OrderedFloat;

use crate::{
    geometry::{round, round_pos},
    Pos,
};

/// A position snapped to the tolerance grid. Rounding happens once, on
/// construction, so `==` and hashing are exact value comparisons and every
/// component of the pipeline agrees on what "the same point" means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Pos);

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Pos::new(round(x), round(y), round(z)))
    }

    pub fn from_pos(pos: Pos) -> Self {
        Self(round_pos(pos))
    }

    pub fn pos(&self) -> Pos {
        self.0
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }
}

// Coordinates are rounded on construction, so the derived float comparison
// is total for every value that can actually occur.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.0.x).hash(state);
        OrderedFloat(self.0.y).hash(state);
        OrderedFloat(self.0.z).hash(state);
    }
}

impl Sub for Point {
    type Output = Pos;

    fn sub(self, other: Self) -> Pos {
        self.0 - other.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
