use serde::Serialize;
use std::fmt;

/// Strand orientation of a marker.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub const POSITIVE_SYMBOL: char = '+';
    pub const NEGATIVE_SYMBOL: char = '-';

    /// Order in which a marker's two extremities are traversed.
    pub fn ordered_extremities(self) -> (Extremity, Extremity) {
        match self {
            Direction::Positive => (Extremity::Tail, Extremity::Head),
            Direction::Negative => (Extremity::Head, Extremity::Tail),
        }
    }
}

/// One of the two ends of a marker.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Extremity {
    Tail,
    Head,
}

/// A single gene occurrence on a chromosome.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Gene family identifier, e.g. `"12"`
    pub gene: String,
    /// Unique occurrence key `gene.n`, n counting from 1 per family
    pub sub_id: String,
    pub direction: Direction,
}

impl Marker {
    /// Both extremities keyed by sub-id, ordered by strand.
    pub fn extremities(&self) -> [(&str, Extremity); 2] {
        let (first, second) = self.direction.ordered_extremities();
        [(&self.sub_id, first), (&self.sub_id, second)]
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction == Direction::Negative {
            write!(f, "{}", Direction::NEGATIVE_SYMBOL)?;
        }
        f.write_str(&self.gene)
    }
}

/// Chromosome shape, taken from the terminal character of its input line.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Linear,
    Circular,
}

impl Topology {
    pub const LINEAR_SYMBOL: char = '|';
    pub const CIRCULAR_SYMBOL: char = ')';

    pub fn from_symbol(c: char) -> Option<Topology> {
        match c {
            Self::LINEAR_SYMBOL => Some(Topology::Linear),
            Self::CIRCULAR_SYMBOL => Some(Topology::Circular),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Topology::Linear => Self::LINEAR_SYMBOL,
            Topology::Circular => Self::CIRCULAR_SYMBOL,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Linear => f.write_str("linear"),
            Topology::Circular => f.write_str("circular"),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Chromosome {
    pub topology: Topology,
    pub markers: Vec<Marker>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Genome {
    pub name: String,
    pub chromosomes: Vec<Chromosome>,
}

/// Arc on a circular chromosome, angles in degrees
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ArcPrimitive {
    pub color: String,
    pub start: f64,
    pub end: f64,
    pub radius: f64,
}

/// Segment on a linear chromosome, relative to the anchor.
/// A negative `length` draws leftward.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LinePrimitive {
    pub color: String,
    pub offset: f64,
    pub length: f64,
}
