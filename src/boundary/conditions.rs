//! Boundary kinds and their four-digit encoding.

use std::fmt;
use std::str::FromStr;

use super::BoundaryError;
use crate::types::{BoundaryEdge, SideBoundaries};

/// How the ghost cells along one edge are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryType {
    /// Copy the adjacent interior cell unchanged (waves leave the domain).
    #[default]
    Outflow,
    /// Copy the adjacent interior cell with the normal momentum negated
    /// (waves reflect as from a solid wall).
    Wall,
}

impl BoundaryType {
    /// Decode one digit of a boundary code (`1` outflow, `2` wall).
    pub fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            1 => Some(BoundaryType::Outflow),
            2 => Some(BoundaryType::Wall),
            _ => None,
        }
    }

    pub fn digit(self) -> u32 {
        match self {
            BoundaryType::Outflow => 1,
            BoundaryType::Wall => 2,
        }
    }

    /// Whether the edge lets waves leave the domain.
    pub fn is_open(self) -> bool {
        self == BoundaryType::Outflow
    }

    /// Ghost value of the momentum component normal to the edge.
    #[inline]
    pub fn ghost_normal_momentum(self, interior: f64) -> f64 {
        match self {
            BoundaryType::Outflow => interior,
            BoundaryType::Wall => -interior,
        }
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryType::Outflow => f.write_str("outflow"),
            BoundaryType::Wall => f.write_str("wall"),
        }
    }
}

/// Boundary kind for each of the four grid edges.
///
/// Encoded as a four-digit integer, one digit per edge in the order
/// left, right, bottom, top, with `1` for outflow and `2` for wall.
///
/// ```
/// use swe_tsunami::boundary::{BoundaryConditions, BoundaryType};
/// use swe_tsunami::types::BoundaryEdge;
///
/// let bcs = BoundaryConditions::from_code(1112).unwrap();
/// assert_eq!(bcs.get(BoundaryEdge::Left), BoundaryType::Outflow);
/// assert_eq!(bcs.get(BoundaryEdge::Top), BoundaryType::Wall);
/// assert_eq!(bcs.code(), 1112);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundaryConditions {
    sides: SideBoundaries<BoundaryType>,
}

impl BoundaryConditions {
    pub fn new(sides: SideBoundaries<BoundaryType>) -> Self {
        Self { sides }
    }

    /// Same kind on every edge.
    pub fn uniform(kind: BoundaryType) -> Self {
        Self::new(SideBoundaries::uniform(kind))
    }

    pub fn outflow() -> Self {
        Self::uniform(BoundaryType::Outflow)
    }

    pub fn walls() -> Self {
        Self::uniform(BoundaryType::Wall)
    }

    /// Replace the kind on one edge.
    pub fn with(mut self, edge: BoundaryEdge, kind: BoundaryType) -> Self {
        *self.sides.get_mut(edge) = kind;
        self
    }

    /// Parse a four-digit code such as `2211`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::InvalidCode`] when the code does not have
    /// exactly four digits and [`BoundaryError::InvalidDigit`] when a digit
    /// is neither `1` nor `2`.
    pub fn from_code(code: u32) -> Result<Self, BoundaryError> {
        if !(1000..=9999).contains(&code) {
            return Err(BoundaryError::InvalidCode(code.to_string()));
        }
        let mut kinds = [BoundaryType::Outflow; 4];
        for (position, kind) in kinds.iter_mut().enumerate() {
            let digit = code / 10u32.pow(3 - position as u32) % 10;
            *kind = BoundaryType::from_digit(digit).ok_or(BoundaryError::InvalidDigit {
                digit,
                edge: BoundaryEdge::ALL[position],
            })?;
        }
        Ok(Self::new(kinds.into()))
    }

    /// Four-digit code of this configuration.
    pub fn code(&self) -> u32 {
        self.sides
            .to_array()
            .into_iter()
            .fold(0, |acc, kind| acc * 10 + kind.digit())
    }

    #[inline]
    pub fn get(&self, edge: BoundaryEdge) -> BoundaryType {
        *self.sides.get(edge)
    }

    pub fn sides(&self) -> &SideBoundaries<BoundaryType> {
        &self.sides
    }
}

impl FromStr for BoundaryConditions {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code: u32 = trimmed
            .parse()
            .map_err(|_| BoundaryError::InvalidCode(trimmed.to_string()))?;
        Self::from_code(code)
    }
}

impl fmt::Display for BoundaryConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.sides)
    }
}
