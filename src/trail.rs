//! The two fronts of a color.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::location::Location;

/// One of the two directions a color's trail grows from.
///
/// [`Front::First`] is bound to the first endpoint registered for the color, [`Front::Second`] to the other.
/// On the wire a front is its index, `0` or `1`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Front {
    /// Grows from the first endpoint, index `0`.
    First,
    /// Grows from the second endpoint, index `1`.
    Second,
}

impl Front {
    /// The index of this front, `0` or `1`.
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The front growing from the other endpoint.
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl From<Front> for u8 {
    fn from(value: Front) -> Self {
        value.index() as u8
    }
}

impl TryFrom<u8> for Front {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            other => Err(EngineError::InvalidFrontIndex(other)),
        }
    }
}

/// Both fronts of a single color, each in growth order, plus whether the fronts have met.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTrails {
    fronts: [Vec<Location>; 2],
    // every cell of both fronts, interleaved in the order it was added
    growth: Vec<(Front, Location)>,
    pub(crate) completed: bool,
}

impl ColorTrails {
    /// The cells of `front`, oldest first.
    pub fn front(&self, front: Front) -> &[Location] {
        &self[front]
    }

    /// The most recently added cell of `front`, if any.
    pub fn last(&self, front: Front) -> Option<Location> {
        self[front].last().copied()
    }

    /// Every cell of both fronts, oldest first, with the front holding it.
    pub fn in_growth_order(&self) -> impl Iterator<Item = (Front, Location)> + '_ {
        self.growth.iter().copied()
    }

    /// Whether either front holds `location`.
    pub fn contains(&self, location: Location) -> bool {
        self.fronts.iter().any(|cells| cells.contains(&location))
    }

    /// Whether the fronts have met. Stays set once set.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether both fronts are empty.
    pub fn is_empty(&self) -> bool {
        self.growth.is_empty()
    }

    /// Number of cells over both fronts.
    pub fn len(&self) -> usize {
        self.growth.len()
    }

    pub(crate) fn push(&mut self, front: Front, location: Location) {
        self.fronts[front.index()].push(location);
        self.growth.push((front, location));
    }

    /// Drop every occurrence of `location` from both fronts, keeping the order of the rest.
    ///
    /// Returns whether anything was removed.
    pub(crate) fn remove(&mut self, location: Location) -> bool {
        let before = self.len();
        self.fronts.iter_mut().for_each(|cells| cells.retain(|cell| *cell != location));
        self.growth.retain(|(_, cell)| *cell != location);
        before != self.len()
    }

    /// Empty both fronts; the completed flag is left alone.
    pub(crate) fn clear(&mut self) {
        self.fronts.iter_mut().for_each(Vec::clear);
        self.growth.clear();
    }
}

impl Index<Front> for ColorTrails {
    type Output = [Location];

    fn index(&self, front: Front) -> &Self::Output {
        &self.fronts[front.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorTrails, Front};
    use crate::error::EngineError;
    use crate::location::Location;

    #[test]
    fn front_indices() {
        assert_eq!(u8::from(Front::First), 0);
        assert_eq!(Front::try_from(1), Ok(Front::Second));
        assert_eq!(Front::try_from(2), Err(EngineError::InvalidFrontIndex(2)));
        assert_eq!(Front::First.other(), Front::Second);
    }

    #[test]
    fn front_serializes_as_index() {
        assert_eq!(serde_json::to_string(&Front::Second).unwrap(), "1");
        assert_eq!(serde_json::from_str::<Front>("0").unwrap(), Front::First);
        assert!(serde_json::from_str::<Front>("2").is_err());
    }

    #[test]
    fn remove_keeps_order_and_leaves_gaps() {
        let mut trails = ColorTrails::default();
        for location in [Location(0, 1), Location(0, 2), Location(0, 3)] {
            trails.push(Front::First, location);
        }
        trails.push(Front::Second, Location(2, 2));
        trails.completed = true;

        assert!(trails.remove(Location(0, 2)));
        assert!(!trails.remove(Location(4, 4)));
        assert_eq!(trails.front(Front::First), &[Location(0, 1), Location(0, 3)]);
        assert_eq!(trails.last(Front::Second), Some(Location(2, 2)));

        trails.clear();
        assert!(trails.is_empty());
        assert!(trails.is_completed());
    }

    #[test]
    fn growth_order_interleaves_fronts() {
        let mut trails = ColorTrails::default();
        trails.push(Front::Second, Location(1, 2));
        trails.push(Front::First, Location(0, 1));
        trails.push(Front::Second, Location(0, 2));
        trails.remove(Location(0, 1));
        trails.push(Front::First, Location(1, 0));

        assert_eq!(
            trails.in_growth_order().collect::<Vec<_>>(),
            vec![(Front::Second, Location(1, 2)), (Front::Second, Location(0, 2)), (Front::First, Location(1, 0))]
        );
        assert_eq!(trails.len(), 3);
    }
}
