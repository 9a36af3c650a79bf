//! Endpoints of every color.

use itertools::Itertools;

use crate::location::Location;

/// A color together with the endpoints placed for it so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affiliation {
    pub(crate) color: String,
    pub(crate) display: char,
    // never more than two
    pub(crate) termini: Vec<Location>,
}

impl Affiliation {
    /// The color's name.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The letter this color is drawn with in text renderings of the board.
    pub fn display(&self) -> char {
        self.display
    }

    /// The endpoints placed so far, in placement order.
    pub fn termini(&self) -> &[Location] {
        &self.termini
    }

    /// Both endpoints, in placement order, once the color is fully paired.
    pub fn endpoints(&self) -> Option<(Location, Location)> {
        match self.termini.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Maps each color to its two fixed endpoint cells.
///
/// Colors are kept in registration order, which is also the order [`colors`](Self::colors) yields them in.
/// The engine only reads from the registry; endpoints are placed through a [`Builder`](crate::builder::Builder).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointRegistry {
    affiliations: Vec<Affiliation>,
}

impl EndpointRegistry {
    /// The endpoints of `color`, or [`None`] if the color is unknown or has not been fully paired yet.
    pub fn endpoints_of(&self, color: &str) -> Option<(Location, Location)> {
        self.find(color).and_then(Affiliation::endpoints)
    }

    /// All fully paired colors, in registration order.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.paired().map(Affiliation::color)
    }

    /// Every registered color, paired or not.
    pub fn iter(&self) -> impl Iterator<Item = &Affiliation> {
        self.affiliations.iter()
    }

    /// Every fully paired color's affiliation, in registration order.
    pub fn paired(&self) -> impl Iterator<Item = &Affiliation> {
        self.affiliations.iter().filter(|aff| aff.endpoints().is_some())
    }

    /// The affiliation holding an endpoint at `location`, paired or not.
    pub fn endpoint_at(&self, location: Location) -> Option<&Affiliation> {
        self.affiliations.iter().find(|aff| aff.termini.contains(&location))
    }

    /// Whether `location` holds an endpoint of any color.
    pub fn is_endpoint(&self, location: Location) -> bool {
        self.endpoint_at(location).is_some()
    }

    /// The display letter of `color`, paired or not.
    pub fn display_of(&self, color: &str) -> Option<char> {
        self.find(color).map(Affiliation::display)
    }

    /// The affiliation of `color`, paired or not.
    pub fn find(&self, color: &str) -> Option<&Affiliation> {
        self.affiliations.iter().find(|aff| aff.color == color)
    }

    /// Number of registered colors, paired or not.
    pub fn len(&self) -> usize {
        self.affiliations.len()
    }

    /// Whether no color is registered.
    pub fn is_empty(&self) -> bool {
        self.affiliations.is_empty()
    }

    /// Record one endpoint for `color`, registering the color if it is new.
    ///
    /// Placement rules are checked by the builder before this is called.
    pub(crate) fn place(&mut self, color: &str, location: Location) {
        match self.affiliations.iter().find_position(|aff| aff.color == color) {
            Some((index, _)) => self.affiliations[index].termini.push(location),
            None => {
                let display = self.pick_display(color);
                self.affiliations.push(Affiliation {
                    color: color.to_owned(),
                    display,
                    termini: vec![location],
                });
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Affiliation> {
        self.affiliations.pop()
    }

    pub(crate) fn remove(&mut self, color: &str) -> Option<Affiliation> {
        self.affiliations.iter()
            .find_position(|aff| aff.color == color)
            .map(|(index, _)| index)
            .map(|index| self.affiliations.remove(index))
    }

    /// Prefer the first letter of the color's name; fall back to the first letter nobody uses yet.
    fn pick_display(&self, color: &str) -> char {
        let taken = self.affiliations.iter().map(|aff| aff.display).collect_vec();
        color.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .take(1)
            .chain('A'..='Z')
            .find(|c| !taken.contains(c))
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::EndpointRegistry;
    use crate::location::Location;

    #[test]
    fn single_endpoint_is_not_paired() {
        let mut registry = EndpointRegistry::default();
        registry.place("red", Location(0, 0));

        assert_eq!(registry.endpoints_of("red"), None);
        assert!(registry.is_endpoint(Location(0, 0)));
        assert_eq!(registry.colors().count(), 0);

        registry.place("red", Location(2, 2));
        assert_eq!(registry.endpoints_of("red"), Some((Location(0, 0), Location(2, 2))));
        assert_eq!(registry.colors().collect_vec(), vec!["red"]);
        assert_eq!(registry.endpoints_of("blue"), None);
    }

    #[test]
    fn display_letters_are_unique() {
        let mut registry = EndpointRegistry::default();
        registry.place("red", Location(0, 0));
        registry.place("rose", Location(0, 1));
        registry.place("#e41a1c", Location(0, 2));
        registry.place("42", Location(0, 3));

        assert_eq!(registry.display_of("red"), Some('R'));
        assert_eq!(registry.display_of("rose"), Some('A'));
        assert_eq!(registry.display_of("#e41a1c"), Some('E'));
        assert_eq!(registry.display_of("42"), Some('B'));
    }

    #[test]
    fn remove_and_pop() {
        let mut registry = EndpointRegistry::default();
        registry.place("a", Location(0, 0));
        registry.place("b", Location(1, 0));
        registry.place("c", Location(2, 0));

        assert_eq!(registry.remove("b").map(|aff| aff.color), Some("b".to_owned()));
        assert_eq!(registry.pop().map(|aff| aff.color), Some("c".to_owned()));
        assert_eq!(registry.len(), 1);
        assert!(registry.remove("zzz").is_none());
    }
}
