//! Card gallery rendering.
//!
//! `GalleryView` is the only rendering seam the store and search bar know
//! about. `CardGallery` implements it by fully replacing its card list on
//! every render; a diffing renderer could be dropped in behind the same trait.

use tracing::debug;

use crate::models::{Person, PersonId};

/// Renders an ordered sequence of people as summary cards.
pub trait GalleryView {
    fn render(&mut self, people: &[Person]);
}

/// Summary card for one person.
///
/// Carries the person's stable id, which is how a selected or clicked card is
/// mapped back to its `Person`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub city_state: String,
    pub photo_url: String,
}

impl Card {
    fn from_person(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.full_name(),
            email: person.email.clone(),
            city_state: person.city_state(),
            photo_url: person.photo_url.clone(),
        }
    }
}

/// The gallery container: the rendered cards plus which one has focus.
#[derive(Debug, Default)]
pub struct CardGallery {
    cards: Vec<Card>,
    selected: usize,
}

impl CardGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.selected)
    }

    /// Focus the card at `index`, clamped to the last card
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.cards.len().saturating_sub(1));
    }

    /// Move focus by `delta` cards, stopping at either end
    pub fn select_offset(&mut self, delta: isize) {
        let target = self.selected.saturating_add_signed(delta);
        self.select(target);
    }

    pub fn select_next(&mut self) {
        self.select_offset(1);
    }

    pub fn select_prev(&mut self) {
        self.select_offset(-1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.select(usize::MAX);
    }
}

impl GalleryView for CardGallery {
    fn render(&mut self, people: &[Person]) {
        self.cards.clear();
        self.cards.extend(people.iter().map(Card::from_person));
        // Card focus does not survive a re-render
        self.selected = 0;
        debug!(cards = self.cards.len(), "Gallery rendered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::person::testing::person;

    fn three() -> Vec<Person> {
        vec![
            person(0, "Ann", "Lee"),
            person(1, "Bob", "Lee"),
            person(2, "Cara", "Ng"),
        ]
    }

    #[test]
    fn test_render_builds_one_card_per_person_in_order() {
        let mut gallery = CardGallery::new();
        gallery.render(&three());

        let names: Vec<&str> = gallery.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ann Lee", "Bob Lee", "Cara Ng"]);
        assert_eq!(gallery.cards()[1].id, PersonId(1));
        assert_eq!(gallery.cards()[1].email, "bob.lee@example.com");
        assert_eq!(gallery.cards()[2].city_state, "Springfield, Oregon");
    }

    #[test]
    fn test_render_is_idempotent() {
        let people = three();
        let mut once = CardGallery::new();
        once.render(&people);

        let mut twice = CardGallery::new();
        twice.render(&people);
        twice.render(&people);

        assert_eq!(once.cards(), twice.cards());
    }

    #[test]
    fn test_render_replaces_previous_cards() {
        let people = three();
        let mut gallery = CardGallery::new();
        gallery.render(&people);
        gallery.render(&people[2..]);

        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.cards()[0].name, "Cara Ng");

        gallery.render(&[]);
        assert!(gallery.is_empty());
        assert!(gallery.selected_card().is_none());
    }

    #[test]
    fn test_render_resets_selection() {
        let mut gallery = CardGallery::new();
        gallery.render(&three());
        gallery.select(2);
        assert_eq!(gallery.selected(), 2);

        gallery.render(&three());
        assert_eq!(gallery.selected(), 0);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut gallery = CardGallery::new();
        gallery.render(&three());

        gallery.select_prev();
        assert_eq!(gallery.selected(), 0);

        gallery.select_offset(10);
        assert_eq!(gallery.selected(), 2);

        gallery.select_next();
        assert_eq!(gallery.selected(), 2);

        gallery.select_offset(-1);
        assert_eq!(gallery.selected_card().map(|c| c.id), Some(PersonId(1)));

        gallery.select_first();
        assert_eq!(gallery.selected(), 0);
        gallery.select_last();
        assert_eq!(gallery.selected(), 2);
    }
}
