//! Search bar: a single text input wired to the store's filter.

use tracing::debug;

use crate::gallery::GalleryView;
use crate::store::DirectoryStore;

/// Owns the search input value. Every edit forwards the value, verbatim,
/// to `DirectoryStore::filter`.
#[derive(Debug, Default)]
pub struct SearchBar {
    value: String,
    attached: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the input. Calling it again has no effect.
    pub fn init(&mut self) {
        if !self.attached {
            self.attached = true;
            debug!("Search bar attached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn insert<G>(&mut self, c: char, store: &mut DirectoryStore, gallery: &mut G)
    where
        G: GalleryView + ?Sized,
    {
        if !self.attached {
            return;
        }
        self.value.push(c);
        self.on_change(store, gallery);
    }

    pub fn backspace<G>(&mut self, store: &mut DirectoryStore, gallery: &mut G)
    where
        G: GalleryView + ?Sized,
    {
        if !self.attached {
            return;
        }
        self.value.pop();
        self.on_change(store, gallery);
    }

    pub fn clear<G>(&mut self, store: &mut DirectoryStore, gallery: &mut G)
    where
        G: GalleryView + ?Sized,
    {
        if !self.attached {
            return;
        }
        self.value.clear();
        self.on_change(store, gallery);
    }

    /// Forward the current value to the store, which re-renders the gallery
    pub fn on_change<G>(&self, store: &mut DirectoryStore, gallery: &mut G)
    where
        G: GalleryView + ?Sized,
    {
        store.filter(&self.value, gallery);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::CardGallery;

    const TWO: &str = r#"{"results": [
        {"name": {"first": "Ann", "last": "Lee"}, "email": "ann@example.com",
         "location": {"street": {"number": 1, "name": "A St"}, "city": "X", "state": "Y", "postcode": 1},
         "dob": {"date": "1980-01-01T00:00:00Z"}, "cell": "1", "picture": {"large": "a.jpg"}},
        {"name": {"first": "Cara", "last": "Ng"}, "email": "cara@example.com",
         "location": {"street": {"number": 3, "name": "C St"}, "city": "X", "state": "Y", "postcode": 3},
         "dob": {"date": "1982-01-01T00:00:00Z"}, "cell": "3", "picture": {"large": "c.jpg"}}
    ]}"#;

    fn setup() -> (DirectoryStore, CardGallery) {
        let mut store = DirectoryStore::new();
        let mut gallery = CardGallery::new();
        store.complete_load(Ok(TWO.to_string()), &mut gallery);
        (store, gallery)
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut search = SearchBar::new();
        assert!(!search.is_attached());
        search.init();
        search.init();
        assert!(search.is_attached());
        assert_eq!(search.value(), "");
    }

    #[test]
    fn test_keystrokes_refilter_gallery() {
        let (mut store, mut gallery) = setup();
        let mut search = SearchBar::new();
        search.init();

        search.insert('N', &mut store, &mut gallery);
        assert_eq!(gallery.len(), 2);

        search.insert('g', &mut store, &mut gallery);
        assert_eq!(search.value(), "Ng");
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.cards()[0].name, "Cara Ng");
        assert_eq!(store.current_query(), "Ng");

        search.backspace(&mut store, &mut gallery);
        assert_eq!(gallery.len(), 2);

        search.insert('z', &mut store, &mut gallery);
        assert!(gallery.is_empty());

        search.clear(&mut store, &mut gallery);
        assert_eq!(search.value(), "");
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn test_events_before_init_are_ignored() {
        let (mut store, mut gallery) = setup();
        let mut search = SearchBar::new();

        search.insert('z', &mut store, &mut gallery);
        assert_eq!(search.value(), "");
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn test_value_is_forwarded_verbatim() {
        let (mut store, mut gallery) = setup();
        let mut search = SearchBar::new();
        search.init();

        search.insert(' ', &mut store, &mut gallery);
        assert_eq!(store.current_query(), " ");
        // Both full names contain a space
        assert_eq!(gallery.len(), 2);
    }
}
