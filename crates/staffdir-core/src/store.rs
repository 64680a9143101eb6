//! The directory store: the full employee collection and its filtered view.
//!
//! `filtered` is always an order-preserving subsequence of `all` matching the
//! most recent query, and every change to it is pushed to the gallery.

use tracing::{debug, error, info};

use crate::api::{ApiError, PeopleSource};
use crate::gallery::GalleryView;
use crate::models::{parse_people, Person};
use crate::utils::contains_ignore_case;

/// Outcome of a load, for status display only.
///
/// Failures are already logged by the store; callers get no error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    Failed,
}

#[derive(Debug, Default)]
pub struct DirectoryStore {
    all: Vec<Person>,
    filtered: Vec<Person>,
    query: String,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one page of people and replace the directory with it.
    pub async fn load<S, G>(&mut self, source: &S, gallery: &mut G) -> LoadStatus
    where
        S: PeopleSource,
        G: GalleryView + ?Sized,
    {
        let body = source.fetch_body().await;
        self.complete_load(body, gallery)
    }

    /// Apply the result of a fetch that ran elsewhere (e.g. a background task).
    ///
    /// On failure the error is logged and the store and gallery are left as
    /// they were.
    pub fn complete_load<G>(&mut self, body: Result<String, ApiError>, gallery: &mut G) -> LoadStatus
    where
        G: GalleryView + ?Sized,
    {
        match body.and_then(|b| parse_people(&b)) {
            Ok(people) => {
                info!(count = people.len(), "Directory loaded");
                self.replace(people);
                gallery.render(&self.filtered);
                LoadStatus::Loaded(self.all.len())
            }
            Err(e) => {
                error!(error = %e, kind = ?e.kind(), "Failed to load directory");
                LoadStatus::Failed
            }
        }
    }

    fn replace(&mut self, people: Vec<Person>) {
        self.filtered = people.clone();
        self.all = people;
        self.query.clear();
    }

    /// Recompute the filtered view from scratch and re-render it.
    ///
    /// Matches a case-insensitive substring of the full name only.
    pub fn filter<G>(&mut self, query: &str, gallery: &mut G)
    where
        G: GalleryView + ?Sized,
    {
        let needle = query.to_lowercase();
        self.filtered = self
            .all
            .iter()
            .filter(|p| contains_ignore_case(&p.full_name(), &needle))
            .cloned()
            .collect();
        self.query = query.to_string();

        debug!(query, matches = self.filtered.len(), total = self.all.len(), "Directory filtered");
        gallery.render(&self.filtered);
    }

    pub fn all(&self) -> &[Person] {
        &self.all
    }

    pub fn filtered(&self) -> &[Person] {
        &self.filtered
    }

    pub fn current_query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FailureKind;
    use crate::models::person::testing::person;
    use reqwest::StatusCode;

    /// Gallery that records every list it was asked to render
    #[derive(Default)]
    struct RecordingGallery {
        renders: Vec<Vec<String>>,
    }

    impl GalleryView for RecordingGallery {
        fn render(&mut self, people: &[Person]) {
            self.renders.push(people.iter().map(Person::full_name).collect());
        }
    }

    struct StubSource(fn() -> Result<String, ApiError>);

    impl PeopleSource for StubSource {
        async fn fetch_body(&self) -> Result<String, ApiError> {
            (self.0)()
        }
    }

    const THREE: &str = r#"{"results": [
        {"name": {"first": "Ann", "last": "Lee"}, "email": "ann@example.com",
         "location": {"street": {"number": 1, "name": "A St"}, "city": "X", "state": "Y", "postcode": 1},
         "dob": {"date": "1980-01-01T00:00:00Z"}, "cell": "1", "picture": {"large": "a.jpg"}},
        {"name": {"first": "Bob", "last": "Lee"}, "email": "bob@example.com",
         "location": {"street": {"number": 2, "name": "B St"}, "city": "X", "state": "Y", "postcode": 2},
         "dob": {"date": "1981-01-01T00:00:00Z"}, "cell": "2", "picture": {"large": "b.jpg"}},
        {"name": {"first": "Cara", "last": "Ng"}, "email": "cara@example.com",
         "location": {"street": {"number": 3, "name": "C St"}, "city": "X", "state": "Y", "postcode": 3},
         "dob": {"date": "1982-01-01T00:00:00Z"}, "cell": "3", "picture": {"large": "c.jpg"}}
    ]}"#;

    fn names(people: &[Person]) -> Vec<String> {
        people.iter().map(Person::full_name).collect()
    }

    fn loaded_store() -> DirectoryStore {
        let mut store = DirectoryStore::new();
        store.replace(vec![
            person(0, "Ann", "Lee"),
            person(1, "Bob", "Lee"),
            person(2, "Cara", "Ng"),
        ]);
        store
    }

    #[tokio::test]
    async fn test_load_sets_all_and_filtered_in_response_order() {
        let mut store = DirectoryStore::new();
        let mut gallery = RecordingGallery::default();

        let status = store
            .load(&StubSource(|| Ok(THREE.to_string())), &mut gallery)
            .await;

        assert_eq!(status, LoadStatus::Loaded(3));
        assert_eq!(names(store.all()), ["Ann Lee", "Bob Lee", "Cara Ng"]);
        assert_eq!(store.all(), store.filtered());
        assert_eq!(gallery.renders, vec![names(store.all())]);
    }

    #[tokio::test]
    async fn test_load_error_status_renders_nothing() {
        let mut store = DirectoryStore::new();
        let mut gallery = RecordingGallery::default();

        let status = store
            .load(
                &StubSource(|| Err(ApiError::from_status(StatusCode::NOT_FOUND, "missing"))),
                &mut gallery,
            )
            .await;

        assert_eq!(status, LoadStatus::Failed);
        assert!(store.is_empty());
        assert!(store.filtered().is_empty());
        assert!(gallery.renders.is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_body_keeps_previous_data() {
        let mut store = DirectoryStore::new();
        let mut gallery = RecordingGallery::default();
        store.load(&StubSource(|| Ok(THREE.to_string())), &mut gallery).await;
        store.filter("lee", &mut gallery);

        let status = store
            .load(&StubSource(|| Ok("{\"results\": [".to_string())), &mut gallery)
            .await;

        assert_eq!(status, LoadStatus::Failed);
        assert_eq!(store.all().len(), 3);
        assert_eq!(names(store.filtered()), ["Ann Lee", "Bob Lee"]);
        assert_eq!(gallery.renders.len(), 2);
    }

    #[test]
    fn test_reload_replaces_rather_than_merges() {
        let mut store = loaded_store();
        let mut gallery = RecordingGallery::default();
        store.filter("ng", &mut gallery);

        let status = store.complete_load(
            Ok(r#"{"results": [
                {"name": {"first": "Dee", "last": "Ray"}, "email": "dee@example.com",
                 "location": {"street": {"number": 9, "name": "D St"}, "city": "X", "state": "Y", "postcode": "9"},
                 "dob": {"date": "1990-01-01T00:00:00Z"}, "cell": "9", "picture": {"large": "d.jpg"}}
            ]}"#
            .to_string()),
            &mut gallery,
        );

        assert_eq!(status, LoadStatus::Loaded(1));
        assert_eq!(names(store.all()), ["Dee Ray"]);
        assert_eq!(store.all(), store.filtered());
        assert_eq!(store.current_query(), "");
    }

    #[test]
    fn test_filter_is_case_insensitive_name_subsequence() {
        let mut store = loaded_store();
        let mut gallery = RecordingGallery::default();

        store.filter("lee", &mut gallery);
        assert_eq!(names(store.filtered()), ["Ann Lee", "Bob Lee"]);

        store.filter("LEE", &mut gallery);
        assert_eq!(names(store.filtered()), ["Ann Lee", "Bob Lee"]);

        store.filter("z", &mut gallery);
        assert!(store.filtered().is_empty());

        store.filter("", &mut gallery);
        assert_eq!(names(store.filtered()), ["Ann Lee", "Bob Lee", "Cara Ng"]);

        // Every filter call re-renders with exactly the filtered list
        assert_eq!(
            gallery.renders,
            vec![
                vec!["Ann Lee".to_string(), "Bob Lee".to_string()],
                vec!["Ann Lee".to_string(), "Bob Lee".to_string()],
                vec![],
                vec!["Ann Lee".to_string(), "Bob Lee".to_string(), "Cara Ng".to_string()],
            ]
        );
    }

    #[test]
    fn test_filter_spans_first_and_last_name() {
        let mut store = loaded_store();
        let mut gallery = RecordingGallery::default();

        store.filter("a n", &mut gallery);
        assert_eq!(names(store.filtered()), ["Cara Ng"]);

        store.filter("ann l", &mut gallery);
        assert_eq!(names(store.filtered()), ["Ann Lee"]);
    }

    #[test]
    fn test_filter_does_not_match_email_or_location() {
        let mut store = loaded_store();
        let mut gallery = RecordingGallery::default();

        store.filter("example.com", &mut gallery);
        assert!(store.filtered().is_empty());

        store.filter("springfield", &mut gallery);
        assert!(store.filtered().is_empty());
    }

    #[test]
    fn test_filter_is_verbatim() {
        let mut store = loaded_store();
        let mut gallery = RecordingGallery::default();

        // No trimming: a trailing space must match literally
        store.filter("lee ", &mut gallery);
        assert!(store.filtered().is_empty());
        assert_eq!(store.current_query(), "lee ");

        store.filter("bob ", &mut gallery);
        assert_eq!(names(store.filtered()), ["Bob Lee"]);
    }

    #[test]
    fn test_failure_kinds_are_logged_not_returned() {
        let mut store = DirectoryStore::new();
        let mut gallery = RecordingGallery::default();
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.kind(), FailureKind::Fetch);
        assert_eq!(store.complete_load(Err(err), &mut gallery), LoadStatus::Failed);
    }
}
