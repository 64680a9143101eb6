use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Placeholder shown for values that could not be parsed
const PLACEHOLDER: &str = "-";

/// Stable identifier for a person within one load.
///
/// Assigned from the record's position in the API response, so it survives
/// any amount of filtering and never depends on rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PersonId(pub usize);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
}

/// Date of birth, parsed once from the API's ISO-8601 string.
///
/// An unparsable source leaves the date empty; display then degrades to a
/// placeholder instead of failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BirthDate(Option<NaiveDate>);

impl BirthDate {
    pub fn parse(raw: &str) -> Self {
        let date = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());
        Self(date)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Month/day/year without zero padding, e.g. `7/4/1990`
    pub fn display(&self) -> String {
        match self.0 {
            Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
            None => PLACEHOLDER.to_string(),
        }
    }
}

/// One directory entry. Fully formed at construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub photo_url: String,
    pub name: Name,
    pub email: String,
    pub address: Address,
    pub birth_date: BirthDate,
    pub phone: String,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    pub fn city_state(&self) -> String {
        format!("{}, {}", self.address.city, self.address.state)
    }

    /// Full postal address on one line
    pub fn location_line(&self) -> String {
        let a = &self.address;
        format!(
            "{} {}, {}, {} {}",
            a.street_number, a.street_name, a.city, a.state, a.postcode
        )
    }

    fn from_api(id: PersonId, api: ApiPerson) -> Self {
        Self {
            id,
            photo_url: api.picture.large,
            name: api.name,
            email: api.email,
            address: Address {
                street_number: api.location.street.number.into_string(),
                street_name: api.location.street.name,
                city: api.location.city,
                state: api.location.state,
                postcode: api.location.postcode.into_string(),
            },
            birth_date: BirthDate::parse(&api.dob.date),
            phone: api.cell,
        }
    }
}

// ============================================================================
// API response types
// ============================================================================

/// A randomuser.me results page
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleResponse {
    results: Vec<ApiPerson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiPerson {
    picture: ApiPicture,
    name: Name,
    email: String,
    location: ApiLocation,
    dob: ApiDob,
    cell: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiPicture {
    large: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiLocation {
    street: ApiStreet,
    city: String,
    state: String,
    postcode: TextOrNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiStreet {
    number: TextOrNumber,
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiDob {
    date: String,
}

// Postcodes come back as numbers for some nationalities and strings for others
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(i64),
}

impl TextOrNumber {
    fn into_string(self) -> String {
        match self {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// Decode a results page into people, ids following response order.
pub fn parse_people(body: &str) -> Result<Vec<Person>, ApiError> {
    let page: PeopleResponse = serde_json::from_str(body)?;
    Ok(page
        .results
        .into_iter()
        .enumerate()
        .map(|(i, api)| Person::from_api(PersonId(i), api))
        .collect())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Build a person with just enough detail for store and overlay tests
    pub fn person(id: usize, first: &str, last: &str) -> Person {
        Person {
            id: PersonId(id),
            photo_url: format!("https://example.test/{id}.jpg"),
            name: Name {
                first: first.to_string(),
                last: last.to_string(),
            },
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            address: Address {
                street_number: "1".to_string(),
                street_name: "Main St".to_string(),
                city: "Springfield".to_string(),
                state: "Oregon".to_string(),
                postcode: "97475".to_string(),
            },
            birth_date: BirthDate::parse("1990-07-04"),
            phone: "(555) 010-0000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "name": {"title": "Ms", "first": "Ann", "last": "Lee"},
                "location": {
                    "street": {"number": 4821, "name": "Hickory Creek Dr"},
                    "city": "Fresno", "state": "California", "country": "United States",
                    "postcode": 93706
                },
                "email": "ann.lee@example.com",
                "dob": {"date": "1984-02-09T11:23:41.371Z", "age": 40},
                "cell": "(619) 555-0148",
                "picture": {"large": "https://randomuser.me/api/portraits/women/1.jpg"}
            },
            {
                "name": {"title": "Mr", "first": "Bob", "last": "Lee"},
                "location": {
                    "street": {"number": "12B", "name": "Oak Ave"},
                    "city": "Boise", "state": "Idaho", "postcode": "83702"
                },
                "email": "bob.lee@example.com",
                "dob": {"date": "not a date"},
                "cell": "208-555-0199",
                "picture": {"large": "https://randomuser.me/api/portraits/men/2.jpg"}
            }
        ],
        "info": {"seed": "abc", "results": 2, "page": 1, "version": "1.4"}
    }"#;

    #[test]
    fn test_parse_people_preserves_order_and_assigns_ids() {
        let people = parse_people(SAMPLE).expect("sample should parse");
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].id, PersonId(0));
        assert_eq!(people[0].full_name(), "Ann Lee");
        assert_eq!(people[1].id, PersonId(1));
        assert_eq!(people[1].full_name(), "Bob Lee");
    }

    #[test]
    fn test_numeric_and_text_address_parts() {
        let people = parse_people(SAMPLE).expect("sample should parse");
        assert_eq!(
            people[0].location_line(),
            "4821 Hickory Creek Dr, Fresno, California 93706"
        );
        assert_eq!(people[1].location_line(), "12B Oak Ave, Boise, Idaho 83702");
        assert_eq!(people[1].city_state(), "Boise, Idaho");
    }

    #[test]
    fn test_birth_date_formatting() {
        let people = parse_people(SAMPLE).expect("sample should parse");
        assert_eq!(people[0].birth_date.display(), "2/9/1984");
        // Bad dates degrade instead of failing the load
        assert!(!people[1].birth_date.is_valid());
        assert_eq!(people[1].birth_date.display(), "-");
    }

    #[test]
    fn test_birth_date_plain_date() {
        let date = BirthDate::parse("1990-12-25");
        assert_eq!(date.display(), "12/25/1990");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(1990, 12, 25));
    }

    #[test]
    fn test_phone_is_kept_verbatim() {
        let people = parse_people(SAMPLE).expect("sample should parse");
        assert_eq!(people[1].phone, "208-555-0199");
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = parse_people("<html>oops</html>").expect_err("HTML is not JSON");
        assert_eq!(err.kind(), crate::api::FailureKind::Decode);

        // Valid JSON but wrong shape is a decode failure too
        let err = parse_people(r#"{"error": "Uh oh"}"#).expect_err("missing results");
        assert_eq!(err.kind(), crate::api::FailureKind::Decode);
    }

    #[test]
    fn test_empty_results() {
        let people = parse_people(r#"{"results": []}"#).expect("empty page parses");
        assert!(people.is_empty());
    }
}
