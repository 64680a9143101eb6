//! Data models for directory entries.
//!
//! - `Person`: one employee with contact and address details
//! - `PeopleResponse`: the wire shape of a randomuser.me results page

pub mod person;

pub use person::{parse_people, Address, BirthDate, Name, PeopleResponse, Person, PersonId};
