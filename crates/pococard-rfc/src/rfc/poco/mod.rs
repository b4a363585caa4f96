//! Portable Contacts input model.
//!
//! A [`ContactRecord`] is an ordered set of named [`AttributeValue`]s.
//! Records are normally built by callers; [`parse_records`] covers the
//! common case of a Portable Contacts JSON response.

mod json;
mod record;

pub use json::{parse_records, records_from_json};
pub use record::{
    AttributeValue, Complex, ContactRecord, FORMATTED, PRIMARY, SubField, TYPE, VALUE,
};
