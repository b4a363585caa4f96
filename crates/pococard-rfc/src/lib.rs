//! Portable Contacts to vCard 3.0 (RFC 2426) conversion.
//!
//! ```rust
//! use pococard_rfc::rfc::poco::{AttributeValue, ContactRecord};
//! use pococard_rfc::rfc::vcard::serialize_record;
//!
//! let mut record = ContactRecord::new();
//! record.insert("displayName", AttributeValue::scalar("Jane Doe"));
//!
//! let card = serialize_record(&record);
//! assert!(card.contains("\nFN:Jane Doe\n"));
//! ```

pub mod error;
pub mod rfc;
