//! vCard 3.0 serialization (RFC 2426).
//!
//! ## Usage
//!
//! ```rust
//! use pococard_rfc::rfc::poco::{AttributeValue, Complex, ContactRecord};
//! use pococard_rfc::rfc::vcard::build::serialize_record;
//!
//! let record = ContactRecord::new()
//!     .with("displayName", AttributeValue::scalar("Joseph Smarr"))
//!     .with(
//!         "emails",
//!         AttributeValue::ComplexList(vec![
//!             Complex::new().with("value", "joseph@plaxo.com").with("type", "work"),
//!         ]),
//!     );
//!
//! let output = serialize_record(&record);
//! assert!(output.contains("\nEMAIL;TYPE=WORK:joseph@plaxo.com\n"));
//! ```
//!
//! ## Pipeline
//!
//! - [`map_attribute`] picks the lines an attribute produces
//! - [`encode_singular`] renders identifier, parameters, and escaped body
//! - [`fold_line`] wraps the finished line at 75 characters
//! - [`RecordSerializer`] adds the header and footer
//!
//! Nothing here fails: attributes without a vCard rendering are left out.

mod encoder;
mod escape;
mod fold;
mod mapper;
mod serializer;

pub use encoder::{Singular, encode_singular, encode_value};
pub use escape::{escape_list, escape_text};
pub use fold::{CONTINUATION, fold_line};
pub use mapper::{map_attribute, primary_instance};
pub use serializer::{RecordSerializer, serialize_record, serialize_records};
