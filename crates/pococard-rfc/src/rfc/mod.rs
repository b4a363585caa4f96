//! Input model and vCard output.
//!
//! - [`poco`] - Portable Contacts contact records
//! - [`vcard`] - vCard 3.0 field tables and serialization

pub mod poco;
pub mod vcard;
