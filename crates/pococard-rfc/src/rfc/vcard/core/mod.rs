//! vCard field tables.
//!
//! - [`FieldDescriptor`] - how one Portable Contacts attribute maps to a
//!   vCard field
//! - [`descriptor`] / [`im_identifier`] - table lookups
//! - [`names`] - vCard property and parameter names

mod descriptor;
pub mod names;

pub use descriptor::{
    ADDRESS_PARTS, FIELDS, FieldDescriptor, IM_NETWORKS, Identifier, NAME_PARTS,
    ORGANIZATION_PARTS, Plurality, attributes, descriptor, im_identifier,
};
