//! Static mapping from Portable Contacts attributes to vCard fields.

use super::names;

/// Portable Contacts attribute names with a vCard counterpart.
pub mod attributes {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const BIRTHDAY: &str = "birthday";
    pub const ANNIVERSARY: &str = "anniversary";
    pub const NOTE: &str = "note";
    pub const UTC_OFFSET: &str = "utcOffset";
    pub const NICKNAME: &str = "nickname";
    pub const UPDATED: &str = "updated";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const ADDRESSES: &str = "addresses";
    pub const EMAILS: &str = "emails";
    pub const URLS: &str = "urls";
    pub const PHONE_NUMBERS: &str = "phoneNumbers";
    pub const PHOTOS: &str = "photos";
    pub const TAGS: &str = "tags";
    pub const ORGANIZATIONS: &str = "organizations";
    pub const IMS: &str = "ims";
    pub const RELATIONSHIPS: &str = "relationships";
}

/// How a list value of an attribute becomes content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plurality {
    /// One line per instance (or a single line for a non-list value).
    PerInstance,
    /// All scalars joined with commas on one line.
    Simple,
    /// One line for the primary instance only.
    Primary,
}

/// Where a vCard field identifier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier {
    Fixed(&'static str),
    /// Chosen per value from its `type` sub-field (instant messaging).
    ByNetwork,
}

/// Static description of one known attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub attribute: &'static str,
    pub identifier: Identifier,
    /// Sub-field names in vCard component order; `""` is a reserved blank
    /// position. Empty for single-valued fields.
    pub parts: &'static [&'static str],
    pub plurality: Plurality,
}

impl FieldDescriptor {
    const fn single(attribute: &'static str, identifier: &'static str) -> Self {
        Self {
            attribute,
            identifier: Identifier::Fixed(identifier),
            parts: &[],
            plurality: Plurality::PerInstance,
        }
    }

    const fn structured(
        attribute: &'static str,
        identifier: &'static str,
        parts: &'static [&'static str],
    ) -> Self {
        Self {
            attribute,
            identifier: Identifier::Fixed(identifier),
            parts,
            plurality: Plurality::PerInstance,
        }
    }

    const fn plural(self, plurality: Plurality) -> Self {
        Self { plurality, ..self }
    }

    /// Returns whether the field body is a fixed-position, `;`-separated list.
    #[must_use]
    pub fn is_multi_part(&self) -> bool {
        !self.parts.is_empty()
    }
}

/// N: family;given;additional;prefixes;suffixes
pub const NAME_PARTS: &[&str] = &[
    "familyName",
    "givenName",
    "middleName",
    "honorificPrefix",
    "honorificSuffix",
];

/// ADR: post office box;extended;street;locality;region;postal code;country.
/// Portable Contacts has no counterpart for the first two.
pub const ADDRESS_PARTS: &[&str] = &[
    "",
    "",
    "streetAddress",
    "locality",
    "region",
    "postalCode",
    "country",
];

/// ORG: organization name;unit
pub const ORGANIZATION_PARTS: &[&str] = &["name", "department"];

/// Every attribute the serializer understands, in no particular order.
pub static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::single(attributes::ID, names::UID),
    FieldDescriptor::structured(attributes::NAME, names::N, NAME_PARTS),
    FieldDescriptor::single(attributes::DISPLAY_NAME, names::FN),
    FieldDescriptor::single(attributes::BIRTHDAY, names::BDAY),
    FieldDescriptor::single(attributes::ANNIVERSARY, names::X_ANNIVERSARY),
    FieldDescriptor::single(attributes::NOTE, names::NOTE),
    FieldDescriptor::single(attributes::UTC_OFFSET, names::TZ),
    FieldDescriptor::single(attributes::NICKNAME, names::NICKNAME),
    FieldDescriptor::single(attributes::UPDATED, names::REV),
    FieldDescriptor::single(attributes::TITLE, names::TITLE),
    FieldDescriptor::single(attributes::LABEL, names::LABEL),
    FieldDescriptor::structured(attributes::ADDRESSES, names::ADR, ADDRESS_PARTS),
    FieldDescriptor::single(attributes::EMAILS, names::EMAIL),
    FieldDescriptor::single(attributes::URLS, names::URL),
    FieldDescriptor::single(attributes::PHONE_NUMBERS, names::TEL),
    FieldDescriptor::single(attributes::PHOTOS, names::PHOTO),
    FieldDescriptor::single(attributes::TAGS, names::CATEGORIES).plural(Plurality::Simple),
    FieldDescriptor::structured(attributes::ORGANIZATIONS, names::ORG, ORGANIZATION_PARTS)
        .plural(Plurality::Primary),
    FieldDescriptor {
        attribute: attributes::IMS,
        identifier: Identifier::ByNetwork,
        parts: &[],
        plurality: Plurality::PerInstance,
    },
    FieldDescriptor::single(attributes::RELATIONSHIPS, names::X_RELATIONSHIP),
];

/// Instant messaging networks (`ims[].type`) and their vCard extensions.
pub static IM_NETWORKS: &[(&str, &str)] = &[
    ("aim", names::X_AIM),
    ("gtalk", names::X_GTALK),
    ("icq", names::X_ICQ),
    ("xmpp", names::X_JABBER),
    ("jabber", names::X_JABBER),
    ("msn", names::X_MSN),
    ("yahoo", names::X_YAHOO),
    ("skype", names::X_SKYPE),
    ("qq", names::X_QQ),
    ("gadugadu", names::X_GADUGADU),
];

/// Returns the descriptor for a Portable Contacts attribute name.
#[must_use]
pub fn descriptor(attribute: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|d| d.attribute == attribute)
}

/// Returns the vCard extension for an instant messaging network.
#[must_use]
pub fn im_identifier(network: &str) -> Option<&'static str> {
    let network = network.trim();
    IM_NETWORKS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(network))
        .map(|&(_, identifier)| identifier)
}
