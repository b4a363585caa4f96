//! vCard 3.0 property and parameter names (RFC 2426).

// Identification
pub const FN: &str = "FN";
pub const N: &str = "N";
pub const NICKNAME: &str = "NICKNAME";
pub const PHOTO: &str = "PHOTO";
pub const BDAY: &str = "BDAY";

// Delivery addressing
pub const ADR: &str = "ADR";
pub const LABEL: &str = "LABEL";

// Telecommunications
pub const TEL: &str = "TEL";
pub const EMAIL: &str = "EMAIL";

// Geographical
pub const TZ: &str = "TZ";

// Organizational
pub const TITLE: &str = "TITLE";
pub const ORG: &str = "ORG";

// Explanatory
pub const CATEGORIES: &str = "CATEGORIES";
pub const NOTE: &str = "NOTE";
pub const PRODID: &str = "PRODID";
pub const REV: &str = "REV";
pub const UID: &str = "UID";
pub const URL: &str = "URL";

// Extensions
pub const X_ANNIVERSARY: &str = "X-ANNIVERSARY";
pub const X_RELATIONSHIP: &str = "X-RELATIONSHIP";
pub const X_AIM: &str = "X-AIM";
pub const X_GTALK: &str = "X-GTALK";
pub const X_ICQ: &str = "X-ICQ";
pub const X_JABBER: &str = "X-JABBER";
pub const X_MSN: &str = "X-MSN";
pub const X_YAHOO: &str = "X-YAHOO";
pub const X_SKYPE: &str = "X-SKYPE";
pub const X_QQ: &str = "X-QQ";
pub const X_GADUGADU: &str = "X-GADUGADU";

// Structure
pub const BEGIN: &str = "BEGIN";
pub const END: &str = "END";
pub const VERSION: &str = "VERSION";
pub const VCARD: &str = "VCARD";

/// Parameter names and fixed parameter values.
pub mod params {
    pub const TYPE: &str = "TYPE";
    pub const VALUE: &str = "VALUE";

    pub const PREF: &str = "PREF";
    pub const URI: &str = "URI";
    pub const CELL: &str = "cell";
    pub const MOBILE: &str = "mobile";
}
