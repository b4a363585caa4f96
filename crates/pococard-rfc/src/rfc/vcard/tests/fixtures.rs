//! Contact fixtures and their expected vCard output.

use crate::rfc::poco::{AttributeValue, Complex, ContactRecord};

/// Portable Contacts sample for Joseph Smarr.
pub fn joseph_smarr() -> ContactRecord {
    ContactRecord::new()
        .with("displayName", AttributeValue::scalar("Joseph Smarr"))
        .with(
            "name",
            AttributeValue::Complex(
                Complex::new()
                    .with("givenName", "Joseph")
                    .with("familyName", "Smarr"),
            ),
        )
        .with("note", AttributeValue::scalar("in vCard, escape commas"))
        .with(
            "emails",
            AttributeValue::ComplexList(vec![
                Complex::new()
                    .with("value", "joseph@plaxo.com")
                    .with("type", "work"),
            ]),
        )
        .with(
            "tags",
            AttributeValue::scalars(["math enthusiast", "badass mc"]),
        )
}

/// Expected output for [`joseph_smarr`] (default product identifier).
pub const JOSEPH_SMARR_VCARD: &str = "\
BEGIN:VCARD\n\
VERSION:3.0\n\
PRODID:-//pococard//Portable Contacts vCard Export//EN\n\
FN:Joseph Smarr\n\
N:Smarr;Joseph;;;\n\
NOTE:in vCard\\, escape commas\n\
EMAIL;TYPE=WORK:joseph@plaxo.com\n\
CATEGORIES:math enthusiast,badass mc\n\
END:VCARD";

/// Same contact as [`joseph_smarr`], as a Portable Contacts response.
pub const JOSEPH_SMARR_JSON: &str = r#"{
  "startIndex": 0,
  "itemsPerPage": 1,
  "totalResults": 1,
  "entry": {
    "displayName": "Joseph Smarr",
    "name": { "givenName": "Joseph", "familyName": "Smarr" },
    "note": "in vCard, escape commas",
    "emails": [{ "value": "joseph@plaxo.com", "type": "work" }],
    "tags": ["math enthusiast", "badass mc"]
  }
}"#;

/// A contact using every recognized attribute.
pub const FULL_CONTACT_JSON: &str = r#"{
  "id": "703887",
  "displayName": "Mork Hashimoto",
  "name": {
    "familyName": "Hashimoto",
    "givenName": "Mork",
    "middleName": "R.",
    "honorificPrefix": "Dr.",
    "honorificSuffix": "Jr."
  },
  "nickname": "Morky",
  "birthday": "1984-03-16",
  "anniversary": "2008-06-01",
  "updated": "2008-01-23T04:56:22Z",
  "utcOffset": "-08:00",
  "note": "Line one\nLine two; with semicolon",
  "gender": "male",
  "emails": [
    { "value": "mhashimoto-04@plaxo.com", "type": "work", "primary": "true" },
    { "value": "mhashimoto@gmail.com", "type": "home" }
  ],
  "urls": [{ "value": "http://www.seeyellow.com", "type": "work" }],
  "phoneNumbers": [
    { "value": "KLONDIKE5", "type": "work" },
    { "value": "650-123-4567", "type": "mobile" }
  ],
  "photos": [{ "value": "http://sample.site.org/photos/12345.jpg", "type": "thumbnail" }],
  "ims": [{ "value": "plaxodev8", "type": "aim" }],
  "addresses": [
    {
      "type": "home",
      "streetAddress": "742 Evergreen Terrace\nSuite 123",
      "locality": "Springfield",
      "region": "VT",
      "postalCode": "12345",
      "country": "USA",
      "formatted": "742 Evergreen Terrace\nSuite 123\nSpringfield, VT 12345 USA"
    }
  ],
  "organizations": [
    { "name": "Burns Worldwide", "title": "Head Bee Guy" },
    { "name": "Plaxo", "department": "Engineering", "title": "Architect", "primary": true }
  ],
  "tags": ["plaxo guy"],
  "relationships": [{ "value": "Bob Smith", "type": "friend" }]
}"#;

/// Expected output for [`FULL_CONTACT_JSON`].
pub const FULL_CONTACT_VCARD: &str = concat!(
    "BEGIN:VCARD\n",
    "VERSION:3.0\n",
    "PRODID:-//pococard//Portable Contacts vCard Export//EN\n",
    "UID:703887\n",
    "FN:Mork Hashimoto\n",
    "N:Hashimoto;Mork;R.;Dr.;Jr.\n",
    "NICKNAME:Morky\n",
    "BDAY:1984-03-16\n",
    "X-ANNIVERSARY:2008-06-01\n",
    "REV:2008-01-23T04:56:22Z\n",
    "TZ:-08:00\n",
    "NOTE:Line one\\nLine two\\; with semicolon\n",
    "EMAIL;TYPE=WORK;TYPE=PREF:mhashimoto-04@plaxo.com\n",
    "EMAIL;TYPE=HOME:mhashimoto@gmail.com\n",
    "URL;TYPE=WORK:http://www.seeyellow.com\n",
    "TEL;TYPE=WORK:KLONDIKE5\n",
    "TEL;TYPE=CELL:650-123-4567\n",
    "PHOTO;TYPE=THUMBNAIL;VALUE=URI:http://sample.site.org/photos/12345.jpg\n",
    "X-AIM;TYPE=AIM:plaxodev8\n",
    "ADR;TYPE=HOME:;;742 Evergreen Terrace\\nSuite 123;Springfield;VT;12345;USA\n",
    // 76 characters, so the last one moves to a continuation line
    "LABEL;TYPE=HOME:742 Evergreen Terrace\\nSuite 123\\nSpringfield\\, VT 12345 US\n",
    " A\n",
    "ORG;TYPE=PREF:Plaxo;Engineering\n",
    "TITLE:Architect\n",
    "CATEGORIES:plaxo guy\n",
    "X-RELATIONSHIP;TYPE=FRIEND:Bob Smith\n",
    "END:VCARD",
);
