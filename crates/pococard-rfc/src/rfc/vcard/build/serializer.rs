//! Contact record serialization.

use std::borrow::Cow;

use pococard_core::constants::{DEFAULT_PRODUCT_ID, VCARD_VERSION};

use super::fold::fold_line;
use super::mapper::map_attribute;
use crate::rfc::poco::ContactRecord;
use crate::rfc::vcard::core::names;

/// Line separator between content lines and between cards.
const LINE_BREAK: char = '\n';

/// Serializes contact records into vCard 3.0 documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSerializer {
    product_id: Cow<'static, str>,
}

impl Default for RecordSerializer {
    fn default() -> Self {
        Self {
            product_id: Cow::Borrowed(DEFAULT_PRODUCT_ID),
        }
    }
}

impl RecordSerializer {
    /// Creates a serializer that writes the given `PRODID` value.
    #[must_use]
    pub fn new(product_id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Serializes one record into a single vCard.
    ///
    /// ## Summary
    /// Writes the fixed header, one line per recognized attribute in record
    /// order, and the footer. Lines are separated by `\n`; there is no
    /// trailing newline.
    #[must_use]
    pub fn serialize_record(&self, record: &ContactRecord) -> String {
        let mut output = String::new();
        self.serialize_vcard(record, &mut output);
        output
    }

    /// Serializes records into consecutive vCards separated by one newline.
    ///
    /// An empty slice yields an empty string.
    #[must_use]
    pub fn serialize_records(&self, records: &[ContactRecord]) -> String {
        tracing::debug!(count = records.len(), "Serializing contact records");

        let mut output = String::new();
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                output.push(LINE_BREAK);
            }
            self.serialize_vcard(record, &mut output);
        }
        output
    }

    fn serialize_vcard(&self, record: &ContactRecord, output: &mut String) {
        push_line(output, &format!("{}:{}", names::BEGIN, names::VCARD));
        push_line(output, &format!("{}:{}", names::VERSION, VCARD_VERSION));
        push_line(
            output,
            &fold_line(&format!("{}:{}", names::PRODID, self.product_id)),
        );

        let mut emitted = 0_usize;
        for (attribute, value) in record.iter() {
            for line in map_attribute(attribute, value) {
                push_line(output, &line);
                emitted += 1;
            }
        }
        tracing::trace!(
            attributes = record.len(),
            lines = emitted,
            "Serialized contact record"
        );

        output.push_str(names::END);
        output.push(':');
        output.push_str(names::VCARD);
    }
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push(LINE_BREAK);
}

/// Serializes one record with the default product identifier.
#[must_use]
pub fn serialize_record(record: &ContactRecord) -> String {
    RecordSerializer::default().serialize_record(record)
}

/// Serializes records with the default product identifier.
#[must_use]
pub fn serialize_records(records: &[ContactRecord]) -> String {
    RecordSerializer::default().serialize_records(records)
}
