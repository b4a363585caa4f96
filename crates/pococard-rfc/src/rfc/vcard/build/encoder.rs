//! Single-value encoding: identifier, parameters, and escaped body.

use super::escape::{escape_list, escape_text};
use super::fold::fold_line;
use crate::rfc::poco::{AttributeValue, Complex, FORMATTED, TYPE, VALUE};
use crate::rfc::vcard::core::{
    FieldDescriptor, Identifier, attributes, descriptor, im_identifier, names::params,
};

/// A borrowed value that becomes at most one content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Singular<'a> {
    Text(&'a str),
    Object(&'a Complex),
    /// Scalars written as one comma-separated list.
    List(&'a [String]),
}

impl<'a> Singular<'a> {
    /// Borrows an attribute value; lists of objects have no singular form.
    #[must_use]
    pub fn from_attribute(value: &'a AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Scalar(s) => Some(Self::Text(s)),
            AttributeValue::Complex(c) => Some(Self::Object(c)),
            AttributeValue::ScalarList(items) => Some(Self::List(items)),
            AttributeValue::ComplexList(_) => None,
        }
    }
}

/// Encodes one attribute value as a folded content line.
///
/// Returns `None` when the attribute is not recognized or its value has no
/// vCard rendering.
#[must_use]
pub fn encode_singular(attribute: &str, value: &AttributeValue) -> Option<String> {
    let Some(value) = Singular::from_attribute(value) else {
        tracing::trace!(attribute, "Dropping list of objects on the singular path");
        return None;
    };
    encode_value(attribute, value)
}

/// Encodes a borrowed value as a folded content line.
///
/// This is the path every emitted attribute line goes through.
#[must_use]
pub fn encode_value(attribute: &str, value: Singular<'_>) -> Option<String> {
    let Some(field) = descriptor(attribute) else {
        tracing::trace!(attribute, "Dropping unrecognized attribute");
        return None;
    };

    let object = match value {
        Singular::Object(c) => Some(c),
        Singular::Text(_) | Singular::List(_) => None,
    };

    let Some(identifier) = resolve_identifier(field, object) else {
        tracing::trace!(attribute, "Dropping attribute with no vCard identifier");
        return None;
    };

    let Some(body) = encode_body(field, value) else {
        tracing::trace!(attribute, identifier, "Dropping value with no vCard rendering");
        return None;
    };

    let mut line = String::with_capacity(identifier.len() + body.len() + 16);
    line.push_str(identifier);
    if let Some(object) = object {
        push_type_params(object, &mut line);
    }
    if field.attribute == attributes::PHOTOS {
        push_param(params::VALUE, params::URI, &mut line);
    }
    line.push(':');
    line.push_str(&body);

    Some(fold_line(&line))
}

fn resolve_identifier(
    field: &FieldDescriptor,
    object: Option<&Complex>,
) -> Option<&'static str> {
    match field.identifier {
        Identifier::Fixed(identifier) => Some(identifier),
        Identifier::ByNetwork => object
            .and_then(|c| c.get_str(TYPE))
            .and_then(im_identifier),
    }
}

/// Appends `;TYPE=<type>` and `;TYPE=PREF` as the value calls for.
fn push_type_params(object: &Complex, line: &mut String) {
    if let Some(kind) = object.get_str(TYPE).map(str::trim).filter(|t| !t.is_empty()) {
        let kind = if kind.eq_ignore_ascii_case(params::MOBILE) {
            params::CELL
        } else {
            kind
        };
        let kind = param_text(kind);
        if !kind.is_empty() {
            push_param(params::TYPE, &kind.to_uppercase(), line);
        }
    }
    if object.is_primary() {
        push_param(params::TYPE, params::PREF, line);
    }
}

/// Removes characters that would end the line or split the parameter list.
fn param_text(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | ';' | ':' | ',' | '"'))
        .collect()
}

fn push_param(name: &str, value: &str, line: &mut String) {
    line.push(';');
    line.push_str(name);
    line.push('=');
    line.push_str(value);
}

fn encode_body(field: &FieldDescriptor, value: Singular<'_>) -> Option<String> {
    match value {
        Singular::Text(s) => non_empty(s).map(escape_text),
        Singular::List([]) => None,
        Singular::List(items) => Some(escape_list(items)),
        Singular::Object(object) => encode_object_body(field, object),
    }
}

fn encode_object_body(field: &FieldDescriptor, object: &Complex) -> Option<String> {
    // A label always shows the formatted text, even next to a `value`.
    if field.attribute == attributes::LABEL
        && let Some(formatted) = object.get_str(FORMATTED)
    {
        return non_empty(formatted).map(escape_text);
    }
    if let Some(value) = object.get_str(VALUE) {
        return non_empty(value).map(escape_text);
    }
    if field.is_multi_part() {
        return Some(encode_parts(field.parts, object));
    }
    None
}

/// Renders every configured position, leaving absent or reserved ones empty.
fn encode_parts(parts: &[&str], object: &Complex) -> String {
    let mut body = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            body.push(';');
        }
        if part.is_empty() {
            continue;
        }
        if let Some(text) = object.get_str(part) {
            body.push_str(&escape_text(text));
        }
    }
    body
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
