//! Attribute dispatch: decides which content lines an attribute produces.
//!
//! Plurality is decided by attribute name, not by value shape: `tags` is a
//! list of scalars written on one line, `emails` gets one line per instance,
//! and `organizations` is collapsed to its primary instance.

use super::encoder::{Singular, encode_value};
use crate::rfc::poco::{AttributeValue, Complex, FORMATTED, VALUE};
use crate::rfc::vcard::core::{Plurality, attributes, descriptor};

/// Sub-field of an organization that becomes a separate `TITLE` line.
const ORGANIZATION_TITLE: &str = "title";

/// Maps one attribute to its folded content lines, in output order.
///
/// Unrecognized attributes, unencodable values, and empty lists yield no
/// lines.
#[must_use]
pub fn map_attribute(attribute: &str, value: &AttributeValue) -> Vec<String> {
    let mut lines = Vec::new();

    if value.is_empty_list() {
        tracing::trace!(attribute, "Skipping empty plural attribute");
        return lines;
    }

    let plurality = descriptor(attribute).map_or(Plurality::PerInstance, |d| d.plurality);

    match value {
        AttributeValue::ScalarList(items) => match plurality {
            Plurality::Simple => lines.extend(encode_value(attribute, Singular::List(items))),
            Plurality::Primary => {
                lines.extend(
                    items
                        .first()
                        .and_then(|first| encode_value(attribute, Singular::Text(first))),
                );
            }
            Plurality::PerInstance => {
                lines.extend(
                    items
                        .iter()
                        .filter_map(|item| encode_value(attribute, Singular::Text(item))),
                );
            }
        },
        AttributeValue::ComplexList(instances) => match plurality {
            Plurality::Simple => {
                let values: Vec<String> = instances
                    .iter()
                    .filter_map(|c| c.get_str(VALUE))
                    .map(str::to_string)
                    .collect();
                lines.extend(encode_value(attribute, Singular::List(&values)));
            }
            Plurality::Primary => {
                if let Some(primary) = primary_instance(instances, Complex::is_primary) {
                    map_primary(attribute, primary, &mut lines);
                }
            }
            Plurality::PerInstance => {
                for instance in instances {
                    map_instance(attribute, instance, &mut lines);
                }
            }
        },
        AttributeValue::Scalar(_) | AttributeValue::Complex(_) => {
            lines.extend(Singular::from_attribute(value).and_then(|v| encode_value(attribute, v)));
        }
    }

    lines
}

/// Returns the first instance marked primary, else the first instance.
#[must_use]
pub fn primary_instance<T>(instances: &[T], is_primary: impl Fn(&T) -> bool) -> Option<&T> {
    instances
        .iter()
        .find(|&instance| is_primary(instance))
        .or_else(|| instances.first())
}

/// Writes the organization line and, when present, its title line.
fn map_primary(attribute: &str, primary: &Complex, lines: &mut Vec<String>) {
    lines.extend(encode_value(attribute, Singular::Object(primary)));

    if attribute == attributes::ORGANIZATIONS
        && let Some(title) = primary.get_str(ORGANIZATION_TITLE)
    {
        lines.extend(encode_value(attributes::TITLE, Singular::Text(title)));
    }
}

fn map_instance(attribute: &str, instance: &Complex, lines: &mut Vec<String>) {
    lines.extend(encode_value(attribute, Singular::Object(instance)));

    // Addresses keep their structured line and add the formatted label.
    if attribute == attributes::ADDRESSES && instance.contains(FORMATTED) {
        lines.extend(encode_value(attributes::LABEL, Singular::Object(instance)));
    }
}
