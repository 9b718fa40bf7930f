//! Typed value parsers for individual properties.
//!
//! Each parser takes the property it is decoding so errors can name the
//! property and the line it came from.

use std::str::FromStr;

use crate::error::{MonError, Result};
use crate::types::{CountRange, InventoryItem, Outfit, SkillDescriptor, SkillTuple, Strategy};

use super::element::{parse_elements, Element};
use super::lines::Property;

/// Integer types a property can be declared with.
pub trait FixedWidth: FromStr + Copy {
    /// Description used in conversion errors.
    const EXPECTED: &'static str;
}

impl FixedWidth for u8 {
    const EXPECTED: &'static str = "an integer in 0..=255";
}

impl FixedWidth for u16 {
    const EXPECTED: &'static str = "an integer in 0..=65535";
}

impl FixedWidth for u32 {
    const EXPECTED: &'static str = "an integer in 0..=4294967295";
}

impl FixedWidth for i32 {
    const EXPECTED: &'static str = "a signed 32-bit integer";
}

pub(crate) fn syntax_error(prop: &Property, message: impl Into<String>) -> MonError {
    MonError::Syntax {
        property: prop.name.clone(),
        message: message.into(),
        line: prop.line(),
    }
}

pub(crate) fn numeric_error(prop: &Property, text: &str, expected: &'static str) -> MonError {
    MonError::NumericConversion {
        property: prop.name.clone(),
        value: text.trim().to_string(),
        expected,
        line: prop.line(),
    }
}

/// Parse decimal text into a fixed-width integer. Out-of-range text is an error.
pub fn parse_number<T: FixedWidth>(prop: &Property, text: &str) -> Result<T> {
    text.trim()
        .parse::<T>()
        .map_err(|_| numeric_error(prop, text, T::EXPECTED))
}

/// Trim a text value and remove one pair of surrounding double quotes.
pub fn parse_text(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

/// Parse a compound value into elements.
pub fn parse_property_elements(prop: &Property) -> Result<Vec<Element>> {
    parse_elements(&prop.value).map_err(|e| syntax_error(prop, e.0))
}

fn single_tuple<'a>(prop: &Property, elements: &'a [Element], what: &str) -> Result<Vec<&'a str>> {
    match elements {
        [element] if !element.is_flag => Ok(element.texts().collect()),
        _ => Err(syntax_error(prop, format!("expected a single {} tuple", what))),
    }
}

/// Parse `(look, head-body-legs-feet)` or `(look, head, body, legs, feet)`.
pub fn parse_outfit(prop: &Property) -> Result<Outfit> {
    let elements = parse_property_elements(prop)?;
    let parts = single_tuple(prop, &elements, "outfit")?;

    let colours: Vec<&str> = match parts.as_slice() {
        [_, colours] => colours.split('-').collect(),
        [_, rest @ ..] => rest.to_vec(),
        [] => Vec::new(),
    };
    if parts.is_empty() || colours.len() != 4 {
        return Err(syntax_error(
            prop,
            "expected `(look, head-body-legs-feet)` or five numbers",
        ));
    }

    Ok(Outfit {
        look_type: parse_number(prop, parts[0])?,
        head: parse_number(prop, colours[0])?,
        body: parse_number(prop, colours[1])?,
        legs: parse_number(prop, colours[2])?,
        feet: parse_number(prop, colours[3])?,
    })
}

/// Parse `(closest, weakest, strongest, random)`.
pub fn parse_strategy(prop: &Property) -> Result<Strategy> {
    let elements = parse_property_elements(prop)?;
    let parts = single_tuple(prop, &elements, "strategy")?;

    let [closest, weakest, strongest, random] = parts.as_slice() else {
        return Err(syntax_error(
            prop,
            format!("expected 4 strategy weights, found {}", parts.len()),
        ));
    };

    Ok(Strategy {
        closest: parse_number(prop, closest)?,
        weakest: parse_number(prop, weakest)?,
        strongest: parse_number(prop, strongest)?,
        random: parse_number(prop, random)?,
    })
}

/// Parse a list of seven-component skill tuples.
///
/// Components are positional; a `key=` prefix is accepted and only the value
/// is used.
pub fn parse_skills(prop: &Property) -> Result<Vec<SkillTuple>> {
    parse_property_elements(prop)?
        .iter()
        .map(|element| {
            let parts: Vec<&str> = element.texts().collect();
            let [name, default, current, maximum, target, factor, per_level] = parts.as_slice()
            else {
                return Err(syntax_error(
                    prop,
                    format!(
                        "skill `{}` needs 7 components, found {}",
                        element.name,
                        parts.len()
                    ),
                ));
            };
            if element.is_flag {
                return Err(syntax_error(prop, format!("skill `{}` must be a tuple", name)));
            }

            Ok(SkillTuple {
                name: name.to_string(),
                descriptor: SkillDescriptor {
                    default_level: parse_number(prop, default)?,
                    current_level: parse_number(prop, current)?,
                    maximum_level: parse_number(prop, maximum)?,
                    target_count: parse_number(prop, target)?,
                    count_increase_factor: parse_number(prop, factor)?,
                    increaser_per_level: parse_number(prop, per_level)?,
                },
            })
        })
        .collect()
}

/// Parse a drop count: `N` means 1 to N, `A-B` is explicit.
fn parse_count(prop: &Property, text: &str) -> Result<CountRange> {
    let text = text.trim();
    match text.split_once('-') {
        Some((min, max)) if !min.is_empty() => {
            let range = CountRange {
                min: parse_number(prop, min)?,
                max: parse_number(prop, max)?,
            };
            if range.min > range.max {
                return Err(syntax_error(
                    prop,
                    format!("count range `{}` is reversed", text),
                ));
            }
            Ok(range)
        }
        _ => {
            let max: u16 = parse_number(prop, text)?;
            Ok(CountRange { min: max.min(1), max })
        }
    }
}

/// Parse `(item, chance)` and `(item, count, chance)` tuples.
pub fn parse_inventory(prop: &Property) -> Result<Vec<InventoryItem>> {
    parse_property_elements(prop)?
        .iter()
        .map(|element| {
            let parts: Vec<&str> = element.texts().collect();
            let (item_id, count, chance) = match parts.as_slice() {
                [item_id, chance] if !element.is_flag => (*item_id, None, *chance),
                [item_id, count, chance] => (*item_id, Some(parse_count(prop, count)?), *chance),
                _ => {
                    return Err(syntax_error(
                        prop,
                        format!(
                            "inventory entry `{}` must be `(item, chance)` or `(item, count, chance)`",
                            element.name
                        ),
                    ))
                }
            };

            Ok(InventoryItem {
                item_id: parse_number(prop, item_id)?,
                chance: parse_number(prop, chance)?,
                count,
            })
        })
        .collect()
}

/// Parse a list of phrases. Quoted and bare entries are both accepted.
pub fn parse_phrases(prop: &Property) -> Result<Vec<String>> {
    parse_property_elements(prop)?
        .into_iter()
        .map(|element| {
            if element.is_flag || element.attributes.is_empty() {
                Ok(element.name)
            } else {
                Err(syntax_error(
                    prop,
                    format!("talk entry `({})` must be a string", element.name),
                ))
            }
        })
        .collect()
}
