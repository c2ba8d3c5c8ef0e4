//! Strict structural validation of narrator replies.
//!
//! A reply must contain four labeled sections in this order:
//!
//! ```text
//! LOCATION:
//! <where the Waker is>
//!
//! SCENE:
//! <what is happening>
//!
//! OPTIONS:
//! - <2 to 4 bullets>
//!
//! STATS:
//! - Health: <0..=100>
//! - Inventory: <comma-separated items | Empty>
//! - Notable Traits: <free text>
//! ```
//!
//! Labels are matched case-sensitively with surrounding whitespace ignored.
//! Text after a label's colon on the same line belongs to that section.
//! Anything before `LOCATION:` is ignored. Nothing is repaired: every
//! deviation is reported as a [`ContractError`].

use crate::{Inventory, Stats, StoryFrame};
use strum::IntoEnumIterator;
use tides_error::{ContractError, ContractErrorKind};
use tracing::debug;

const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 4;
const MAX_HEALTH: i64 = 100;

const HEALTH: &str = "Health";
const INVENTORY: &str = "Inventory";
const TRAITS: &str = "Notable Traits";

/// The labeled sections of a reply, in required order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Section {
    /// `LOCATION:`
    Location,
    /// `SCENE:`
    Scene,
    /// `OPTIONS:`
    Options,
    /// `STATS:`
    Stats,
}

impl Section {
    /// Label text without the trailing colon.
    pub fn label(self) -> &'static str {
        match self {
            Section::Location => "LOCATION",
            Section::Scene => "SCENE",
            Section::Options => "OPTIONS",
            Section::Stats => "STATS",
        }
    }

    /// Recognize a header line, returning the section and any inline text.
    fn header(line: &str) -> Option<(Section, &str)> {
        let trimmed = line.trim();
        Section::iter().find_map(|section| {
            trimmed
                .strip_prefix(section.label())?
                .strip_prefix(':')
                .map(|rest| (section, rest.trim()))
        })
    }
}

/// Parse and validate a narrator reply.
///
/// # Errors
///
/// Returns a [`ContractError`] when a section is missing, duplicated or out
/// of order, when OPTIONS holds fewer than two or more than four bullets,
/// when a STATS line is missing or repeated, or when Health is not an
/// integer in `0..=100`.
///
/// # Examples
///
/// ```
/// use tides_core::parse_story_frame;
///
/// let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- go\nSTATS:\n- Health: 80\n- Inventory: Empty\n- Notable Traits: calm";
/// assert!(parse_story_frame(reply).is_err());
/// ```
pub fn parse_story_frame(reply: &str) -> Result<StoryFrame, ContractError> {
    let bodies = split_sections(reply)?;
    let [location, scene, options, stats] = bodies;

    Ok(StoryFrame::new(
        prose(Section::Location, &location)?,
        prose(Section::Scene, &scene)?,
        parse_options(&options)?,
        parse_stats(&stats)?,
    ))
}

fn split_sections(reply: &str) -> Result<[Vec<&str>; 4], ContractError> {
    let mut found: Vec<(Section, Vec<&str>)> = Vec::with_capacity(4);

    for line in reply.lines() {
        if let Some((section, inline)) = Section::header(line) {
            if found.iter().any(|(seen, _)| *seen == section) {
                return Err(ContractError::new(ContractErrorKind::DuplicateSection(
                    section.to_string(),
                )));
            }
            match Section::iter().nth(found.len()) {
                Some(expected) if expected != section => {
                    return Err(ContractError::new(ContractErrorKind::OutOfOrder {
                        found: section.to_string(),
                        expected: expected.to_string(),
                    }));
                }
                _ => {}
            }
            let mut body = Vec::new();
            if !inline.is_empty() {
                body.push(inline);
            }
            found.push((section, body));
        } else if let Some((_, body)) = found.last_mut() {
            body.push(line);
        } else if !line.trim().is_empty() {
            debug!(line, "Ignoring text before LOCATION section");
        }
    }

    if let Some(missing) = Section::iter().nth(found.len()) {
        return Err(ContractError::new(ContractErrorKind::MissingSection(
            missing.to_string(),
        )));
    }

    let mut bodies = found.into_iter().map(|(_, body)| body);
    Ok(std::array::from_fn(|_| bodies.next().unwrap_or_default()))
}

fn prose(section: Section, body: &[&str]) -> Result<String, ContractError> {
    let text = body.join("\n").trim().to_string();
    if text.is_empty() {
        return Err(ContractError::new(ContractErrorKind::EmptySection(
            section.to_string(),
        )));
    }
    Ok(text)
}

fn strip_bullet(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    ['-', '*', '•']
        .into_iter()
        .find_map(|marker| trimmed.strip_prefix(marker))
        .map(str::trim)
}

fn parse_options(body: &[&str]) -> Result<Vec<String>, ContractError> {
    let mut options = Vec::new();
    for line in body {
        let Some(option) = strip_bullet(line) else {
            if !line.trim().is_empty() {
                debug!(line, "Ignoring non-bullet line in OPTIONS");
            }
            continue;
        };
        if option.is_empty() {
            return Err(ContractError::new(ContractErrorKind::EmptyOption(
                options.len() + 1,
            )));
        }
        options.push(option.to_string());
    }

    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
        return Err(ContractError::new(ContractErrorKind::OptionCount(
            options.len(),
        )));
    }
    Ok(options)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatKey {
    Health,
    Inventory,
    Traits,
}

fn parse_stats(body: &[&str]) -> Result<Stats, ContractError> {
    let mut health: Option<&str> = None;
    let mut inventory: Option<&str> = None;
    let mut traits: Option<String> = None;
    let mut last_key: Option<StatKey> = None;

    for line in body {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let entry = strip_bullet(trimmed).unwrap_or(trimmed);

        if let Some(value) = stat_value(entry, HEALTH) {
            once(&mut health, value, HEALTH)?;
            last_key = Some(StatKey::Health);
        } else if let Some(value) = stat_value(entry, INVENTORY) {
            once(&mut inventory, value, INVENTORY)?;
            last_key = Some(StatKey::Inventory);
        } else if let Some(value) = stat_value(entry, TRAITS) {
            once(&mut traits, value.to_string(), TRAITS)?;
            last_key = Some(StatKey::Traits);
        } else if let (Some(StatKey::Traits), Some(traits)) = (last_key, traits.as_mut()) {
            // Wrapped Notable Traits line
            if !traits.is_empty() {
                traits.push(' ');
            }
            traits.push_str(entry);
        } else {
            debug!(line = entry, "Ignoring unrecognized STATS line");
        }
    }

    let health = parse_health(required(health, HEALTH)?)?;
    let inventory = parse_inventory(required(inventory, INVENTORY)?);
    let traits = required(traits.as_deref(), TRAITS)?.to_string();

    Ok(Stats::new(health, inventory?, traits))
}

fn once<T>(slot: &mut Option<T>, value: T, key: &str) -> Result<(), ContractError> {
    if slot.is_some() {
        return Err(ContractError::new(ContractErrorKind::DuplicateStat(
            key.to_string(),
        )));
    }
    *slot = Some(value);
    Ok(())
}

fn stat_value<'a>(entry: &'a str, key: &str) -> Option<&'a str> {
    entry
        .strip_prefix(key)?
        .trim_start()
        .strip_prefix(':')
        .map(str::trim)
}

fn required<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, ContractError> {
    match value {
        None => Err(ContractError::new(ContractErrorKind::MissingStat(
            key.to_string(),
        ))),
        Some(v) if v.trim().is_empty() => Err(ContractError::new(
            ContractErrorKind::EmptyStat(key.to_string()),
        )),
        Some(v) => Ok(v),
    }
}

fn parse_health(raw: &str) -> Result<u8, ContractError> {
    let value: i64 = raw.parse().map_err(|_| {
        ContractError::new(ContractErrorKind::HealthNotInteger(raw.to_string()))
    })?;
    if !(0..=MAX_HEALTH).contains(&value) {
        return Err(ContractError::new(ContractErrorKind::HealthOutOfRange(
            value,
        )));
    }
    Ok(value as u8)
}

fn parse_inventory(raw: &str) -> Result<Inventory, ContractError> {
    let unquoted = raw.trim_matches(|c| c == '\'' || c == '"').trim();
    let marker = unquoted.trim_end_matches(['.', '!', ';']).trim_end();
    if marker.eq_ignore_ascii_case("empty") {
        return Ok(Inventory::Empty);
    }
    let items: Vec<String> = unquoted
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        return Err(ContractError::new(ContractErrorKind::EmptyStat(
            INVENTORY.to_string(),
        )));
    }
    Ok(Inventory::Items(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(reply: &str) -> ContractErrorKind {
        parse_story_frame(reply).unwrap_err().kind
    }

    const REPLY: &str = "\
LOCATION:
The half-sunken lighthouse at Greywater Cove.

SCENE:
Salt spray hisses against the lens housing.

A vial glows faintly at your feet.

OPTIONS:
- Pick up the vial
- Climb the stairs
- Call out for Arielle

STATS:
- Health: 72
- Inventory: rusted wrench, copper coil
- Notable Traits: Thoughtful, waterlogged,
  slightly wounded";

    #[test]
    fn parses_full_reply() {
        let frame = parse_story_frame(REPLY).unwrap();
        assert_eq!(frame.location(), "The half-sunken lighthouse at Greywater Cove.");
        assert!(frame.scene().contains("\n\nA vial glows"));
        assert_eq!(frame.options().len(), 3);
        assert_eq!(*frame.stats().health(), 72);
        assert_eq!(
            frame.stats().inventory().items(),
            &["rusted wrench".to_string(), "copper coil".to_string()]
        );
        assert_eq!(
            frame.stats().traits(),
            "Thoughtful, waterlogged, slightly wounded"
        );
    }

    #[test]
    fn inline_header_text_and_preamble() {
        let reply = "Here is the next scene.\n  LOCATION: A cove  \nSCENE: Waves.\nOPTIONS:\n* swim\n• dive\nSTATS:\nHealth: 0\nInventory: 'Empty'\nNotable Traits: drowned";
        let frame = parse_story_frame(reply).unwrap();
        assert_eq!(frame.location(), "A cove");
        assert_eq!(frame.scene(), "Waves.");
        assert_eq!(frame.options(), &vec!["swim".to_string(), "dive".to_string()]);
        assert!(frame.stats().inventory().is_empty());
        assert!(frame.is_loop_over());
    }

    #[test]
    fn out_of_order_sections_rejected() {
        let reply = "SCENE:\nB\nLOCATION:\nA\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 1\n- Inventory: Empty\n- Notable Traits: x";
        assert_eq!(
            kind(reply),
            ContractErrorKind::OutOfOrder {
                found: "SCENE".into(),
                expected: "LOCATION".into()
            }
        );
    }

    #[test]
    fn duplicate_section_rejected() {
        let reply = "LOCATION:\nA\nLOCATION:\nA\nSCENE:\nB";
        assert_eq!(kind(reply), ContractErrorKind::DuplicateSection("LOCATION".into()));
    }

    #[test]
    fn lowercase_label_not_recognized() {
        let reply = "location:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 1\n- Inventory: Empty\n- Notable Traits: x";
        assert!(matches!(kind(reply), ContractErrorKind::OutOfOrder { .. }));
    }

    #[test]
    fn empty_prose_rejected() {
        let reply = "LOCATION:\n\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 1\n- Inventory: Empty\n- Notable Traits: x";
        assert_eq!(kind(reply), ContractErrorKind::EmptySection("LOCATION".into()));
    }

    #[test]
    fn empty_bullet_rejected() {
        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n-\nSTATS:\n- Health: 1\n- Inventory: Empty\n- Notable Traits: x";
        assert_eq!(kind(reply), ContractErrorKind::EmptyOption(2));
    }

    #[test]
    fn health_must_be_integer() {
        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 80.5\n- Inventory: Empty\n- Notable Traits: x";
        assert_eq!(kind(reply), ContractErrorKind::HealthNotInteger("80.5".into()));

        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: -1\n- Inventory: Empty\n- Notable Traits: x";
        assert_eq!(kind(reply), ContractErrorKind::HealthOutOfRange(-1));
    }

    #[test]
    fn missing_and_blank_stats_rejected() {
        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 10\n- Notable Traits: x";
        assert_eq!(kind(reply), ContractErrorKind::MissingStat("Inventory".into()));

        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 10\n- Inventory: ,\n- Notable Traits: x";
        assert_eq!(kind(reply), ContractErrorKind::EmptyStat("Inventory".into()));

        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 10\n- Inventory: Empty\n- Notable Traits:";
        assert_eq!(kind(reply), ContractErrorKind::EmptyStat("Notable Traits".into()));
    }

    #[test]
    fn repeated_stats_rejected() {
        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 150\n- Health: 80\n- Inventory: Empty\n- Notable Traits: x";
        assert_eq!(kind(reply), ContractErrorKind::DuplicateStat("Health".into()));

        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 80\n- Inventory: Empty\n- Inventory: wrench\n- Notable Traits: x";
        assert_eq!(kind(reply), ContractErrorKind::DuplicateStat("Inventory".into()));

        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 80\n- Inventory: Empty\n- Notable Traits: x\n- Notable Traits: y";
        assert_eq!(kind(reply), ContractErrorKind::DuplicateStat("Notable Traits".into()));
    }

    #[test]
    fn empty_inventory_with_trailing_period() {
        let reply = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- a\n- b\nSTATS:\n- Health: 80\n- Inventory: Empty.\n- Notable Traits: x";
        assert_eq!(*parse_story_frame(reply).unwrap().stats().inventory(), Inventory::Empty);
    }
}
