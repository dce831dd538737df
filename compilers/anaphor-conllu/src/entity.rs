//! Coreference brackets carried in the MISC column (`Entity=...`).
//!
//! `(e3-person-1` opens a mention of cluster `e3`, `e3)` closes it and
//! `(e3-person-1)` is a single-token mention. Brackets may be chained:
//! `Entity=(e1-person-2(e2-place-1)`.

use anaphor_protocol::EntityType;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, map, opt},
    multi::many1,
    sequence::{preceded, terminated},
    IResult,
};

/// Attribute layout used when a document does not declare one (CorefUD).
pub const DEFAULT_LAYOUT: &str = "eid-etype-head-other";

/// Comment that declares the attribute order of `Entity=` values.
pub const LAYOUT_COMMENT: &str = "global.Entity";

/// Where the cluster id and entity type sit inside an opening bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityLayout {
    pub id: usize,
    pub etype: Option<usize>,
}

impl EntityLayout {
    /// Reads a layout such as `GRP-etype-infstat-...`. The id attribute is
    /// `eid` (CorefUD) or `GRP` (older GUM releases); without one the first
    /// attribute is taken as the id.
    pub fn parse(layout: &str) -> Self {
        let attrs: Vec<&str> = layout.trim().split('-').collect();
        let id = attrs
            .iter()
            .position(|a| *a == "eid" || *a == "GRP")
            .unwrap_or(0);
        let etype = attrs.iter().position(|a| *a == "etype");
        Self { id, etype }
    }

    pub fn entity_type(&self, attrs: &[&str]) -> EntityType {
        self.etype
            .and_then(|i| attrs.get(i))
            .map(|label| EntityType::from_label(label))
            .unwrap_or(EntityType::Other)
    }
}

impl Default for EntityLayout {
    fn default() -> Self {
        Self::parse(DEFAULT_LAYOUT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bracket<'a> {
    Open {
        attrs: Vec<&'a str>,
        /// `(…)` on a single token.
        closes: bool,
    },
    Close {
        eid: &'a str,
    },
}

fn body(input: &str) -> IResult<&str, &str> {
    take_while1(|c| c != '(' && c != ')')(input)
}

fn opening(input: &str) -> IResult<&str, Bracket<'_>> {
    let (rest, attrs) = preceded(char('('), body)(input)?;
    let (rest, closes) = opt(char(')'))(rest)?;
    Ok((
        rest,
        Bracket::Open {
            attrs: attrs.split('-').collect(),
            closes: closes.is_some(),
        },
    ))
}

fn closing(input: &str) -> IResult<&str, Bracket<'_>> {
    map(terminated(body, char(')')), |eid| Bracket::Close { eid })(input)
}

/// Parses the value of an `Entity=` MISC attribute.
pub fn parse_brackets(value: &str) -> Option<Vec<Bracket<'_>>> {
    all_consuming(many1(alt((opening, closing))))(value)
        .ok()
        .map(|(_, brackets)| brackets)
}

/// The cluster an eid belongs to. Parts of a discontinuous mention carry
/// a `[i/n]` suffix (`e1[1/2]`) that is not part of the cluster id.
pub fn cluster_key(eid: &str) -> &str {
    match eid.strip_suffix(']').and_then(|s| s.rsplit_once('[')) {
        Some((base, part)) if !base.is_empty() && part.contains('/') => base,
        _ => eid,
    }
}

/// Extracts the `Entity=` value from a MISC column.
pub fn entity_value(misc: &str) -> Option<&str> {
    misc.split('|').find_map(|item| item.strip_prefix("Entity="))
}
