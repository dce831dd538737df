use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Case bucket of a syntactic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum GrammaticalCase {
    Nominative = 0,
    Accusative = 1,
    Oblique = 2,
    Genitive = 3,
    Other = 4,
}

impl GrammaticalCase {
    /// Table order of the competitor columns.
    pub const ALL: [GrammaticalCase; 5] = [
        GrammaticalCase::Nominative,
        GrammaticalCase::Accusative,
        GrammaticalCase::Oblique,
        GrammaticalCase::Genitive,
        GrammaticalCase::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "nom",
            GrammaticalCase::Accusative => "acc",
            GrammaticalCase::Oblique => "obl",
            GrammaticalCase::Genitive => "gen",
            GrammaticalCase::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Humanness {
    Human = 0,
    NonHuman = 1,
}

impl Humanness {
    pub const fn as_str(self) -> &'static str {
        match self {
            Humanness::Human => "human",
            Humanness::NonHuman => "non-human",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Pronominality {
    Pronominal = 0,
    NonPronominal = 1,
}

impl Pronominality {
    pub const fn as_str(self) -> &'static str {
        match self {
            Pronominality::Pronominal => "pronominal",
            Pronominality::NonPronominal => "non-pronominal",
        }
    }
}

/// Entity-type annotation of a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum EntityType {
    Person = 0,
    Place = 1,
    Organization = 2,
    Object = 3,
    Event = 4,
    Time = 5,
    Substance = 6,
    Animal = 7,
    Plant = 8,
    Abstract = 9,
    Quantity = 10,
    /// Unknown or missing annotation.
    Other = 11,
}

impl EntityType {
    /// Total: anything unrecognised becomes [`EntityType::Other`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "person" => EntityType::Person,
            "place" => EntityType::Place,
            "organization" => EntityType::Organization,
            "object" => EntityType::Object,
            "event" => EntityType::Event,
            "time" => EntityType::Time,
            "substance" => EntityType::Substance,
            "animal" => EntityType::Animal,
            "plant" => EntityType::Plant,
            "abstract" => EntityType::Abstract,
            "quantity" => EntityType::Quantity,
            _ => EntityType::Other,
        }
    }
}

/// Dependency relations that open a new clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum ClauseRelation {
    Rel,
    RelativeClause,
    AdverbialClause,
    ClausalComplement,
    OpenComplement,
    Parataxis,
    Conjunct,
    AdverbialModifier,
    Apposition,
    Reference,
}

impl ClauseRelation {
    pub const ALL: [ClauseRelation; 10] = [
        ClauseRelation::Rel,
        ClauseRelation::RelativeClause,
        ClauseRelation::AdverbialClause,
        ClauseRelation::ClausalComplement,
        ClauseRelation::OpenComplement,
        ClauseRelation::Parataxis,
        ClauseRelation::Conjunct,
        ClauseRelation::AdverbialModifier,
        ClauseRelation::Apposition,
        ClauseRelation::Reference,
    ];

    /// Exact match on the full function label (`acl:relcl`, not `acl`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "rel" => Some(ClauseRelation::Rel),
            "acl:relcl" => Some(ClauseRelation::RelativeClause),
            "advcl" => Some(ClauseRelation::AdverbialClause),
            "ccomp" => Some(ClauseRelation::ClausalComplement),
            "xcomp" => Some(ClauseRelation::OpenComplement),
            "parataxis" => Some(ClauseRelation::Parataxis),
            "conj" => Some(ClauseRelation::Conjunct),
            "advmod" => Some(ClauseRelation::AdverbialModifier),
            "appos" => Some(ClauseRelation::Apposition),
            "ref" => Some(ClauseRelation::Reference),
            _ => None,
        }
    }

    pub const fn flag(self) -> ClauseRelations {
        match self {
            ClauseRelation::Rel => ClauseRelations::REL,
            ClauseRelation::RelativeClause => ClauseRelations::ACL_RELCL,
            ClauseRelation::AdverbialClause => ClauseRelations::ADVCL,
            ClauseRelation::ClausalComplement => ClauseRelations::CCOMP,
            ClauseRelation::OpenComplement => ClauseRelations::XCOMP,
            ClauseRelation::Parataxis => ClauseRelations::PARATAXIS,
            ClauseRelation::Conjunct => ClauseRelations::CONJ,
            ClauseRelation::AdverbialModifier => ClauseRelations::ADVMOD,
            ClauseRelation::Apposition => ClauseRelations::APPOS,
            ClauseRelation::Reference => ClauseRelations::REF,
        }
    }
}

bitflags! {
    /// A set of [`ClauseRelation`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct ClauseRelations: u16 {
        const REL = 1;
        const ACL_RELCL = 1 << 1;
        const ADVCL = 1 << 2;
        const CCOMP = 1 << 3;
        const XCOMP = 1 << 4;
        const PARATAXIS = 1 << 5;
        const CONJ = 1 << 6;
        const ADVMOD = 1 << 7;
        const APPOS = 1 << 8;
        const REF = 1 << 9;
    }
}

impl ClauseRelations {
    /// Whether `label` names a relation in this set.
    pub fn matches(self, label: &str) -> bool {
        ClauseRelation::from_label(label).is_some_and(|relation| self.contains(relation.flag()))
    }
}

impl Default for ClauseRelations {
    fn default() -> Self {
        ClauseRelations::all()
    }
}
