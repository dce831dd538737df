#![cfg_attr(not(test), no_std)] // proptest needs std under test

extern crate alloc;

use anaphor_protocol::{EntityType, GrammaticalCase, Humanness, Pronominality, Token};

/// Coarse tags of personal and possessive pronouns.
pub const PRONOUN_TAGS: [&str; 2] = ["PRP", "PRP$"];

/// Coarse tag of a singular common noun.
pub const COMMON_NOUN_TAG: &str = "NN";

/// Buckets a dependency function into a case category.
///
/// Substring rule, first match wins, so `nsubj:pass` is nominative and
/// `nmod:poss` is genitive. Total: unmapped labels are `Other`.
pub fn classify_case(function: &str) -> GrammaticalCase {
    if function.contains("subj") {
        GrammaticalCase::Nominative
    } else if function.contains("obj") {
        GrammaticalCase::Accusative
    } else if function.contains("obl") {
        GrammaticalCase::Oblique
    } else if function.contains("poss") {
        GrammaticalCase::Genitive
    } else {
        GrammaticalCase::Other
    }
}

pub fn humanness(entity_type: EntityType) -> Humanness {
    match entity_type {
        EntityType::Person => Humanness::Human,
        _ => Humanness::NonHuman,
    }
}

pub fn is_pronoun_tag(xpos: &str) -> bool {
    PRONOUN_TAGS.contains(&xpos)
}

pub fn pronominality(xpos: &str) -> Pronominality {
    if is_pronoun_tag(xpos) {
        Pronominality::Pronominal
    } else {
        Pronominality::NonPronominal
    }
}

/// Shapes of mention that count as an anaphor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferringExpression {
    /// `the` + common noun (`the policy`, `the guy in the hat`).
    DefiniteDescription,
    /// A lone personal or possessive pronoun.
    Pronoun,
}

/// Classifies a mention by its words (placeholders already removed).
pub fn referring_expression(words: &[&Token]) -> Option<ReferringExpression> {
    match words {
        [only] if is_pronoun_tag(&only.xpos) => Some(ReferringExpression::Pronoun),
        [first, second, ..]
            if first.text.to_lowercase() == "the" && second.xpos == COMMON_NOUN_TAG =>
        {
            Some(ReferringExpression::DefiniteDescription)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use anaphor_protocol::{HeadRef, Position, TokenId};
    use proptest::prelude::*;

    fn t(id: u32, text: &str, xpos: &str) -> Token {
        Token {
            id: TokenId::Word(Position::from_whole(id)),
            text: text.to_string(),
            upos: "_".to_string(),
            xpos: xpos.to_string(),
            deprel: "dep".to_string(),
            head: HeadRef::Root,
        }
    }

    #[test]
    fn test_case_buckets() {
        assert_eq!(classify_case("nsubj"), GrammaticalCase::Nominative);
        assert_eq!(classify_case("nsubj:pass"), GrammaticalCase::Nominative);
        assert_eq!(classify_case("csubj"), GrammaticalCase::Nominative);
        assert_eq!(classify_case("obj"), GrammaticalCase::Accusative);
        assert_eq!(classify_case("iobj"), GrammaticalCase::Accusative);
        assert_eq!(classify_case("obl:tmod"), GrammaticalCase::Oblique);
        assert_eq!(classify_case("nmod:poss"), GrammaticalCase::Genitive);
        assert_eq!(classify_case("root"), GrammaticalCase::Other);
        assert_eq!(classify_case(""), GrammaticalCase::Other);
    }

    #[test]
    fn test_humanness_and_pronominality() {
        assert_eq!(humanness(EntityType::Person), Humanness::Human);
        assert_eq!(humanness(EntityType::Animal), Humanness::NonHuman);
        assert_eq!(humanness(EntityType::Other), Humanness::NonHuman);
        assert_eq!(pronominality("PRP$"), Pronominality::Pronominal);
        assert_eq!(pronominality("NN"), Pronominality::NonPronominal);
    }

    #[test]
    fn test_referring_expressions() {
        let the = t(1, "The", "DT");
        let guy = t(2, "guy", "NN");
        let guys = t(2, "guys", "NNS");
        let she = t(3, "she", "PRP");
        let her = t(4, "her", "PRP$");
        let kim = t(5, "Kim", "NNP");

        assert_eq!(
            referring_expression(&[&the, &guy]),
            Some(ReferringExpression::DefiniteDescription)
        );
        assert_eq!(referring_expression(&[&she]), Some(ReferringExpression::Pronoun));
        assert_eq!(referring_expression(&[&her]), Some(ReferringExpression::Pronoun));
        // Plural noun tag does not count
        assert_eq!(referring_expression(&[&the, &guys]), None);
        assert_eq!(referring_expression(&[&kim]), None);
        assert_eq!(referring_expression(&[&she, &kim]), None);
        assert_eq!(referring_expression(&[&the]), None);
        assert_eq!(referring_expression(&[]), None);
    }

    proptest! {
        #[test]
        fn test_classify_case_is_total(label in "[a-z:]{0,12}") {
            let case = classify_case(&label);
            if label.contains("subj") {
                prop_assert_eq!(case, GrammaticalCase::Nominative);
            }
            if !["subj", "obj", "obl", "poss"].iter().any(|k| label.contains(k)) {
                prop_assert_eq!(case, GrammaticalCase::Other);
            }
        }
    }
}
