#![no_std] // The model carries no I/O

extern crate alloc;

pub mod grammar;
pub mod ids;
pub mod position;

// Re-export core types for convenience
pub use grammar::*;
pub use ids::{ClusterId, MentionId, SentenceId};
pub use position::{Offset, Position, TokenId, POSITION_SCALE};

pub mod model;
pub use model::*;

pub mod record;
pub use record::{header_row, CompetitorCounts, PairRecord, HEADER};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use rkyv::{from_bytes, to_bytes};

    fn word(id: u32, text: &str, xpos: &str, deprel: &str, head: HeadRef) -> Token {
        Token {
            id: TokenId::Word(Position::from_whole(id)),
            text: text.to_string(),
            upos: "_".to_string(),
            xpos: xpos.to_string(),
            deprel: deprel.to_string(),
            head,
        }
    }

    #[test]
    fn test_position_ordering_with_subparts() {
        let seven: Position = "7".parse().unwrap();
        let seven_one: Position = "7.1".parse().unwrap();
        let seven_two: Position = "7.2".parse().unwrap();
        let eight = Position::from_whole(8);

        assert!(seven < seven_one && seven_one < seven_two && seven_two < eight);
        assert!(seven.is_whole());
        assert!(!seven_one.is_whole());
    }

    #[test]
    fn test_position_rejects_garbage() {
        assert!("".parse::<Position>().is_err());
        assert!("3-4".parse::<Position>().is_err());
        assert!("3.".parse::<Position>().is_err());
        assert!("3.12345".parse::<Position>().is_err());
        assert!("x".parse::<Position>().is_err());
    }

    #[test]
    fn test_offset_rendering() {
        let two = Position::from_whole(2);
        let seven = Position::from_whole(7);
        let eight_one: Position = "8.1".parse().unwrap();
        let half: Position = "2.5".parse().unwrap();

        assert_eq!((seven - two).to_string(), "5");
        assert_eq!((two - seven).to_string(), "-5");
        assert_eq!((eight_one - two).to_string(), "6.1");
        assert_eq!((two - half).to_string(), "-0.5");
        assert_eq!(Offset::ZERO.to_string(), "0");
        assert_eq!(Position::from_decimal(3, "05").unwrap().to_string(), "3.05");
    }

    #[test]
    fn test_token_id_shift_keeps_shape() {
        let range = TokenId::Range {
            first: Position::from_whole(3),
            last: Position::from_whole(4),
        };
        assert_eq!(range.shifted(10).to_string(), "13-14");
        assert!(range.is_placeholder());
        assert_eq!(range.position(), None);
    }

    #[test]
    fn test_clause_relation_lookup_is_exact() {
        assert_eq!(ClauseRelation::from_label("acl:relcl"), Some(ClauseRelation::RelativeClause));
        assert_eq!(ClauseRelation::from_label("acl"), None);
        assert!(ClauseRelations::default().matches("ccomp"));
        assert!(!ClauseRelations::CONJ.matches("advmod"));
        assert!(ClauseRelation::ALL.iter().all(|r| ClauseRelations::all().contains(r.flag())));
    }

    #[test]
    fn test_entity_type_fallback() {
        assert_eq!(EntityType::from_label("person"), EntityType::Person);
        assert_eq!(EntityType::from_label("Person"), EntityType::Other);
        assert_eq!(EntityType::from_label(""), EntityType::Other);
    }

    #[test]
    fn test_document_groups_clusters_by_first_mention() {
        let sentence = Sentence {
            id: SentenceId(0),
            tokens: vec![
                word(1, "Kim", "NNP", "nsubj", HeadRef::Token(Position::from_whole(2))),
                word(2, "saw", "VBD", "root", HeadRef::Root),
                word(3, "it", "PRP", "obj", HeadRef::Token(Position::from_whole(2))),
                word(4, "she", "PRP", "nsubj", HeadRef::Token(Position::from_whole(2))),
            ],
        };
        let mention = |cluster: u32, start: usize| Mention {
            id: MentionId(99),
            cluster: ClusterId(cluster),
            sentence: SentenceId(0),
            start,
            end: start + 1,
            head: Some(start),
            entity_type: EntityType::Person,
        };

        let doc = Document::new(
            "doc".to_string(),
            vec![sentence],
            vec![mention(7, 0), mention(3, 2), mention(7, 3)],
        );

        let order: Vec<ClusterId> = doc.entities().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![ClusterId(7), ClusterId(3)]);

        let ids: Vec<MentionId> = doc.cluster_mentions(ClusterId(7)).map(|m| m.id).collect();
        assert_eq!(ids, vec![MentionId(0), MentionId(2)]);
        assert_eq!(doc.cluster_mentions(ClusterId(42)).count(), 0);

        let she = &doc.mentions()[2];
        assert_eq!(doc.mention_head(she).map(|t| t.text.as_str()), Some("she"));
        assert_eq!(
            doc.mention_bounds(she),
            Some((Position::from_whole(4), Position::from_whole(4)))
        );
        assert_eq!(doc.mention_first_position(she), Some(Position::from_whole(4)));
        assert_eq!(doc.mention_last_position(she), Some(Position::from_whole(4)));
    }

    #[test]
    fn test_record_row_layout() {
        let mut competitors = CompetitorCounts::default();
        competitors.increment(GrammaticalCase::Accusative, Humanness::Human);
        competitors.increment(GrammaticalCase::Other, Humanness::NonHuman);
        competitors.increment(GrammaticalCase::Other, Humanness::NonHuman);

        let record = PairRecord {
            referent: "Kim".to_string(),
            anaphora: "the actress".to_string(),
            case: GrammaticalCase::Nominative,
            humanness: Humanness::Human,
            pronominality: Pronominality::NonPronominal,
            word_distance: Offset::from_words(12),
            clause_distance: 2,
            competitors,
        };

        assert_eq!(
            record.to_row(),
            "Kim\tthe actress\tnom\thuman\tnon-pronominal\t12\t2\t0\t1\t0\t0\t0\t0\t0\t0\t0\t2"
        );
        assert_eq!(header_row().split('\t').count(), record.to_row().split('\t').count());
        assert_eq!(competitors.total(), 3);
    }

    #[test]
    fn test_record_archive_round_trip() {
        let record = PairRecord {
            referent: "the policy".to_string(),
            anaphora: "it".to_string(),
            case: GrammaticalCase::Oblique,
            humanness: Humanness::NonHuman,
            pronominality: Pronominality::Pronominal,
            word_distance: "3.5".parse::<Position>().unwrap() - Position::from_whole(1),
            clause_distance: 0,
            competitors: CompetitorCounts::default(),
        };

        let bytes = to_bytes::<_, 256>(&record).expect("Failed to serialize PairRecord");
        let restored: PairRecord = from_bytes(&bytes).expect("Failed to deserialize PairRecord");

        assert_eq!(record, restored);
    }
}
