use alloc::string::String;
use alloc::vec::Vec;

use crate::grammar::EntityType;
use crate::ids::{ClusterId, MentionId, SentenceId};
use crate::position::{Position, TokenId};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Syntactic head of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum HeadRef {
    Root,
    Token(Position),
    /// No head annotated (placeholders, empty nodes).
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Token {
    pub id: TokenId,
    pub text: String,
    pub upos: String,
    /// Coarse language-specific tag (`NN`, `PRP`, `PRP$`...).
    pub xpos: String,
    pub deprel: String,
    pub head: HeadRef,
}

impl Token {
    pub fn is_placeholder(&self) -> bool {
        self.id.is_placeholder()
    }

    pub fn position(&self) -> Option<Position> {
        self.id.position()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Sentence {
    pub id: SentenceId,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Real words, placeholders skipped.
    pub fn words(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|t| !t.is_placeholder())
    }

    /// The clause-initial boundary marker of the sentence.
    pub fn first_word(&self) -> Option<&Token> {
        self.words().next()
    }
}

/// A contiguous span of one sentence belonging to one cluster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Mention {
    pub id: MentionId,
    pub cluster: ClusterId,
    pub sentence: SentenceId,
    /// First token index in `sentence.tokens`.
    pub start: usize,
    /// One past the last token index.
    pub end: usize,
    /// Index of the head token in `sentence.tokens`, if it could be resolved.
    pub head: Option<usize>,
    pub entity_type: EntityType,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Entity {
    pub id: ClusterId,
    /// Mentions in document order.
    pub mentions: Vec<MentionId>,
}

/// One parsed, coreference-annotated document. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Document {
    name: String,
    sentences: Vec<Sentence>,
    mentions: Vec<Mention>,
    entities: Vec<Entity>,
}

impl Document {
    /// `mentions` must be in document order; their ids are reassigned to
    /// match their index. Clusters are ordered by first mention.
    pub fn new(name: String, sentences: Vec<Sentence>, mut mentions: Vec<Mention>) -> Self {
        let mut entities: Vec<Entity> = Vec::new();

        for (index, mention) in mentions.iter_mut().enumerate() {
            mention.id = MentionId(index as u32);

            match entities.iter_mut().find(|e| e.id == mention.cluster) {
                Some(entity) => entity.mentions.push(mention.id),
                None => entities.push(Entity {
                    id: mention.cluster,
                    mentions: alloc::vec![mention.id],
                }),
            }
        }

        Self {
            name,
            sentences,
            mentions,
            entities,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Every mention of every cluster, in document order.
    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn mention(&self, id: MentionId) -> Option<&Mention> {
        self.mentions.get(id.index())
    }

    /// Mentions of one cluster in document order.
    pub fn cluster_mentions(&self, cluster: ClusterId) -> impl Iterator<Item = &Mention> + '_ {
        self.entities
            .iter()
            .find(|e| e.id == cluster)
            .into_iter()
            .flat_map(|e| e.mentions.iter())
            .filter_map(|id| self.mention(*id))
    }

    pub fn mention_tokens(&self, mention: &Mention) -> Option<&[Token]> {
        self.sentences
            .get(mention.sentence.index())?
            .tokens
            .get(mention.start..mention.end)
    }

    /// The span without placeholder tokens.
    pub fn mention_words(&self, mention: &Mention) -> Vec<&Token> {
        self.mention_tokens(mention)
            .map(|tokens| tokens.iter().filter(|t| !t.is_placeholder()).collect())
            .unwrap_or_default()
    }

    /// The resolved head word; `None` when unresolved or pointing at a placeholder.
    pub fn mention_head(&self, mention: &Mention) -> Option<&Token> {
        let sentence = self.sentences.get(mention.sentence.index())?;
        let head = sentence.tokens.get(mention.head?)?;
        (!head.is_placeholder()).then_some(head)
    }

    /// Positions of the first and last word of the span.
    pub fn mention_bounds(&self, mention: &Mention) -> Option<(Position, Position)> {
        let tokens = self.mention_tokens(mention)?;
        let first = tokens.iter().find_map(Token::position)?;
        let last = tokens.iter().rev().find_map(Token::position)?;
        Some((first, last))
    }

    pub fn mention_first_position(&self, mention: &Mention) -> Option<Position> {
        self.mention_bounds(mention).map(|(first, _)| first)
    }

    pub fn mention_last_position(&self, mention: &Mention) -> Option<Position> {
        self.mention_bounds(mention).map(|(_, last)| last)
    }
}
