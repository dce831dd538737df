pub mod entity;
pub mod error;
pub mod head;
pub mod parser;

use std::collections::HashMap;

use anaphor_protocol::{
    ClusterId, Document, EntityType, Mention, MentionId, Sentence, SentenceId, Token,
};

use crate::entity::{
    cluster_key, entity_value, parse_brackets, Bracket, EntityLayout, LAYOUT_COMMENT,
};
pub use crate::error::ConlluError;
use crate::head::resolve_head;
use crate::parser::{parse_head, parse_token_id};

/// Settings for [`Reader`].
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Attribute order of `Entity=` values, overriding any
    /// `# global.Entity` comment in the document.
    pub entity_layout: Option<String>,
}

/// Builds [`Document`]s from CoNLL-U text with coreference brackets.
#[derive(Debug, Clone, Default)]
pub struct Reader {
    options: ReaderOptions,
}

impl Reader {
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Primary entry point: CoNLL-U text -> Document.
    ///
    /// Sentence-local ids are shifted by the number of whole-numbered words
    /// of all preceding sentences, so positions compare across sentences.
    pub fn read(&self, name: &str, input: &str) -> Result<Document, ConlluError> {
        let mut state = ReadState::new(
            self.options
                .entity_layout
                .as_deref()
                .map(EntityLayout::parse)
                .unwrap_or_default(),
        );
        let layout_fixed = self.options.entity_layout.is_some();
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);

        for (index, raw) in input.lines().enumerate() {
            let line = index + 1;
            let text = raw.trim_end_matches('\r');

            if text.trim().is_empty() {
                state.finish_sentence(line)?;
            } else if let Some(comment) = text.strip_prefix('#') {
                if !layout_fixed {
                    state.read_comment(comment);
                }
            } else {
                state.read_token(line, text)?;
            }
        }
        state.finish_sentence(input.lines().count() + 1)?;

        if state.sentences.is_empty() {
            return Err(ConlluError::Empty);
        }

        let mentions: Vec<Mention> = state
            .mentions
            .into_iter()
            .enumerate()
            .map(|(i, m)| Mention {
                id: MentionId(i as u32),
                cluster: m.cluster,
                sentence: m.sentence,
                start: m.start,
                end: m.end.unwrap_or(m.start + 1),
                head: m.head,
                entity_type: m.entity_type,
            })
            .collect();

        log::debug!(
            "{name}: {} sentences, {} mentions, {} clusters",
            state.sentences.len(),
            mentions.len(),
            state.clusters.len()
        );

        Ok(Document::new(name.to_string(), state.sentences, mentions))
    }
}

/// Reads one document with default options.
pub fn read_document(name: &str, input: &str) -> Result<Document, ConlluError> {
    Reader::default().read(name, input)
}

#[derive(Debug)]
struct PendingMention {
    cluster: ClusterId,
    sentence: SentenceId,
    start: usize,
    end: Option<usize>,
    head: Option<usize>,
    entity_type: EntityType,
}

struct OpenMention {
    eid: String,
    slot: usize,
}

struct ReadState {
    layout: EntityLayout,
    sentences: Vec<Sentence>,
    tokens: Vec<Token>,
    /// Whole-numbered words in all finished sentences.
    word_offset: u32,
    sentence_words: u32,
    mentions: Vec<PendingMention>,
    /// First pending mention belonging to the current sentence.
    sentence_mentions: usize,
    open: Vec<OpenMention>,
    clusters: HashMap<String, ClusterId>,
}

impl ReadState {
    fn new(layout: EntityLayout) -> Self {
        Self {
            layout,
            sentences: Vec::new(),
            tokens: Vec::new(),
            word_offset: 0,
            sentence_words: 0,
            mentions: Vec::new(),
            sentence_mentions: 0,
            open: Vec::new(),
            clusters: HashMap::new(),
        }
    }

    fn read_comment(&mut self, comment: &str) {
        if let Some((key, value)) = comment.split_once('=') {
            if key.trim() == LAYOUT_COMMENT {
                self.layout = EntityLayout::parse(value);
            }
        }
    }

    fn read_token(&mut self, line: usize, text: &str) -> Result<(), ConlluError> {
        let columns: Vec<&str> = text.split('\t').collect();
        if columns.len() != 10 {
            return Err(ConlluError::ColumnCount {
                line,
                found: columns.len(),
            });
        }

        let local = parse_token_id(columns[0]).ok_or_else(|| ConlluError::InvalidId {
            line,
            id: columns[0].to_string(),
        })?;
        let head = parse_head(columns[6], self.word_offset).ok_or_else(|| ConlluError::InvalidHead {
            line,
            head: columns[6].to_string(),
        })?;

        if local.position().is_some_and(|p| p.is_whole()) {
            self.sentence_words += 1;
        }

        let index = self.tokens.len();
        self.tokens.push(Token {
            id: local.shifted(self.word_offset),
            text: columns[1].to_string(),
            upos: columns[3].to_string(),
            xpos: columns[4].to_string(),
            deprel: columns[7].to_string(),
            head,
        });

        if let Some(value) = entity_value(columns[9]) {
            self.read_brackets(line, index, value)?;
        }

        Ok(())
    }

    fn read_brackets(&mut self, line: usize, index: usize, value: &str) -> Result<(), ConlluError> {
        let brackets = parse_brackets(value).ok_or_else(|| ConlluError::InvalidEntity {
            line,
            value: value.to_string(),
        })?;

        for bracket in brackets {
            match bracket {
                Bracket::Open { attrs, closes } => {
                    let eid = attrs.get(self.layout.id).copied().unwrap_or_default();
                    let eid = cluster_key(eid);
                    let next = ClusterId(self.clusters.len() as u32);
                    let cluster = *self.clusters.entry(eid.to_string()).or_insert(next);

                    let slot = self.mentions.len();
                    self.mentions.push(PendingMention {
                        cluster,
                        sentence: SentenceId(self.sentences.len() as u32),
                        start: index,
                        end: closes.then_some(index + 1),
                        head: None,
                        entity_type: self.layout.entity_type(&attrs),
                    });
                    if !closes {
                        self.open.push(OpenMention {
                            eid: eid.to_string(),
                            slot,
                        });
                    }
                }
                Bracket::Close { eid } => {
                    let key = cluster_key(eid);
                    let at = self
                        .open
                        .iter()
                        .rposition(|m| m.eid == key)
                        .ok_or_else(|| ConlluError::UnmatchedClose {
                            line,
                            eid: eid.to_string(),
                        })?;
                    let open = self.open.remove(at);
                    self.mentions[open.slot].end = Some(index + 1);
                }
            }
        }

        Ok(())
    }

    fn finish_sentence(&mut self, line: usize) -> Result<(), ConlluError> {
        if self.tokens.is_empty() {
            return Ok(());
        }
        if let Some(open) = self.open.first() {
            return Err(ConlluError::UnclosedMention {
                line,
                eid: open.eid.clone(),
            });
        }

        let tokens = std::mem::take(&mut self.tokens);
        let sentence = SentenceId(self.sentences.len() as u32);

        for pending in &mut self.mentions[self.sentence_mentions..] {
            let end = pending.end.unwrap_or(pending.start + 1);
            pending.head = resolve_head(&tokens, pending.start, end);
            if pending.head.is_none() {
                log::debug!(
                    "sentence {}: mention at token {} has no resolvable head",
                    sentence.0,
                    tokens[pending.start].id
                );
            }
        }

        self.sentences.push(Sentence { id: sentence, tokens });
        self.sentence_mentions = self.mentions.len();
        self.word_offset += self.sentence_words;
        self.sentence_words = 0;

        Ok(())
    }
}
