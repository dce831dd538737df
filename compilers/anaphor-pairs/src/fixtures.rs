//! Hand-built documents for tests.

use anaphor_protocol::{
    ClusterId, Document, EntityType, HeadRef, Mention, MentionId, Position, Sentence, SentenceId,
    Token, TokenId,
};

#[derive(Default)]
pub struct DocBuilder {
    sentences: Vec<Vec<Token>>,
    words: u32,
    mentions: Vec<Mention>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self {
            sentences: vec![Vec::new()],
            ..Self::default()
        }
    }

    /// Appends the next whole-numbered word to the current sentence.
    pub fn word(mut self, text: &str, xpos: &str, deprel: &str) -> Self {
        self.words += 1;
        let id = TokenId::Word(Position::from_whole(self.words));
        self.current().push(Token {
            id,
            text: text.to_string(),
            upos: "_".to_string(),
            xpos: xpos.to_string(),
            deprel: deprel.to_string(),
            head: HeadRef::Root,
        });
        self
    }

    /// Adds a placeholder covering the next `words` words.
    pub fn range(mut self, text: &str, words: u32) -> Self {
        let first = Position::from_whole(self.words + 1);
        let last = Position::from_whole(self.words + words);
        self.current().push(Token {
            id: TokenId::Range { first, last },
            text: text.to_string(),
            upos: "_".to_string(),
            xpos: "_".to_string(),
            deprel: "_".to_string(),
            head: HeadRef::None,
        });
        self
    }

    pub fn sentence_break(mut self) -> Self {
        self.sentences.push(Vec::new());
        self
    }

    /// Mention over words `first..=last` headed by word `head`.
    pub fn mention(self, cluster: u32, first: u32, last: u32, head: u32, etype: EntityType) -> Self {
        self.push_mention(cluster, first, last, Some(head), etype)
    }

    /// Mention whose head could not be resolved.
    pub fn headless(self, cluster: u32, first: u32, last: u32, etype: EntityType) -> Self {
        self.push_mention(cluster, first, last, None, etype)
    }

    pub fn build(self) -> Document {
        let sentences = self
            .sentences
            .into_iter()
            .enumerate()
            .map(|(i, tokens)| Sentence {
                id: SentenceId(i as u32),
                tokens,
            })
            .collect();
        Document::new("fixture".to_string(), sentences, self.mentions)
    }

    fn current(&mut self) -> &mut Vec<Token> {
        self.sentences.last_mut().expect("builder always has a sentence")
    }

    fn locate(&self, word: u32) -> (usize, usize) {
        let id = TokenId::Word(Position::from_whole(word));
        self.sentences
            .iter()
            .enumerate()
            .find_map(|(s, tokens)| tokens.iter().position(|t| t.id == id).map(|i| (s, i)))
            .unwrap_or_else(|| panic!("no word {word} in fixture"))
    }

    fn push_mention(
        mut self,
        cluster: u32,
        first: u32,
        last: u32,
        head: Option<u32>,
        etype: EntityType,
    ) -> Self {
        let (sentence, mut start) = self.locate(first);
        let (_, end) = self.locate(last);
        // A span starting on a multi-word token includes its placeholder
        if start > 0 {
            if let TokenId::Range { first: covered, .. } = self.sentences[sentence][start - 1].id {
                if covered == Position::from_whole(first) {
                    start -= 1;
                }
            }
        }

        let head = head.map(|h| self.locate(h).1);
        self.mentions.push(Mention {
            id: MentionId(self.mentions.len() as u32),
            cluster: ClusterId(cluster),
            sentence: SentenceId(sentence as u32),
            start,
            end: end + 1,
            head,
            entity_type: etype,
        });
        self
    }
}
