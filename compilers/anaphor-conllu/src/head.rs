use anaphor_protocol::{HeadRef, Token, TokenId};

/// Finds the syntactic head of `tokens[start..end]`: the first word whose
/// own head is the root or lies outside the span.
///
/// Returns `None` when any word of the span points at a token that does not
/// exist in the sentence, or when no word qualifies.
pub fn resolve_head(tokens: &[Token], start: usize, end: usize) -> Option<usize> {
    let span = tokens.get(start..end)?;
    let mut head = None;

    for (offset, token) in span.iter().enumerate() {
        if token.is_placeholder() {
            continue;
        }

        let leaves_span = match token.head {
            HeadRef::Root => true,
            HeadRef::Token(position) => {
                let target = tokens
                    .iter()
                    .position(|t| t.id == TokenId::Word(position))?;
                !(start..end).contains(&target)
            }
            // Empty nodes carry no basic head; they cannot head a span
            HeadRef::None => false,
        };

        if leaves_span && head.is_none() {
            head = Some(start + offset);
        }
    }

    head
}
