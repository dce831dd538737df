use anaphor_protocol::{HeadRef, Position, TokenId};
use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt},
    error::{Error, ErrorKind},
    sequence::{preceded, separated_pair},
    IResult,
};

fn whole(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

/// `7` or `7.1`
fn position(input: &str) -> IResult<&str, Position> {
    let (rest, whole_part) = whole(input)?;
    let (rest, fraction) = opt(preceded(char('.'), digit1))(rest)?;

    match fraction {
        None => Ok((rest, Position::from_whole(whole_part))),
        Some(digits) => Position::from_decimal(whole_part, digits)
            .map(|p| (rest, p))
            .ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::Verify))),
    }
}

/// ID column: `7`, `7.1` or the `3-4` range placeholder.
pub fn token_id(input: &str) -> IResult<&str, TokenId> {
    alt((
        map(separated_pair(whole, char('-'), whole), |(first, last)| TokenId::Range {
            first: Position::from_whole(first),
            last: Position::from_whole(last),
        }),
        map(position, TokenId::Word),
    ))(input)
}

/// Parses a whole ID column; trailing garbage is rejected.
pub fn parse_token_id(column: &str) -> Option<TokenId> {
    all_consuming(token_id)(column).ok().map(|(_, id)| id)
}

/// Parses a HEAD column, shifting token heads by `offset` words so they
/// line up with document-global ids.
pub fn parse_head(column: &str, offset: u32) -> Option<HeadRef> {
    if column == "_" {
        return Some(HeadRef::None);
    }

    let (_, head) = all_consuming(whole)(column).ok()?;
    Some(match head {
        0 => HeadRef::Root,
        n => HeadRef::Token(Position::from_whole(n).shifted(offset)),
    })
}
