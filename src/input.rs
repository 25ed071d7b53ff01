//! Reading and writing the two-deck text format.
//!
//! ```text
//! Player 1:
//! 9
//! 2
//!
//! Player 2:
//! 5
//! 8
//! ```
//!
//! Each section starts with a `Player N:` header followed by one card per
//! line, top of the deck first. Sections are separated by one or more blank
//! lines.

use crate::core::{Card, Deck, PlayerId, PlayerMap, PLAYER_COUNT};
use crate::error::{ParseError, ParseResult};

/// A section of the input: its header and card lines, with 1-based line
/// numbers kept for error messages.
struct Section<'a> {
    header: (usize, &'a str),
    cards: Vec<(usize, &'a str)>,
}

/// Parse both players' decks.
pub fn parse_decks(input: &str) -> ParseResult<PlayerMap<Deck>> {
    let sections = split_sections(input);
    if sections.len() != PLAYER_COUNT {
        return Err(ParseError::PlayerCount {
            found: sections.len(),
        });
    }

    let mut decks = PlayerMap::<Deck>::default();
    for (player, section) in PlayerId::all().zip(&sections) {
        decks[player] = parse_section(player, section)?;
    }
    Ok(decks)
}

fn split_sections(input: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut current: Option<Section<'_>> = None;

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        let number = index + 1;

        if line.is_empty() {
            sections.extend(current.take());
        } else if let Some(section) = current.as_mut() {
            section.cards.push((number, line));
        } else {
            current = Some(Section {
                header: (number, line),
                cards: Vec::new(),
            });
        }
    }
    sections.extend(current);
    sections
}

fn parse_section(player: PlayerId, section: &Section<'_>) -> ParseResult<Deck> {
    let (line, header) = section.header;
    let number = parse_header(header).ok_or_else(|| ParseError::MissingHeader {
        line,
        found: header.to_string(),
    })?;
    if number != player.number() {
        return Err(ParseError::UnexpectedPlayer {
            line,
            expected: player.number(),
            found: header.to_string(),
        });
    }

    if section.cards.is_empty() {
        return Err(ParseError::EmptyDeck {
            player: player.number(),
        });
    }

    section
        .cards
        .iter()
        .map(|&(line, text)| parse_card(line, text))
        .collect()
}

/// `"Player 2:"` -> `Some(2)`.
fn parse_header(header: &str) -> Option<u32> {
    header
        .strip_prefix("Player")?
        .strip_suffix(':')?
        .trim()
        .parse()
        .ok()
}

fn parse_card(line: usize, text: &str) -> ParseResult<Card> {
    let value: u32 = text.parse().map_err(|_| ParseError::InvalidCard {
        line,
        found: text.to_string(),
    })?;
    if value == 0 {
        return Err(ParseError::ZeroCard { line });
    }
    Ok(Card::new(value))
}

/// Render decks in the input format.
#[must_use]
pub fn format_decks(decks: &PlayerMap<Deck>) -> String {
    let sections: Vec<String> = decks
        .iter()
        .map(|(player, deck)| {
            let mut section = format!("{}:\n", player);
            for card in deck.iter() {
                section.push_str(&format!("{}\n", card));
            }
            section
        })
        .collect();
    sections.join("\n")
}
