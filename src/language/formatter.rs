use super::pos::{Category, PartOfSpeech};
use super::token::Token;

/// Character used to draw a hidden word
pub const BLANK_CHAR: char = '_';

/// Closing punctuation that attaches to the preceding word when joined
const ATTACHED_PUNCTUATION: [&str; 7] = [",", ".", ";", ":", "!", "?", ")"];

/// Display string for a single token: its text, or a run of blank characters
/// as long as the hidden word
pub fn display(token: &Token) -> String {
    if token.visible {
        token.text().to_string()
    } else {
        blank_for(token.text())
    }
}

pub fn blank_for(text: &str) -> String {
    std::iter::repeat(BLANK_CHAR)
        .take(text.chars().count())
        .collect()
}

/// Lazily render every token. Clone the iterator to walk it again, or call
/// `render` after a reveal to pick up the new visibility.
pub fn render(tokens: &[Token]) -> impl Iterator<Item = String> + Clone + '_ {
    tokens.iter().map(display)
}

/// Hint shown for a blank: the coarse category of its tag
pub fn hint(tag: PartOfSpeech) -> Option<Category> {
    tag.category()
}

pub fn first_blank(tokens: &[Token]) -> Option<usize> {
    tokens.iter().position(Token::is_blank)
}

pub fn blank_positions(tokens: &[Token]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_blank())
        .map(|(i, _)| i)
        .collect()
}

/// Join display parts into a line, attaching closing punctuation to the word
/// before it. `parts` lines up with `tokens`.
pub fn join_display<S: AsRef<str>>(tokens: &[Token], parts: &[S]) -> String {
    let mut line = String::new();
    for (i, (token, part)) in tokens.iter().zip(parts).enumerate() {
        if i > 0 && !attaches_left(token) {
            line.push(' ');
        }
        line.push_str(part.as_ref());
    }
    line
}

fn attaches_left(token: &Token) -> bool {
    token.tag() == PartOfSpeech::Punct && ATTACHED_PUNCTUATION.contains(&token.text())
}
