use crossterm::style::{style, Color, StyledContent, Stylize};
use itertools::Itertools;
use std::fmt::Display;
use std::io::{self, Write};

use crate::language::formatter::{join_display, render};
use crate::language::{Category, Token};

const PROMPT_COLOR: Color = Color::Rgb {
    r: 0x2a,
    g: 0xa1,
    b: 0x98,
};
const BLANK_COLOR: Color = Color::Rgb {
    r: 0xff,
    g: 0x00,
    b: 0x66,
};
const GUESS_COLOR: Color = Color::Rgb {
    r: 0x44,
    g: 0xff,
    b: 0x00,
};

/// Styles used across the game screen
pub struct Palette;

impl Palette {
    pub fn prompt<D: Display>(content: D) -> StyledContent<D> {
        style(content).with(PROMPT_COLOR)
    }

    pub fn hint<D: Display>(content: D) -> StyledContent<D> {
        style(content).with(Color::Grey)
    }

    pub fn blank<D: Display>(content: D) -> StyledContent<D> {
        style(content).with(BLANK_COLOR)
    }

    pub fn guess<D: Display>(content: D) -> StyledContent<D> {
        style(content).with(GUESS_COLOR).italic()
    }

    pub fn actual<D: Display>(content: D) -> StyledContent<D> {
        style(content).with(BLANK_COLOR)
    }
}

/// What is shown in place of one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Blank(String),
    Guess(String),
    Answer(String),
}

impl Segment {
    fn from_display(token: &Token, shown: String) -> Self {
        if token.visible {
            Segment::Text(shown)
        } else {
            Segment::Blank(shown)
        }
    }

    fn styled(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Blank(text) => Palette::blank(text).to_string(),
            Segment::Guess(text) => Palette::guess(text).to_string(),
            Segment::Answer(text) => Palette::actual(text).to_string(),
        }
    }
}

pub fn segments(tokens: &[Token]) -> Vec<Segment> {
    tokens
        .iter()
        .zip(render(tokens))
        .map(|(token, shown)| Segment::from_display(token, shown))
        .collect()
}

/// Write the first `upto` segments as one line
pub fn print_sentence<W: Write>(
    out: &mut W,
    tokens: &[Token],
    segments: &[Segment],
    upto: usize,
) -> io::Result<()> {
    let upto = upto.min(tokens.len()).min(segments.len());
    let parts: Vec<String> = segments[..upto].iter().map(Segment::styled).collect();
    writeln!(out, "{}", join_display(&tokens[..upto], &parts))
}

pub fn print_banner<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", Palette::prompt(format!(" {text} ")))
}

pub fn print_hint<W: Write>(out: &mut W, category: Category) -> io::Result<()> {
    writeln!(out, "{}", Palette::hint(format!(" Hint: {category}")))
}

pub fn print_results<W: Write>(
    out: &mut W,
    tokens: &[Token],
    guessed: &[Segment],
    actual: &[Segment],
    score: f64,
) -> io::Result<()> {
    writeln!(out)?;
    print_banner(out, "You said:")?;
    print_sentence(out, tokens, guessed, guessed.len())?;
    writeln!(out)?;
    print_banner(out, "Actual sentence:")?;
    print_sentence(out, tokens, actual, actual.len())?;
    writeln!(out)?;
    print_banner(out, &format!("Score: {score:.2}"))
}

pub fn print_summary<W: Write>(out: &mut W, scores: &[f64], mean: f64) -> io::Result<()> {
    writeln!(out)?;
    print_banner(out, &format!("Rounds played: {}", scores.len()))?;
    writeln!(
        out,
        " {}",
        scores.iter().map(|score| format!("{score:.2}")).join("  ")
    )?;
    print_banner(out, &format!("Average score: {mean:.2}"))
}
