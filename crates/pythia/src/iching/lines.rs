use serde::Serialize;
use std::fmt;

/// Face of a single coin, valued 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Tails = 2,
    Heads = 3,
}

impl Coin {
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// A cast line. Old lines (6 and 9) are changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Line {
    OldYin = 6,
    YoungYang = 7,
    YoungYin = 8,
    OldYang = 9,
}

impl Line {
    /// Line from the sum of three coins.
    pub fn from_coins(coins: [Coin; 3]) -> Line {
        match coins.iter().map(|c| c.value()).sum::<u8>() {
            6 => Line::OldYin,
            7 => Line::YoungYang,
            8 => Line::YoungYin,
            _ => Line::OldYang,
        }
    }

    pub fn from_value(value: u8) -> Option<Line> {
        match value {
            6 => Some(Line::OldYin),
            7 => Some(Line::YoungYang),
            8 => Some(Line::YoungYin),
            9 => Some(Line::OldYang),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn is_changing(self) -> bool {
        matches!(self, Line::OldYin | Line::OldYang)
    }

    /// 1 for yang, 0 for yin
    pub fn bit(self) -> u8 {
        match self {
            Line::YoungYang | Line::OldYang => 1,
            Line::OldYin | Line::YoungYin => 0,
        }
    }

    /// Old lines flip to the young line of opposite polarity; young lines
    /// stay as they are.
    pub fn transformed(self) -> Line {
        match self {
            Line::OldYin => Line::YoungYang,
            Line::OldYang => Line::YoungYin,
            young => young,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Line::OldYin => "⚋ × (old yin, changing)",
            Line::YoungYang => "⚊ (young yang)",
            Line::YoungYin => "⚋ (young yin)",
            Line::OldYang => "⚊ ○ (old yang, changing)",
        }
    }
}

impl From<Line> for u8 {
    fn from(line: Line) -> u8 {
        line.value()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Six-bit pattern of `lines`, bottom line in the lowest bit.
pub fn line_pattern(lines: &[Line; 6]) -> u8 {
    lines
        .iter()
        .enumerate()
        .fold(0, |acc, (i, line)| acc | (line.bit() << i))
}

/// Indices (0 = bottom) of the changing lines.
pub fn changing_indices(lines: &[Line; 6]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_changing())
        .map(|(i, _)| i)
        .collect()
}

pub fn transform(lines: &[Line; 6]) -> [Line; 6] {
    (*lines).map(Line::transformed)
}
