use serde::Serialize;
use std::fmt;

/// One of the eight three-line figures. Bit `i` of [`Trigram::bits`] is line
/// `i` counted from the bottom, 1 for yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigram {
    Qian,
    Zhen,
    Kan,
    Gen,
    Kun,
    Xun,
    Li,
    Dui,
}

impl Trigram {
    /// Row and column order of the King Wen lookup table.
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Zhen,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
        Trigram::Xun,
        Trigram::Li,
        Trigram::Dui,
    ];

    pub fn bits(self) -> u8 {
        match self {
            Trigram::Qian => 0b111,
            Trigram::Zhen => 0b001,
            Trigram::Kan => 0b010,
            Trigram::Gen => 0b100,
            Trigram::Kun => 0b000,
            Trigram::Xun => 0b110,
            Trigram::Li => 0b101,
            Trigram::Dui => 0b011,
        }
    }

    /// Only the low three bits are read.
    pub fn from_bits(bits: u8) -> Trigram {
        match bits & 0b111 {
            0b111 => Trigram::Qian,
            0b001 => Trigram::Zhen,
            0b010 => Trigram::Kan,
            0b100 => Trigram::Gen,
            0b000 => Trigram::Kun,
            0b110 => Trigram::Xun,
            0b101 => Trigram::Li,
            _ => Trigram::Dui,
        }
    }

    /// Position in [`Trigram::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Trigram::Qian => '☰',
            Trigram::Dui => '☱',
            Trigram::Li => '☲',
            Trigram::Zhen => '☳',
            Trigram::Xun => '☴',
            Trigram::Kan => '☵',
            Trigram::Gen => '☶',
            Trigram::Kun => '☷',
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            Trigram::Qian => "Heaven",
            Trigram::Zhen => "Thunder",
            Trigram::Kan => "Water",
            Trigram::Gen => "Mountain",
            Trigram::Kun => "Earth",
            Trigram::Xun => "Wind",
            Trigram::Li => "Fire",
            Trigram::Dui => "Lake",
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip_and_distinct() {
        let mut seen = [false; 8];
        for t in Trigram::ALL {
            assert_eq!(Trigram::from_bits(t.bits()), t);
            assert!(!seen[t.bits() as usize]);
            seen[t.bits() as usize] = true;
        }
        assert_eq!(Trigram::ALL[Trigram::Li.index()], Trigram::Li);
    }
}
