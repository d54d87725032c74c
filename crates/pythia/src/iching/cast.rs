//! Three-coin casting of a hexagram and its changed counterpart.

use crate::error::OracleError;
use crate::iching::lines::{changing_indices, line_pattern, transform, Coin, Line};
use crate::iching::table::{ensure_complete, king_wen_number, record};
use crate::iching::trigram::Trigram;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source of coin tosses. Implementations are owned by one caller at a time.
pub trait CoinSource {
    fn toss(&mut self) -> Coin;
}

impl<C: CoinSource + ?Sized> CoinSource for &mut C {
    fn toss(&mut self) -> Coin {
        (**self).toss()
    }
}

/// Fair coins backed by any random number generator.
pub struct RngCoins<R> {
    rng: R,
}

impl<R: RngCore> RngCoins<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngCoins<ChaCha8Rng> {
    /// Reproducible tosses for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: RngCore> CoinSource for RngCoins<R> {
    fn toss(&mut self) -> Coin {
        if self.rng.gen::<bool>() {
            Coin::Heads
        } else {
            Coin::Tails
        }
    }
}

/// How a six-bit line pattern maps onto hexagram numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Numbering {
    /// Classical sequence, looked up by upper and lower trigram
    #[default]
    KingWen,
    /// `pattern % 64 + 1`, the plain binary count
    Binary,
}

/// Upper and lower trigram of a six-bit line pattern (bit 0 = bottom line).
pub fn trigrams_of_pattern(pattern: u8) -> (Trigram, Trigram) {
    (Trigram::from_bits(pattern >> 3), Trigram::from_bits(pattern))
}

impl Numbering {
    pub fn number_for(self, pattern: u8) -> u8 {
        match self {
            Numbering::KingWen => {
                let (upper, lower) = trigrams_of_pattern(pattern);
                king_wen_number(upper, lower)
            }
            Numbering::Binary => pattern % 64 + 1,
        }
    }
}

impl FromStr for Numbering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "king_wen" | "kingwen" => Ok(Numbering::KingWen),
            "binary" => Ok(Numbering::Binary),
            other => Err(format!(
                "unknown hexagram numbering '{}', expected king_wen or binary",
                other
            )),
        }
    }
}

/// A resolved hexagram together with the lines that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hexagram {
    pub number: u8,
    pub chinese: &'static str,
    pub pinyin: &'static str,
    pub russian: &'static str,
    pub english: &'static str,
    pub upper: Trigram,
    pub lower: Trigram,
    /// Bottom to top
    pub lines: [Line; 6],
    pub changing: Vec<usize>,
    pub judgment: &'static str,
    pub image: &'static str,
    pub interpretation: &'static str,
}

impl Hexagram {
    pub fn from_lines(lines: [Line; 6], numbering: Numbering) -> Result<Self, OracleError> {
        let pattern = line_pattern(&lines);
        let number = numbering.number_for(pattern);
        let text = record(number)?;
        let (upper, lower) = trigrams_of_pattern(pattern);
        Ok(Hexagram {
            number,
            chinese: text.chinese,
            pinyin: text.pinyin,
            russian: text.russian,
            english: text.english,
            upper,
            lower,
            changing: changing_indices(&lines),
            lines,
            judgment: text.judgment,
            image: text.image,
            interpretation: text.interpretation,
        })
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hexagram #{}", self.number)?;
        writeln!(f, "{} ({}) {} / {}", self.chinese, self.pinyin, self.english, self.russian)?;
        writeln!(f, "Upper: {}", self.upper)?;
        writeln!(f, "Lower: {}", self.lower)?;
        writeln!(f, "Lines:")?;
        for (i, line) in self.lines.iter().enumerate().rev() {
            writeln!(f, "{}. {}", i + 1, line)?;
        }
        writeln!(f, "Judgment: {}", self.judgment)?;
        writeln!(f, "Image: {}", self.image)?;
        write!(f, "Interpretation: {}", self.interpretation)?;
        if !self.changing.is_empty() {
            let positions: Vec<String> = self.changing.iter().map(|i| (i + 1).to_string()).collect();
            write!(f, "\nChanging lines: {}", positions.join(", "))?;
        }
        Ok(())
    }
}

/// Outcome of one casting: the primary hexagram and, when any line is
/// changing, the hexagram it turns into.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Casting {
    pub primary: Hexagram,
    pub secondary: Option<Hexagram>,
}

impl fmt::Display for Casting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if let Some(secondary) = &self.secondary {
            write!(f, "\n\nBecomes:\n{}", secondary)?;
        }
        Ok(())
    }
}

/// Six lines, bottom first, three tosses each.
pub fn cast_lines<C: CoinSource + ?Sized>(coins: &mut C) -> [Line; 6] {
    std::array::from_fn(|_| Line::from_coins([coins.toss(), coins.toss(), coins.toss()]))
}

/// Resolve a casting from already cast lines.
pub fn resolve(lines: [Line; 6], numbering: Numbering) -> Result<Casting, OracleError> {
    ensure_complete()?;
    let primary = Hexagram::from_lines(lines, numbering)?;
    let secondary = if primary.changing.is_empty() {
        None
    } else {
        Some(Hexagram::from_lines(transform(&lines), numbering)?)
    };
    Ok(Casting { primary, secondary })
}

pub fn cast<C: CoinSource + ?Sized>(
    coins: &mut C,
    numbering: Numbering,
) -> Result<Casting, OracleError> {
    let casting = resolve(cast_lines(coins), numbering)?;
    log::debug!(
        "Cast hexagram {} -> {:?} ({:?})",
        casting.primary.number,
        casting.secondary.as_ref().map(|h| h.number),
        numbering
    );
    Ok(casting)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeats a fixed toss sequence.
    struct FixedCoins {
        faces: Vec<Coin>,
        next: usize,
    }

    impl FixedCoins {
        fn new(faces: &[Coin]) -> Self {
            Self {
                faces: faces.to_vec(),
                next: 0,
            }
        }
    }

    impl CoinSource for FixedCoins {
        fn toss(&mut self) -> Coin {
            let coin = self.faces[self.next % self.faces.len()];
            self.next += 1;
            coin
        }
    }

    #[test]
    fn test_all_heads_gives_creative_turning_receptive() {
        let mut coins = FixedCoins::new(&[Coin::Heads]);
        let casting = cast(&mut coins, Numbering::KingWen).unwrap();

        assert_eq!(casting.primary.lines, [Line::OldYang; 6]);
        assert_eq!(casting.primary.changing, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(casting.primary.number, 1);
        assert_eq!(casting.primary.upper, Trigram::Qian);

        let secondary = casting.secondary.unwrap();
        assert_eq!(secondary.lines, [Line::YoungYin; 6]);
        assert!(secondary.changing.is_empty());
        assert_eq!(secondary.number, 2);
        assert_eq!(coins.next, 18);
    }

    #[test]
    fn test_binary_numbering_parity() {
        let mut coins = FixedCoins::new(&[Coin::Heads]);
        let casting = cast(&mut coins, Numbering::Binary).unwrap();
        assert_eq!(casting.primary.number, 64);
        assert_eq!(casting.secondary.unwrap().number, 1);
    }

    #[test]
    fn test_trigrams_follow_lines_under_binary_numbering() {
        let heaven = Hexagram::from_lines([Line::YoungYang; 6], Numbering::Binary).unwrap();
        assert_eq!(heaven.number, 64);
        assert_eq!((heaven.upper, heaven.lower), (Trigram::Qian, Trigram::Qian));

        let earth = Hexagram::from_lines([Line::YoungYin; 6], Numbering::Binary).unwrap();
        assert_eq!(earth.number, 1);
        assert_eq!((earth.upper, earth.lower), (Trigram::Kun, Trigram::Kun));

        // Same lines, same trigrams, whatever the numbering
        let lines = [
            Line::YoungYang,
            Line::YoungYin,
            Line::YoungYin,
            Line::YoungYin,
            Line::YoungYang,
            Line::YoungYin,
        ];
        let binary = Hexagram::from_lines(lines, Numbering::Binary).unwrap();
        assert_eq!((binary.upper, binary.lower), (Trigram::Kan, Trigram::Zhen));
    }

    #[test]
    fn test_no_changing_lines_no_secondary() {
        // Heads, Heads, Tails sums to 8 on every line
        let mut coins = FixedCoins::new(&[Coin::Heads, Coin::Heads, Coin::Tails]);
        let casting = cast(&mut coins, Numbering::KingWen).unwrap();
        assert_eq!(casting.primary.lines, [Line::YoungYin; 6]);
        assert_eq!(casting.primary.number, 2);
        assert!(casting.secondary.is_none());
    }

    #[test]
    fn test_king_wen_uses_trigram_halves() {
        // Lower thunder (yang at the bottom), upper water (yang in the middle)
        let lines = [
            Line::YoungYang,
            Line::YoungYin,
            Line::YoungYin,
            Line::YoungYin,
            Line::YoungYang,
            Line::YoungYin,
        ];
        let hex = Hexagram::from_lines(lines, Numbering::KingWen).unwrap();
        assert_eq!(hex.number, 3);
        assert_eq!((hex.upper, hex.lower), (Trigram::Kan, Trigram::Zhen));
        assert_eq!(hex.pinyin, "Zhūn");
    }

    #[test]
    fn test_every_pattern_resolves_under_both_numberings() {
        for numbering in [Numbering::KingWen, Numbering::Binary] {
            let mut seen = [false; 65];
            for pattern in 0u8..64 {
                let n = numbering.number_for(pattern);
                assert!((1..=64).contains(&n));
                assert!(record(n).is_ok());
                seen[n as usize] = true;
            }
            assert!(seen[1..].iter().all(|&s| s), "{:?} is not a bijection", numbering);
        }
    }

    #[test]
    fn test_seeded_coins_are_reproducible() {
        let a = cast(&mut RngCoins::seeded(42), Numbering::KingWen).unwrap();
        let b = cast(&mut RngCoins::seeded(42), Numbering::KingWen).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_numbering_from_str() {
        assert_eq!("king-wen".parse::<Numbering>(), Ok(Numbering::KingWen));
        assert_eq!("KING_WEN".parse::<Numbering>(), Ok(Numbering::KingWen));
        assert_eq!("binary".parse::<Numbering>(), Ok(Numbering::Binary));
        assert!("fuxi".parse::<Numbering>().is_err());
    }
}
