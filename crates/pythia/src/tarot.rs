//! Major Arcana draws: single cards, spreads and the card of the day.

use crate::arcana::{lookup, Arcanum};
use crate::error::OracleError;
use chrono::{Datelike, NaiveDate};
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;

/// Cards 0..=21; arcanum 22 only exists in the destiny matrix.
pub const MAJOR_ARCANA: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    pub number: u8,
    pub name: &'static str,
    pub orientation: Orientation,
    /// Energy of the arcanum when upright, its challenge when reversed
    pub meaning: &'static str,
}

impl TarotCard {
    pub fn new(number: u8, orientation: Orientation) -> Result<Self, OracleError> {
        if usize::from(number) >= MAJOR_ARCANA {
            return Err(OracleError::Lookup {
                table: "major_arcana",
                key: u64::from(number),
            });
        }
        let arcanum: &Arcanum = lookup(u64::from(number))?;
        Ok(TarotCard {
            number,
            name: arcanum.name,
            orientation,
            meaning: match orientation {
                Orientation::Upright => arcanum.energy,
                Orientation::Reversed => arcanum.challenge,
            },
        })
    }

    pub fn is_reversed(&self) -> bool {
        self.orientation == Orientation::Reversed
    }
}

impl fmt::Display for TarotCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = match self.orientation {
            Orientation::Upright => "upright",
            Orientation::Reversed => "reversed",
        };
        write!(f, "{} ({}, {}): {}", self.name, self.number, position, self.meaning)
    }
}

fn orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.gen_bool(0.5) {
        Orientation::Reversed
    } else {
        Orientation::Upright
    }
}

/// Draw one card.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Result<TarotCard, OracleError> {
    let number = rng.gen_range(0..MAJOR_ARCANA) as u8;
    TarotCard::new(number, orientation(rng))
}

/// Draw `count` distinct cards, at most the whole deck.
pub fn draw_spread<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<TarotCard>, OracleError> {
    let picks = sample(rng, MAJOR_ARCANA, count.min(MAJOR_ARCANA)).into_vec();
    picks
        .into_iter()
        .map(|n| TarotCard::new(n as u8, orientation(rng)))
        .collect()
}

/// The same card for everyone on a given calendar day.
pub fn card_of_the_day(date: NaiveDate) -> Result<TarotCard, OracleError> {
    let mut rng = ChaCha8Rng::seed_from_u64(i64::from(date.num_days_from_ce()) as u64);
    draw(&mut rng)
}
