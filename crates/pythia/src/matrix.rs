//! Destiny matrix: arcana slots reduced from the day, month and year of birth.

use crate::arcana::{lookup, Arcanum, MAX_ARCANUM};
use crate::error::OracleError;
use crate::numerology::reduce;
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

pub const CHAKRAS: [&str; 7] = [
    "Muladhara",
    "Svadhisthana",
    "Manipura",
    "Anahata",
    "Vishuddha",
    "Ajna",
    "Sahasrara",
];

fn arcanum_of(n: i64) -> Result<u8, OracleError> {
    // Values are at most 22 after reduction
    Ok(reduce(n, MAX_ARCANUM)? as u8)
}

/// `name: energy` text for one of the primary slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotMeaning {
    pub slot: &'static str,
    pub arcanum: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinyMatrix {
    pub birth_date: NaiveDate,
    pub personal: u8,
    pub destiny: u8,
    pub social: u8,
    pub spiritual: u8,
    pub chakra_line: [u8; 7],
    pub health: u8,
    pub money: u8,
    pub parent_program: u8,
    pub love_program: u8,
    pub talent_program: u8,
    pub arcana_meanings: Vec<SlotMeaning>,
    pub challenges: Vec<&'static str>,
    pub talents: Vec<&'static str>,
    pub purpose: String,
}

impl DestinyMatrix {
    pub fn calculate(birth_date: NaiveDate) -> Result<Self, OracleError> {
        let day = i64::from(birth_date.day());
        let month = i64::from(birth_date.month());
        let year = i64::from(birth_date.year());

        let personal = arcanum_of(day)?;
        let destiny = arcanum_of(month)?;
        let social = arcanum_of(year)?;
        let spiritual = arcanum_of(i64::from(personal) + i64::from(destiny) + i64::from(social))?;

        // Each position is reduced on its own, not from the previous one
        let chakra_line = [
            personal,
            destiny,
            social,
            arcanum_of(day + month)?,
            arcanum_of(month + year)?,
            arcanum_of(day + year)?,
            arcanum_of(day + month + year)?,
        ];

        let health = chakra_line[3];
        let money = chakra_line[5];
        let parent_program = chakra_line[6];
        let love_program = arcanum_of(i64::from(personal) + i64::from(destiny))?;
        let talent_program = arcanum_of(i64::from(personal) + i64::from(social))?;

        let meaning = |slot: &'static str, n: u8| -> Result<SlotMeaning, OracleError> {
            let a = lookup(u64::from(n))?;
            Ok(SlotMeaning {
                slot,
                arcanum: n,
                text: format!("{}: {}", a.name, a.energy),
            })
        };
        let arcana_meanings = vec![
            meaning("personal", personal)?,
            meaning("destiny", destiny)?,
            meaning("social", social)?,
            meaning("spiritual", spiritual)?,
        ];

        let challenges = vec![
            lookup(u64::from(personal))?.challenge,
            lookup(u64::from(destiny))?.challenge,
            lookup(u64::from(parent_program))?.challenge,
        ];
        let talents = vec![
            lookup(u64::from(personal))?.talent,
            lookup(u64::from(talent_program))?.talent,
        ];
        let purpose = format!(
            "Your purpose is tied to the energy of Arcanum {} - {}",
            spiritual,
            lookup(u64::from(spiritual))?.name
        );

        log::debug!(
            "Destiny matrix for {}: {} {} {} {}",
            birth_date,
            personal,
            destiny,
            social,
            spiritual
        );

        Ok(DestinyMatrix {
            birth_date,
            personal,
            destiny,
            social,
            spiritual,
            chakra_line,
            health,
            money,
            parent_program,
            love_program,
            talent_program,
            arcana_meanings,
            challenges,
            talents,
            purpose,
        })
    }

    /// Arcanum of `year` for this birth date. Not stored, since it moves
    /// with the calendar.
    pub fn year_arcana(&self, year: i32) -> Result<u8, OracleError> {
        arcanum_of(
            i64::from(self.birth_date.day()) + i64::from(self.birth_date.month()) + i64::from(year),
        )
    }

    /// [`DestinyMatrix::year_arcana`] for the current local year.
    pub fn current_year_arcana(&self) -> Result<u8, OracleError> {
        self.year_arcana(Local::now().year())
    }

    pub fn arcanum(&self, n: u8) -> Result<&'static Arcanum, OracleError> {
        lookup(u64::from(n))
    }
}

impl fmt::Display for DestinyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Destiny matrix for {}", self.birth_date.format("%d.%m.%Y"))?;
        writeln!(f)?;
        writeln!(f, "Primary energies:")?;
        for m in &self.arcana_meanings {
            writeln!(f, "  {} arcanum {}: {}", m.slot, m.arcanum, m.text)?;
        }
        writeln!(f, "Chakra line:")?;
        for (i, (name, value)) in CHAKRAS.iter().zip(self.chakra_line.iter()).enumerate() {
            writeln!(f, "  {}. {}: {}", i + 1, name, value)?;
        }
        writeln!(f, "Health: arcanum {}", self.health)?;
        writeln!(f, "Money: arcanum {}", self.money)?;
        writeln!(
            f,
            "Programs: parent {}, love {}, talent {}",
            self.parent_program, self.love_program, self.talent_program
        )?;
        writeln!(f, "Purpose: {}", self.purpose)?;
        writeln!(f, "Talents:")?;
        for t in &self.talents {
            writeln!(f, "  - {}", t)?;
        }
        write!(f, "Challenges:")?;
        for c in &self.challenges {
            write!(f, "\n  - {}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fifteenth_of_march_1990() {
        let m = DestinyMatrix::calculate(date(15, 3, 1990)).unwrap();
        assert_eq!(m.personal, 6);
        assert_eq!(m.destiny, 3);
        // 1990 -> 19, which already fits within 22
        assert_eq!(m.social, 19);
        // 6 + 3 + 19 = 28 -> 10
        assert_eq!(m.spiritual, 10);
        assert_eq!(m.chakra_line, [6, 3, 19, 18, 22, 7, 10]);
        assert_eq!((m.health, m.money), (18, 7));
        assert_eq!((m.parent_program, m.love_program, m.talent_program), (10, 9, 7));
        assert_eq!(m.year_arcana(2024).unwrap(), 8);
        assert_eq!(
            m.purpose,
            "Your purpose is tied to the energy of Arcanum 10 - Wheel of Fortune"
        );
        assert_eq!(m.arcana_meanings[0].text, "The Lovers: Choice, love, union");
        assert_eq!(m.challenges.len(), 3);
        assert_eq!(m.talents, vec!["Harmony in relationships", "Purpose and willpower"]);
    }

    #[test]
    fn test_all_values_within_arcana_range() {
        let mut d = date(1, 1, 1000);
        let end = date(31, 12, 9999);
        while d <= end {
            let m = DestinyMatrix::calculate(d).unwrap();
            let values = [
                m.personal,
                m.destiny,
                m.social,
                m.spiritual,
                m.health,
                m.money,
                m.parent_program,
                m.love_program,
                m.talent_program,
                m.year_arcana(d.year() + 30).unwrap(),
            ];
            for v in values.iter().chain(m.chakra_line.iter()) {
                assert!(u64::from(*v) <= MAX_ARCANUM, "{} gave {}", d, v);
            }
            d = d + chrono::Duration::days(37);
        }
    }

    #[test]
    fn test_display_lists_chakras() {
        let m = DestinyMatrix::calculate(date(1, 1, 2000)).unwrap();
        let text = m.to_string();
        assert!(text.contains("Sahasrara"));
        assert!(text.starts_with("Destiny matrix for 01.01.2000"));
    }
}
