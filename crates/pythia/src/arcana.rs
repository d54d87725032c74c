//! The 23 arcana (0..=22) shared by the destiny matrix and the tarot draw.

use crate::error::OracleError;
use serde::Serialize;

/// Highest arcanum value; every matrix reduction targets this.
pub const MAX_ARCANUM: u64 = 22;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Arcanum {
    pub number: u8,
    pub name: &'static str,
    pub energy: &'static str,
    pub challenge: &'static str,
    pub talent: &'static str,
}

const fn arcanum(
    number: u8,
    name: &'static str,
    energy: &'static str,
    challenge: &'static str,
    talent: &'static str,
) -> Arcanum {
    Arcanum {
        number,
        name,
        energy,
        challenge,
        talent,
    }
}

pub static ARCANA: [Arcanum; 23] = [
    arcanum(0, "The Fool", "Freedom, spontaneity, new beginnings",
        "Recklessness, immaturity", "Starting again from a clean slate"),
    arcanum(1, "The Magician", "Action, mastery, manifestation",
        "Manipulation, illusion", "Turning ideas into reality"),
    arcanum(2, "The High Priestess", "Intuition, mystery, the subconscious",
        "Secrecy, withdrawal", "Deep intuition and inner sight"),
    arcanum(3, "The Empress", "Abundance, motherhood, creativity",
        "Overprotection, dependence", "Creating and nurturing"),
    arcanum(4, "The Emperor", "Power, structure, control",
        "Tyranny, rigidity", "Leadership and organisation"),
    arcanum(5, "The Hierophant", "Tradition, teaching, spirituality",
        "Dogmatism, conservatism", "Passing on knowledge and wisdom"),
    arcanum(6, "The Lovers", "Choice, love, union",
        "Indecision, dependent relationships", "Harmony in relationships"),
    arcanum(7, "The Chariot", "Victory, control, forward movement",
        "Aggression, loss of control", "Purpose and willpower"),
    arcanum(8, "Strength", "Inner strength, patience, compassion",
        "Weakness, self-doubt", "Guiding energy through love"),
    arcanum(9, "The Hermit", "Wisdom, search for truth, solitude",
        "Isolation, estrangement", "Deep understanding and mentorship"),
    arcanum(10, "Wheel of Fortune", "Fate, cycles, change",
        "Reliance on luck, instability", "Seizing opportunities"),
    arcanum(11, "Justice", "Balance, truth, law",
        "Harshness, refusal to compromise", "Objectivity and honesty"),
    arcanum(12, "The Hanged Man", "Sacrifice, new perspective, pause",
        "Stagnation, martyrdom", "Seeing things from the other side"),
    arcanum(13, "Death", "Transformation, ending, renewal",
        "Fear of change, clinging to the past", "Powerful transforming force"),
    arcanum(14, "Temperance", "Harmony, balance, healing",
        "Excess, imbalance", "Alchemy and healing"),
    arcanum(15, "The Devil", "Materiality, passion, attachment",
        "Addiction, obsession", "Strong sexual and material energy"),
    arcanum(16, "The Tower", "Shattered illusions, revelation, shock",
        "Catastrophe, sudden loss", "Breakthrough and renewal"),
    arcanum(17, "The Star", "Hope, inspiration, healing",
        "Disappointment, unrealistic expectations", "Inspiration and healing energy"),
    arcanum(18, "The Moon", "The subconscious, illusion, intuition",
        "Fear, deception, confusion", "Deep intuition and a bond with the subconscious"),
    arcanum(19, "The Sun", "Joy, success, vitality",
        "Selfishness, arrogance", "Radiance and the power to inspire"),
    arcanum(20, "Judgement", "Rebirth, calling, forgiveness",
        "Condemnation, guilt", "Awakening and transformation"),
    arcanum(21, "The World", "Completion, wholeness, success",
        "Unfinished business, being stuck", "Mastery and wholeness"),
    arcanum(22, "The Fool (22)", "Highest freedom, enlightenment",
        "Madness, chaos", "Transcendence"),
];

/// Arcanum for `number`, or a lookup error outside 0..=22.
pub fn lookup(number: u64) -> Result<&'static Arcanum, OracleError> {
    usize::try_from(number)
        .ok()
        .and_then(|i| ARCANA.get(i))
        .ok_or_else(|| OracleError::Lookup {
            table: "arcana",
            key: number,
        })
}
