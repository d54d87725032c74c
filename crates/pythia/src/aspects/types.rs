use crate::ephemeris::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Ideal angle and orb tolerance for one aspect kind.
#[derive(Debug, Clone, Copy)]
pub struct AspectSpec {
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

/// Tested in this order; the first kind within its orb wins.
pub const ASPECTS: [AspectSpec; 5] = [
    AspectSpec { kind: AspectKind::Conjunction, angle: 0.0, orb: 8.0 },
    AspectSpec { kind: AspectKind::Sextile, angle: 60.0, orb: 6.0 },
    AspectSpec { kind: AspectKind::Square, angle: 90.0, orb: 8.0 },
    AspectSpec { kind: AspectKind::Trine, angle: 120.0, orb: 8.0 },
    AspectSpec { kind: AspectKind::Opposition, angle: 180.0, orb: 8.0 },
];

impl AspectKind {
    pub fn spec(self) -> AspectSpec {
        ASPECTS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }

    /// Short keyword handed to the text generator.
    pub fn keynote(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "fusion of energies",
            AspectKind::Sextile => "harmonious opportunity",
            AspectKind::Square => "tension and challenge",
            AspectKind::Trine => "harmony and flow",
            AspectKind::Opposition => "polarity and balance",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Core aspect information, independent of which bodies form it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectCore {
    pub kind: AspectKind,
    /// Angular separation in [0, 180]
    pub separation: f64,
    /// Deviation from the exact angle, never above the kind's orb
    pub orb: f64,
    /// Whether the aspect is applying (approaching exact)
    pub is_applying: bool,
    /// Whether the aspect is exact (within 0.1 degrees)
    pub is_exact: bool,
}

/// An aspect between two bodies of the same chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    #[serde(flatten)]
    pub core: AspectCore,
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (orb {:.1}°, {})",
            self.first,
            self.core.kind,
            self.second,
            self.core.orb,
            self.core.kind.keynote()
        )
    }
}
