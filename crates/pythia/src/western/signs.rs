//! Zodiac signs with their element, quality and traditional ruler.
//!
//! Each sign spans 30 degrees of ecliptic longitude starting at 0° Aries.

use crate::ephemeris::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Priority order used to break ties in element counts.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Cardinal, Quality::Fixed, Quality::Mutable];

    pub fn name(self) -> &'static str {
        match self {
            Quality::Cardinal => "cardinal",
            Quality::Fixed => "fixed",
            Quality::Mutable => "mutable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub struct SignMeta {
    pub sign: Sign,
    pub name: &'static str,
    pub glyph: &'static str,
    pub element: Element,
    pub quality: Quality,
    pub ruler: Body,
}

pub static SIGNS: [SignMeta; 12] = [
    SignMeta { sign: Sign::Aries, name: "Aries", glyph: "♈", element: Element::Fire, quality: Quality::Cardinal, ruler: Body::Mars },
    SignMeta { sign: Sign::Taurus, name: "Taurus", glyph: "♉", element: Element::Earth, quality: Quality::Fixed, ruler: Body::Venus },
    SignMeta { sign: Sign::Gemini, name: "Gemini", glyph: "♊", element: Element::Air, quality: Quality::Mutable, ruler: Body::Mercury },
    SignMeta { sign: Sign::Cancer, name: "Cancer", glyph: "♋", element: Element::Water, quality: Quality::Cardinal, ruler: Body::Moon },
    SignMeta { sign: Sign::Leo, name: "Leo", glyph: "♌", element: Element::Fire, quality: Quality::Fixed, ruler: Body::Sun },
    SignMeta { sign: Sign::Virgo, name: "Virgo", glyph: "♍", element: Element::Earth, quality: Quality::Mutable, ruler: Body::Mercury },
    SignMeta { sign: Sign::Libra, name: "Libra", glyph: "♎", element: Element::Air, quality: Quality::Cardinal, ruler: Body::Venus },
    SignMeta { sign: Sign::Scorpio, name: "Scorpio", glyph: "♏", element: Element::Water, quality: Quality::Fixed, ruler: Body::Mars },
    SignMeta { sign: Sign::Sagittarius, name: "Sagittarius", glyph: "♐", element: Element::Fire, quality: Quality::Mutable, ruler: Body::Jupiter },
    SignMeta { sign: Sign::Capricorn, name: "Capricorn", glyph: "♑", element: Element::Earth, quality: Quality::Cardinal, ruler: Body::Saturn },
    SignMeta { sign: Sign::Aquarius, name: "Aquarius", glyph: "♒", element: Element::Air, quality: Quality::Fixed, ruler: Body::Saturn },
    SignMeta { sign: Sign::Pisces, name: "Pisces", glyph: "♓", element: Element::Water, quality: Quality::Mutable, ruler: Body::Jupiter },
];

/// Wrap any finite longitude into [0, 360).
pub fn normalize_degrees(longitude: f64) -> f64 {
    let lon = longitude.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if lon >= 360.0 {
        0.0
    } else {
        lon
    }
}

/// Get sign index (0-11) from longitude
pub fn get_sign_index(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / SIGN_SPAN).floor() as usize).min(11)
}

impl Sign {
    pub fn from_index(index: usize) -> Sign {
        SIGNS[index % 12].sign
    }

    pub fn from_longitude(longitude: f64) -> Sign {
        Sign::from_index(get_sign_index(longitude))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn meta(self) -> &'static SignMeta {
        &SIGNS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    pub fn element(self) -> Element {
        self.meta().element
    }

    pub fn quality(self) -> Quality {
        self.meta().quality
    }

    pub fn ruler(self) -> Body {
        self.meta().ruler
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whole degrees and minutes of a longitude within its sign.
pub fn degree_minute_in_sign(longitude: f64) -> (u8, u8) {
    let lon = normalize_degrees(longitude);
    let degree = (lon % SIGN_SPAN).floor() as u8;
    let minute = ((lon.fract()) * 60.0).floor().min(59.0) as u8;
    (degree, minute)
}

/// Format a longitude as `12°05' Leo`.
pub fn format_position(longitude: f64) -> String {
    let (degree, minute) = degree_minute_in_sign(longitude);
    format!("{}°{:02}' {}", degree, minute, Sign::from_longitude(longitude))
}
