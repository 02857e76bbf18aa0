//! The five-level mood scale and its slider mapping

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal wellbeing rating, ordered worst to best.
///
/// The discriminants double as slider positions (0..=4), so the
/// index mapping below is a total bijection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    Low = 0,
    Meh = 1,
    Okay = 2,
    Good = 3,
    Great = 4,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Low, Mood::Meh, Mood::Okay, Mood::Good, Mood::Great];

    /// Slider position for this mood (0..=4)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Mood for a slider position. Returns None outside 0..=4.
    pub fn from_index(index: usize) -> Option<Mood> {
        Self::ALL.get(index).copied()
    }

    /// Name used in the persisted key-value store (LOW, MEH, ...)
    pub fn storage_name(&self) -> &'static str {
        match self {
            Mood::Low => "LOW",
            Mood::Meh => "MEH",
            Mood::Okay => "OKAY",
            Mood::Good => "GOOD",
            Mood::Great => "GREAT",
        }
    }

    /// Parse a persisted storage name. Unknown strings map to None,
    /// never an error: a corrupt value reads as "absent".
    pub fn from_storage_name(name: &str) -> Option<Mood> {
        match name {
            "LOW" => Some(Mood::Low),
            "MEH" => Some(Mood::Meh),
            "OKAY" => Some(Mood::Okay),
            "GOOD" => Some(Mood::Good),
            "GREAT" => Some(Mood::Great),
            _ => None,
        }
    }

    /// User-facing label ("Bad" for Low, matching the slider captions)
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Low => "Bad",
            Mood::Meh => "Meh",
            Mood::Okay => "Okay",
            Mood::Good => "Good",
            Mood::Great => "Great",
        }
    }

    /// Neutral-or-better threshold used by the streak calculator
    pub fn is_neutral_or_better(&self) -> bool {
        *self >= Mood::Okay
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept mood names ("bad"/"low", "okay"/"ok", ...) and
        // slider positions ("0".."4").
        if let Ok(index) = s.parse::<usize>() {
            return Mood::from_index(index).ok_or_else(|| {
                format!("Invalid slider position: '{}'. Valid positions are 0-4", s)
            });
        }

        match s.to_lowercase().as_str() {
            "bad" | "low" => Ok(Mood::Low),
            "meh" => Ok(Mood::Meh),
            "okay" | "ok" => Ok(Mood::Okay),
            "good" => Ok(Mood::Good),
            "great" => Ok(Mood::Great),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: bad, meh, okay, good, great",
                s
            )),
        }
    }
}
