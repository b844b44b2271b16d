use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Franchise sector being audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    CafeQsr,
    FitnessGym,
    CloudKitchen,
    RetailStore,
    SalonSpa,
}

impl Industry {
    /// Every supported industry, in display order.
    pub const ALL: [Industry; 5] = [
        Industry::CafeQsr,
        Industry::FitnessGym,
        Industry::CloudKitchen,
        Industry::RetailStore,
        Industry::SalonSpa,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Industry::CafeQsr => "Cafe / QSR",
            Industry::FitnessGym => "Fitness / Gym",
            Industry::CloudKitchen => "Cloud Kitchen",
            Industry::RetailStore => "Retail Store",
            Industry::SalonSpa => "Salon / Spa",
        }
    }

    /// Canonical tag accepted on the command line.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Industry::CafeQsr => "cafe",
            Industry::FitnessGym => "gym",
            Industry::CloudKitchen => "cloud-kitchen",
            Industry::RetailStore => "retail",
            Industry::SalonSpa => "salon",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = DomainError;

    /// Parses a tag or label case-insensitively, ignoring spaces and
    /// punctuation, so "Cafe / QSR", "cafe-qsr" and "qsr" all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "cafe" | "qsr" | "cafeqsr" => Ok(Industry::CafeQsr),
            "gym" | "fitness" | "fitnessgym" => Ok(Industry::FitnessGym),
            "cloudkitchen" | "kitchen" => Ok(Industry::CloudKitchen),
            "retail" | "retailstore" | "store" => Ok(Industry::RetailStore),
            "salon" | "spa" | "salonspa" => Ok(Industry::SalonSpa),
            _ => Err(DomainError::invalid(
                "industry",
                format!("unknown industry tag `{s}`"),
            )),
        }
    }
}

/// Traffic-light investability verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Payback within 18 months.
    Green,
    /// Payback between 18 and 24 months.
    Yellow,
    /// Payback beyond 24 months, or never.
    Red,
}

impl Verdict {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Green => "GREEN LIGHT",
            Verdict::Yellow => "YELLOW LIGHT",
            Verdict::Red => "RED LIGHT",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
