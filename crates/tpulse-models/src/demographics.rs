//! Audience demographics models and the heuristic baseline table.
//!
//! The baseline is a synchronous, table-driven estimate keyed only by
//! category id, so a dashboard can render it before any network call
//! completes. An AI refinement may later replace it wholesale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::category_name;

/// Gender bucket labels, in display order.
pub const MALE: &str = "male";
pub const FEMALE: &str = "female";

/// Largest age bracket list accepted from an external source.
pub const MAX_AGE_BRACKETS: usize = 10;

/// Allowed deviation from 100 when summing externally sourced shares.
pub const SHARE_SUM_TOLERANCE: f64 = 1.0;

/// Share of the audience in one gender bucket (percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderShare {
    pub name: String,
    pub value: f64,
}

/// Share of the audience in one age bracket (percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeShare {
    pub name: String,
    pub value: f64,
}

/// Estimated audience of one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    /// Exactly two entries, male then female
    pub gender: Vec<GenderShare>,
    /// Ordered age brackets
    pub age: Vec<AgeShare>,
    /// Display name of the category
    pub category_name: String,
}

/// Ways an externally sourced [`Demographics`] document can be malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("expected 2 gender entries, got {0}")]
    GenderCount(usize),

    #[error("expected 1 to 10 age brackets, got {0}")]
    AgeCount(usize),

    #[error("{axis} share {value} is negative or not finite")]
    BadShare { axis: &'static str, value: f64 },

    #[error("{axis} shares sum to {sum}, expected 100")]
    BadSum { axis: &'static str, sum: f64 },

    #[error("empty {0} label")]
    EmptyLabel(&'static str),
}

impl Demographics {
    /// Check the document against the shape the dashboard can render.
    ///
    /// Heuristic output always passes; this exists for documents produced by
    /// the generative text service, whose arithmetic is not trusted.
    pub fn check_shape(&self) -> Result<(), ShapeError> {
        if self.gender.len() != 2 {
            return Err(ShapeError::GenderCount(self.gender.len()));
        }
        if self.age.is_empty() || self.age.len() > MAX_AGE_BRACKETS {
            return Err(ShapeError::AgeCount(self.age.len()));
        }
        if self.category_name.trim().is_empty() {
            return Err(ShapeError::EmptyLabel("category"));
        }

        check_axis(
            "gender",
            self.gender.iter().map(|g| (g.name.as_str(), g.value)),
        )?;
        check_axis("age", self.age.iter().map(|a| (a.name.as_str(), a.value)))
    }

    /// Sum of the gender shares.
    pub fn gender_total(&self) -> f64 {
        self.gender.iter().map(|g| g.value).sum()
    }

    /// Sum of the age shares.
    pub fn age_total(&self) -> f64 {
        self.age.iter().map(|a| a.value).sum()
    }
}

fn check_axis<'a>(
    axis: &'static str,
    shares: impl Iterator<Item = (&'a str, f64)>,
) -> Result<(), ShapeError> {
    let mut sum = 0.0;
    for (name, value) in shares {
        if name.trim().is_empty() {
            return Err(ShapeError::EmptyLabel(axis));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(ShapeError::BadShare { axis, value });
        }
        sum += value;
    }
    if (sum - 100.0).abs() > SHARE_SUM_TOLERANCE {
        return Err(ShapeError::BadSum { axis, sum });
    }
    Ok(())
}

/// A fixed audience profile: (male, female) and ordered age brackets.
struct Profile {
    gender: (u8, u8),
    age: &'static [(&'static str, u8)],
}

const DEFAULT_PROFILE: Profile = Profile {
    gender: (50, 50),
    age: &[
        ("teens", 15),
        ("20s", 25),
        ("30s", 25),
        ("40s", 15),
        ("50s", 12),
        ("60+", 8),
    ],
};

const GAMING_PROFILE: Profile = Profile {
    gender: (78, 22),
    age: &[
        ("teens", 35),
        ("20s", 40),
        ("30s", 15),
        ("40s", 6),
        ("50s", 3),
        ("60+", 1),
    ],
};

const TECH_PROFILE: Profile = Profile {
    gender: (85, 15),
    age: &[
        ("teens", 10),
        ("20s", 45),
        ("30s", 30),
        ("40s", 10),
        ("50s", 4),
        ("60+", 1),
    ],
};

const BEAUTY_PROFILE: Profile = Profile {
    gender: (12, 88),
    age: &[
        ("teens", 30),
        ("20s", 45),
        ("30s", 15),
        ("40s", 7),
        ("50s", 2),
        ("60+", 1),
    ],
};

// Animation draws young children plus the parents watching with them.
const KIDS_PROFILE: Profile = Profile {
    gender: (45, 55),
    age: &[
        ("under 10", 40),
        ("teens", 10),
        ("20s", 5),
        ("30s (parents)", 25),
        ("40s (parents)", 15),
        ("50+", 5),
    ],
};

const NEWS_PROFILE: Profile = Profile {
    gender: (65, 35),
    age: &[
        ("teens", 2),
        ("20s", 8),
        ("30s", 15),
        ("40s", 25),
        ("50s", 30),
        ("60+", 20),
    ],
};

fn profile_for(category_id: &str) -> &'static Profile {
    match category_id {
        "20" => &GAMING_PROFILE,
        "28" => &TECH_PROFILE,
        "26" => &BEAUTY_PROFILE,
        "1" => &KIDS_PROFILE,
        "25" => &NEWS_PROFILE,
        _ => &DEFAULT_PROFILE,
    }
}

/// Heuristic audience estimate for a category.
///
/// Pure and total: every id, known or not, produces a distribution whose
/// gender and age shares each sum to exactly 100.
pub fn baseline(category_id: &str) -> Demographics {
    let profile = profile_for(category_id);
    let (male, female) = profile.gender;

    Demographics {
        gender: vec![
            GenderShare {
                name: MALE.to_string(),
                value: f64::from(male),
            },
            GenderShare {
                name: FEMALE.to_string(),
                value: f64::from(female),
            },
        ],
        age: profile
            .age
            .iter()
            .map(|(name, value)| AgeShare {
                name: (*name).to_string(),
                value: f64::from(*value),
            })
            .collect(),
        category_name: category_name(category_id).to_string(),
    }
}
