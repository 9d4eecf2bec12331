//! Weight schemes - how the numeric value of a reaction is validated
//!
//! - `Standard`: every reaction carries the configured default weight ("like")
//! - `Vote`: weight is a direction, `-1` or `1`
//! - `Rating`: weight is a score inside `[min, max]`

use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_WEIGHT: i32 = 1;
const DEFAULT_MIN: i32 = 1;
const DEFAULT_MAX: i32 = 5;
const RANGE_SPAN: i32 = 5;

/// Weight validation scheme of a reaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightScheme {
    #[default]
    Standard,
    Vote,
    Rating,
}

impl WeightScheme {
    /// Parse a configured scheme, falling back to `Standard` when absent or unrecognized
    pub fn coerce(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("vote") => Self::Vote,
            Some("rating") => Self::Rating,
            _ => Self::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vote => "vote",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for WeightScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized weight options
///
/// Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightOptions {
    scheme: WeightScheme,
    default: i32,
    min: i32,
    max: i32,
}

impl WeightOptions {
    /// Build options from possibly missing configuration values
    ///
    /// A non-positive `min` is replaced by `default`; a `max` not above `min`
    /// is replaced by `min + 5`.
    pub fn new(
        scheme: WeightScheme,
        default: Option<i32>,
        min: Option<i32>,
        max: Option<i32>,
    ) -> Self {
        let default = default.unwrap_or(DEFAULT_WEIGHT);

        let min = match min.unwrap_or(DEFAULT_MIN) {
            m if m > 0 => m,
            _ => default,
        };

        let max = match max.unwrap_or(DEFAULT_MAX) {
            m if m > min => m,
            _ => min.saturating_add(RANGE_SPAN),
        };

        Self {
            scheme,
            default,
            min,
            max,
        }
    }

    #[inline]
    pub fn scheme(&self) -> WeightScheme {
        self.scheme
    }

    #[inline]
    pub fn default_weight(&self) -> i32 {
        self.default
    }

    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Validate a requested weight against the scheme
    ///
    /// `None` stands for a missing or non-integer input.
    pub fn validate(&self, weight: Option<i32>) -> i32 {
        match self.scheme {
            WeightScheme::Vote => match weight {
                Some(w @ (-1 | 1)) => w,
                _ => 1,
            },
            WeightScheme::Rating => match weight {
                Some(w) if (self.min..=self.max).contains(&w) => w,
                _ => self.default,
            },
            WeightScheme::Standard => self.default,
        }
    }
}

impl Default for WeightOptions {
    fn default() -> Self {
        Self::new(WeightScheme::Standard, None, None, None)
    }
}
