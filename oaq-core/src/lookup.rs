//! EPA Air Quality Index Lookup Tables
//!
//! ## Background
//!
//! The EPA defines the AQI of each pollutant as a piecewise-linear function
//! of its concentration. Each breakpoint pairs a concentration (ppb) with the
//! AQI value at the top of its band:
//!
//! ```text
//! AQI
//! 500 |                                   ____*
//! 300 |                          ____*----
//! 200 |                   *-----
//! 150 |            *-----
//! 100 |      *----
//!  50 |  *--
//!   0 *-------------------------------------------> ppb
//!     0  bp0  bp1        bp2    bp3       bp4   bp5
//! ```
//!
//! ## Interpolation Rules
//!
//! 1. Find the first breakpoint whose concentration is `>=` the input.
//! 2. If it is the first breakpoint, interpolate from the origin `(0, 0)`.
//! 3. Otherwise interpolate between it and the previous breakpoint.
//! 4. Beyond the last breakpoint, saturate at the last AQI value.
//!
//! The search is linear; tables have six entries.
//!
//! ## Tables
//!
//! | Band | NO2 (ppb, 1 h) | O3 (ppb) | AQI |
//! |------|----------------|----------|-----|
//! | Good | 53             | 54       | 50  |
//! | Moderate | 100        | 70       | 100 |
//! | USG  | 360            | 85       | 150 |
//! | Unhealthy | 649       | 105      | 200 |
//! | Very Unhealthy | 1249 | 200      | 300 |
//! | Hazardous | 2049      | 604      | 500 |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One `(concentration ppb, aqi)` breakpoint
pub type Breakpoint = (u32, u32);

/// Interpolate the AQI of `concentration` over ascending `breakpoints`
///
/// Pure function. An empty table maps everything to 0.
pub fn interpolate_aqi(concentration: f32, breakpoints: &[Breakpoint]) -> f32 {
    let Some(&(_, last_aqi)) = breakpoints.last() else {
        return 0.0;
    };

    for (idx, &(conc, aqi)) in breakpoints.iter().enumerate() {
        if conc as f32 >= concentration {
            let (conc_lo, aqi_lo) = if idx == 0 {
                (0.0, 0.0)
            } else {
                let (c, a) = breakpoints[idx - 1];
                (c as f32, a as f32)
            };
            let span = conc as f32 - conc_lo;
            if span <= 0.0 {
                return aqi as f32;
            }
            return aqi_lo + (aqi as f32 - aqi_lo) * (concentration - conc_lo) / span;
        }
    }

    log_debug!("concentration {} above AQI table, saturating", concentration);
    last_aqi as f32
}

/// Breakpoint table for one pollutant
#[derive(Debug, Clone, Copy)]
pub struct AqiTable {
    breakpoints: &'static [Breakpoint],
}

impl AqiTable {
    /// EPA 1-hour NO2 table
    pub const NO2: Self = Self {
        breakpoints: &NO2_BREAKPOINTS,
    };

    /// EPA O3 table
    pub const O3: Self = Self {
        breakpoints: &O3_BREAKPOINTS,
    };

    /// Custom table; breakpoints must ascend in both columns
    pub const fn new(breakpoints: &'static [Breakpoint]) -> Self {
        Self { breakpoints }
    }

    /// AQI of a concentration in ppb
    pub fn aqi(&self, concentration_ppb: f32) -> f32 {
        interpolate_aqi(concentration_ppb, self.breakpoints)
    }

    /// Raw breakpoints
    pub fn breakpoints(&self) -> &'static [Breakpoint] {
        self.breakpoints
    }
}

const NO2_BREAKPOINTS: [Breakpoint; 6] = [
    (53, 50),
    (100, 100),
    (360, 150),
    (649, 200),
    (1249, 300),
    (2049, 500),
];

const O3_BREAKPOINTS: [Breakpoint; 6] = [
    (54, 50),
    (70, 100),
    (85, 150),
    (105, 200),
    (200, 300),
    (604, 500),
];

/// EPA AQI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiCategory {
    /// 0 - 50
    Good,
    /// 51 - 100
    Moderate,
    /// 101 - 150
    UnhealthyForSensitiveGroups,
    /// 151 - 200
    Unhealthy,
    /// 201 - 300
    VeryUnhealthy,
    /// above 300
    Hazardous,
}

impl AqiCategory {
    /// Band of an AQI value
    pub fn from_aqi(aqi: f32) -> Self {
        match aqi {
            a if a <= 50.0 => Self::Good,
            a if a <= 100.0 => Self::Moderate,
            a if a <= 150.0 => Self::UnhealthyForSensitiveGroups,
            a if a <= 200.0 => Self::Unhealthy,
            a if a <= 300.0 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }
}
