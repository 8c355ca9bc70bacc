use serde::Serialize;

use crate::errors::RecommendError;

/// One of the fourteen age ranges indexing every reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgeBand {
    Months0To5,
    Months6To8,
    Months9To11,
    Years1To2,
    Years3To5,
    Years6To7,
    Years8To9,
    Years10To11,
    Years12To14,
    Years15To19,
    Years20To29,
    Years30To49,
    Years50To69,
    Years70Plus,
}

/// First month (inclusive) of each band, in band order.
const BAND_STARTS: [i64; AgeBand::COUNT] = [0, 6, 9, 12, 36, 72, 96, 120, 144, 180, 240, 360, 600, 840];

impl AgeBand {
    pub const COUNT: usize = 14;

    pub const ALL: [AgeBand; AgeBand::COUNT] = [
        AgeBand::Months0To5,
        AgeBand::Months6To8,
        AgeBand::Months9To11,
        AgeBand::Years1To2,
        AgeBand::Years3To5,
        AgeBand::Years6To7,
        AgeBand::Years8To9,
        AgeBand::Years10To11,
        AgeBand::Years12To14,
        AgeBand::Years15To19,
        AgeBand::Years20To29,
        AgeBand::Years30To49,
        AgeBand::Years50To69,
        AgeBand::Years70Plus,
    ];

    /// Resolves an age in months to its band. Ages past the last boundary
    /// clamp to `Years70Plus`; negative ages are rejected.
    pub fn from_months(age_months: i64) -> Result<Self, RecommendError> {
        if age_months < 0 {
            return Err(RecommendError::NegativeAge(age_months));
        }
        let index = BAND_STARTS
            .iter()
            .rposition(|&start| start <= age_months)
            .unwrap_or(0);
        Ok(Self::ALL[index])
    }

    /// Column index into the reference tables.
    pub fn index(self) -> usize {
        self as usize
    }
}
