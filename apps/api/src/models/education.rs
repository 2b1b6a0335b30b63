use std::fmt;

use serde::{Deserialize, Serialize};

/// Education levels accepted in a user profile.
///
/// Listings carry their requirement as a free label; use [`rank_of_label`]
/// to place such a label on the same scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "ITI")]
    Iti,
    #[serde(rename = "Diploma")]
    Diploma,
    #[serde(rename = "BCA")]
    Bca,
    #[serde(rename = "BSc")]
    Bsc,
    #[serde(rename = "B.Com")]
    Bcom,
    #[serde(rename = "BBA")]
    Bba,
    #[serde(rename = "BA")]
    Ba,
    #[serde(rename = "B.Ed")]
    Bed,
    #[serde(rename = "B.Tech")]
    Btech,
    #[serde(rename = "B.E")]
    Be,
    #[serde(rename = "MBBS")]
    Mbbs,
    #[serde(rename = "B.Pharma")]
    Bpharma,
    #[serde(rename = "BDS")]
    Bds,
    #[serde(rename = "BAMS")]
    Bams,
    #[serde(rename = "B.Sc Nursing")]
    BscNursing,
    #[serde(rename = "B.Sc Agriculture")]
    BscAgriculture,
    #[serde(rename = "B.Tech Agricultural")]
    BtechAgricultural,
    #[serde(rename = "Mass Communication")]
    MassCommunication,
    #[serde(rename = "MCA")]
    Mca,
    #[serde(rename = "M.Tech")]
    Mtech,
    #[serde(rename = "MBA")]
    Mba,
    #[serde(rename = "M.Com")]
    Mcom,
    #[serde(rename = "MA")]
    Ma,
    #[serde(rename = "MSc")]
    Msc,
    #[serde(rename = "M.Ed")]
    Med,
    #[serde(rename = "M.Sc Agriculture")]
    MscAgriculture,
    #[serde(rename = "CA")]
    Ca,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 27] = [
        Self::Iti,
        Self::Diploma,
        Self::Bca,
        Self::Bsc,
        Self::Bcom,
        Self::Bba,
        Self::Ba,
        Self::Bed,
        Self::Btech,
        Self::Be,
        Self::Mbbs,
        Self::Bpharma,
        Self::Bds,
        Self::Bams,
        Self::BscNursing,
        Self::BscAgriculture,
        Self::BtechAgricultural,
        Self::MassCommunication,
        Self::Mca,
        Self::Mtech,
        Self::Mba,
        Self::Mcom,
        Self::Ma,
        Self::Msc,
        Self::Med,
        Self::MscAgriculture,
        Self::Ca,
    ];

    /// Display label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iti => "ITI",
            Self::Diploma => "Diploma",
            Self::Bca => "BCA",
            Self::Bsc => "BSc",
            Self::Bcom => "B.Com",
            Self::Bba => "BBA",
            Self::Ba => "BA",
            Self::Bed => "B.Ed",
            Self::Btech => "B.Tech",
            Self::Be => "B.E",
            Self::Mbbs => "MBBS",
            Self::Bpharma => "B.Pharma",
            Self::Bds => "BDS",
            Self::Bams => "BAMS",
            Self::BscNursing => "B.Sc Nursing",
            Self::BscAgriculture => "B.Sc Agriculture",
            Self::BtechAgricultural => "B.Tech Agricultural",
            Self::MassCommunication => "Mass Communication",
            Self::Mca => "MCA",
            Self::Mtech => "M.Tech",
            Self::Mba => "MBA",
            Self::Mcom => "M.Com",
            Self::Ma => "MA",
            Self::Msc => "MSc",
            Self::Med => "M.Ed",
            Self::MscAgriculture => "M.Sc Agriculture",
            Self::Ca => "CA",
        }
    }

    /// Position in the education hierarchy. Higher is more senior.
    pub fn rank(self) -> u8 {
        match self {
            Self::Iti => 1,
            Self::Diploma => 2,
            Self::Bca | Self::Bsc | Self::Bcom | Self::Bba | Self::Ba | Self::Bed => 3,
            Self::Btech
            | Self::Be
            | Self::Mbbs
            | Self::Bpharma
            | Self::Bds
            | Self::Bams
            | Self::BscNursing
            | Self::BscAgriculture
            | Self::BtechAgricultural
            | Self::MassCommunication => 4,
            Self::Mca
            | Self::Mtech
            | Self::Mba
            | Self::Mcom
            | Self::Ma
            | Self::Msc
            | Self::Med
            | Self::MscAgriculture => 5,
            Self::Ca => 6,
        }
    }

    /// Exact label lookup. Labels are case-sensitive, as in the catalog.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == label)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank for a listing's requirement label. Unknown labels rank 0.
pub fn rank_of_label(label: &str) -> u8 {
    EducationLevel::from_label(label.trim())
        .map(EducationLevel::rank)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_lookup() {
        for level in EducationLevel::ALL {
            assert_eq!(EducationLevel::from_label(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_serde_uses_display_label() {
        let json = serde_json::to_string(&EducationLevel::BscNursing).unwrap();
        assert_eq!(json, "\"B.Sc Nursing\"");
        let parsed: EducationLevel = serde_json::from_str("\"M.Tech\"").unwrap();
        assert_eq!(parsed, EducationLevel::Mtech);
    }

    #[test]
    fn test_hierarchy_is_monotonic() {
        assert!(EducationLevel::Iti.rank() < EducationLevel::Diploma.rank());
        assert!(EducationLevel::Diploma.rank() < EducationLevel::Bca.rank());
        assert!(EducationLevel::Bca.rank() < EducationLevel::Btech.rank());
        assert!(EducationLevel::Btech.rank() < EducationLevel::Mtech.rank());
        assert!(EducationLevel::Mba.rank() < EducationLevel::Ca.rank());
    }

    #[test]
    fn test_unknown_label_ranks_zero() {
        assert_eq!(rank_of_label("PhD"), 0);
        assert_eq!(rank_of_label(""), 0);
        assert_eq!(rank_of_label(" B.Tech "), 4);
    }
}
