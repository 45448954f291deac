//! Entry category enum as the single source of truth for category labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed classification buckets for journal entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    FirmBuilding,
    PracticeBuilding,
    PersonalEminence,
    PersonalDevelopment,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Self; 4] = [
        Self::FirmBuilding,
        Self::PracticeBuilding,
        Self::PersonalEminence,
        Self::PersonalDevelopment,
    ];

    /// Display label, also used for persistence and CSV export.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirmBuilding => "Firm Building",
            Self::PracticeBuilding => "Practice Building",
            Self::PersonalEminence => "Personal Eminence",
            Self::PersonalDevelopment => "Personal Development",
        }
    }

    /// Kebab-case slug accepted on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::FirmBuilding => "firm-building",
            Self::PracticeBuilding => "practice-building",
            Self::PersonalEminence => "personal-eminence",
            Self::PersonalDevelopment => "personal-development",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s || category.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown category strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        for variant in Category::ALL {
            let s = variant.to_string();
            let parsed: Category = s.parse().expect("should parse");
            assert_eq!(parsed, variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn slugs_parse_case_insensitively() {
        let parsed: Category = "Personal-Eminence".parse().expect("should parse");
        assert_eq!(parsed, Category::PersonalEminence);

        let parsed: Category = "firm-building".parse().expect("should parse");
        assert_eq!(parsed, Category::FirmBuilding);
    }

    #[test]
    fn labels_are_case_sensitive() {
        let result: Result<Category, _> = "firm building".parse();
        assert!(result.is_err());
    }

    #[test]
    fn unknown_category_errors() {
        let err = "Networking".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: Networking");
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Category::PracticeBuilding).unwrap();
        assert_eq!(json, r#""Practice Building""#);

        let parsed: Category = serde_json::from_str(r#""Personal Development""#).unwrap();
        assert_eq!(parsed, Category::PersonalDevelopment);
    }

    #[test]
    fn canonical_order() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "Firm Building",
                "Practice Building",
                "Personal Eminence",
                "Personal Development"
            ]
        );
    }
}
