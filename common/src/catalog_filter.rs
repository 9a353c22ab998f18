//! Shared catalog filter criteria and sort order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


/// Everything the shop sidebar and toolbar can set. A criterion left at its
/// default (`None`, empty string, empty set, `false`) places no constraint
/// on the result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogFilter {
    /// Free-text search over name and location. Empty matches everything.
    pub search: String,
    /// Region token, matched as a case-insensitive substring of the location.
    pub region: Option<String>,
    pub price_range: Option<PriceRange>,
    pub duration: Option<DurationBucket>,
    pub group_size: Option<GroupSizeBucket>,
    /// Keep only records rated at least this many stars.
    pub min_rating: Option<u32>,
    /// A record passes when any of its included items contains any of these
    /// (case-insensitive substring).
    pub included_items: BTreeSet<String>,
    pub only_favorites: bool,
    pub sort_order: SortOrder,
}

impl CatalogFilter {
    pub fn favorites_only() -> Self {
        Self {
            only_favorites: true,
            ..Default::default()
        }
    }
}

/// Inclusive price bounds, in whole currency units per person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Trip length buckets offered by the sidebar. Bounds are inclusive on both
/// ends: <=3, 4..=7, >=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationBucket {
    UpToThreeDays,
    FourToSevenDays,
    EightPlusDays,
}

impl DurationBucket {
    pub fn contains(&self, duration_days: u32) -> bool {
        match self {
            Self::UpToThreeDays => duration_days <= 3,
            Self::FourToSevenDays => (4..=7).contains(&duration_days),
            Self::EightPlusDays => duration_days >= 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpToThreeDays => "Up to 3 days",
            Self::FourToSevenDays => "4-7 days",
            Self::EightPlusDays => "8+ days",
        }
    }

    pub const ALL: [DurationBucket; 3] = [
        Self::UpToThreeDays,
        Self::FourToSevenDays,
        Self::EightPlusDays,
    ];

    /// Stable key for select options and URL round-trips.
    pub fn key(&self) -> &'static str {
        match self {
            Self::UpToThreeDays => "upto3",
            Self::FourToSevenDays => "4to7",
            Self::EightPlusDays => "8plus",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }
}

/// Group size buckets, each keyed to a representative head count.
///
/// The family bucket checks both bounds while the other two only check the
/// upper capacity; the sidebar options were tuned to the catalog this way,
/// so the asymmetry is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupSizeBucket {
    /// 2 people.
    Couple,
    /// Up to 4 people.
    Family,
    /// 8 or more people.
    Group,
}

impl GroupSizeBucket {
    pub fn accommodates(&self, min_people: u32, max_people: u32) -> bool {
        match self {
            Self::Couple => max_people >= 2,
            Self::Family => max_people >= 4 && min_people <= 4,
            Self::Group => max_people >= 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Couple => "Couple (2 people)",
            Self::Family => "Family (up to 4 people)",
            Self::Group => "Group (8+ people)",
        }
    }

    pub const ALL: [GroupSizeBucket; 3] = [Self::Couple, Self::Family, Self::Group];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Couple => "2",
            Self::Family => "4",
            Self::Group => "8",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    NameAsc,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    DurationAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        Self::NameAsc,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::RatingDesc,
        Self::DurationAsc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NameAsc => "Name A-Z",
            Self::PriceAsc => "Lowest price",
            Self::PriceDesc => "Highest price",
            Self::RatingDesc => "Best rated",
            Self::DurationAsc => "Duration",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::NameAsc => "name",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::RatingDesc => "rating-desc",
            Self::DurationAsc => "duration-asc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}
