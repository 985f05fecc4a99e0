//! Fixed sample datasets rendered by the dashboard in place of live data.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::CategoryValue;
use crate::error::DashboardResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenreEntry {
    pub name: &'static str,
    pub share: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityPoint {
    pub time: &'static str,
    pub audience: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubscriptionTier {
    pub package: &'static str,
    pub subscribers: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub amount: Decimal,
}

/// One row of the user table. Every cell is display text, e.g. a last login
/// of `Today` or a phone number of `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub index: u32,
    pub username: &'static str,
    pub email: &'static str,
    pub package: &'static str,
    pub status: &'static str,
    pub last_login: &'static str,
    pub phone: &'static str,
}

/// Headline shown above the revenue chart.
pub const REVENUE_HEADLINE: &str = "Rp 15,590,000";

pub const GENRES: [GenreEntry; 5] = [
    GenreEntry {
        name: "Action",
        share: 70.0,
        color: "#455EFF",
    },
    GenreEntry {
        name: "Comedy",
        share: 30.0,
        color: "#581E9D",
    },
    GenreEntry {
        name: "Drama",
        share: 20.0,
        color: "#878EFE",
    },
    GenreEntry {
        name: "Horror",
        share: 10.0,
        color: "#7159FE",
    },
    GenreEntry {
        name: "Documentary",
        share: 20.0,
        color: "#0E00A2",
    },
];

pub const HOURLY_ACTIVITY: [ActivityPoint; 13] = [
    ActivityPoint { time: "00.00", audience: 2_500 },
    ActivityPoint { time: "02.00", audience: 3_500 },
    ActivityPoint { time: "04.00", audience: 5_000 },
    ActivityPoint { time: "06.00", audience: 2_800 },
    ActivityPoint { time: "08.00", audience: 3_000 },
    ActivityPoint { time: "10.00", audience: 10_000 },
    ActivityPoint { time: "12.00", audience: 7_500 },
    ActivityPoint { time: "14.00", audience: 4_000 },
    ActivityPoint { time: "16.00", audience: 2_000 },
    ActivityPoint { time: "18.00", audience: 5_000 },
    ActivityPoint { time: "20.00", audience: 3_500 },
    ActivityPoint { time: "22.00", audience: 2_500 },
    ActivityPoint { time: "23.00", audience: 6_000 },
];

pub const SUBSCRIPTION_TIERS: [SubscriptionTier; 5] = [
    SubscriptionTier { package: "ULO LITE", subscribers: 5_000 },
    SubscriptionTier { package: "ULO PLUS", subscribers: 10_000 },
    SubscriptionTier { package: "ULO MAX", subscribers: 15_000 },
    SubscriptionTier { package: "ULO FAMILY", subscribers: 20_000 },
    SubscriptionTier { package: "ULO INFINITY", subscribers: 25_000 },
];

pub const POPULAR_FILMS: [&str; 5] = [
    "Titanic",
    "One Piece",
    "Extraction 2",
    "The Angry Birds Movie 2",
    "The Architecture of Love",
];

pub const USERS: [UserRow; 1] = [UserRow {
    index: 1,
    username: "Sienna00",
    email: "sienna@gmail.com",
    package: "Ulo Plus",
    status: "Active",
    last_login: "Today",
    phone: "-",
}];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "March", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

const MONTHLY_REVENUE: [i64; 12] = [50, 75, 100, 85, 120, 50, 75, 100, 85, 120, 85, 120];

/// Monthly revenue, January to December.
#[must_use]
pub fn monthly_revenue() -> Vec<RevenuePoint> {
    MONTHS
        .into_iter()
        .zip(MONTHLY_REVENUE)
        .map(|(month, amount)| RevenuePoint {
            month,
            amount: Decimal::from(amount),
        })
        .collect()
}

pub fn revenue_series() -> DashboardResult<Vec<CategoryValue>> {
    monthly_revenue()
        .into_iter()
        .map(|point| CategoryValue::from_decimal(point.month, point.amount))
        .collect()
}

#[must_use]
pub fn activity_series() -> Vec<CategoryValue> {
    HOURLY_ACTIVITY
        .iter()
        .map(|point| CategoryValue::new(point.time, f64::from(point.audience)))
        .collect()
}

#[must_use]
pub fn subscription_series() -> Vec<CategoryValue> {
    SUBSCRIPTION_TIERS
        .iter()
        .map(|tier| CategoryValue::new(tier.package, f64::from(tier.subscribers)))
        .collect()
}
