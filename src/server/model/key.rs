//! License key domain models.
//!
//! Defines the persisted key record, its expiry sum type, the duration classes an
//! operator can request, and the read models returned by validation and key checks.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::server::error::license::LicenseError;

/// Milliseconds in one day, the unit every duration class is expressed in.
const DAY_MS: i64 = 86_400_000;

/// Persisted label for keys that never expire.
const LIFETIME_LABEL: &str = "lifetime";

/// When a key stops being valid.
///
/// Persisted as epoch milliseconds for `At` and as the string `"lifetime"` for
/// `Lifetime`, which keeps the document readable by the key registry's other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExpiryRepr", into = "ExpiryRepr")]
pub enum Expiry {
    /// Fixed instant after which the key is rejected.
    At(DateTime<Utc>),
    /// The key never expires.
    Lifetime,
}

impl Expiry {
    /// Checks whether the expiry instant lies strictly before `now`.
    ///
    /// # Arguments
    /// - `now` - Current time as seen by the caller
    ///
    /// # Returns
    /// - `true` - Fixed expiry that has passed
    /// - `false` - Lifetime key, or expiry not yet reached
    pub fn has_passed(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::At(at) => now > *at,
            Self::Lifetime => false,
        }
    }
}

/// Renders `Never` or an absolute UTC timestamp.
impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M:%S UTC")),
            Self::Lifetime => write!(f, "Never"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ExpiryRepr {
    Millis(i64),
    Label(String),
}

impl TryFrom<ExpiryRepr> for Expiry {
    type Error = String;

    fn try_from(repr: ExpiryRepr) -> Result<Self, Self::Error> {
        match repr {
            ExpiryRepr::Millis(ms) => DateTime::from_timestamp_millis(ms)
                .map(Expiry::At)
                .ok_or_else(|| format!("expiry timestamp {} is out of range", ms)),
            ExpiryRepr::Label(label) if label == LIFETIME_LABEL => Ok(Expiry::Lifetime),
            ExpiryRepr::Label(label) => Err(format!("unknown expiry label '{}'", label)),
        }
    }
}

impl From<Expiry> for ExpiryRepr {
    fn from(expiry: Expiry) -> Self {
        match expiry {
            Expiry::At(at) => ExpiryRepr::Millis(at.timestamp_millis()),
            Expiry::Lifetime => ExpiryRepr::Label(LIFETIME_LABEL.to_string()),
        }
    }
}

/// Duration an operator can request when generating a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationClass {
    Day,
    Week,
    Month,
    Year,
    Lifetime,
}

impl DurationClass {
    /// Every class, in the order offered to operators.
    pub const ALL: [DurationClass; 5] = [
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
        Self::Lifetime,
    ];

    /// Label used in command arguments and in generated key strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Lifetime => LIFETIME_LABEL,
        }
    }

    /// Length of the class, `None` for lifetime keys.
    ///
    /// Months are 30 days and years 365 days.
    pub fn duration(&self) -> Option<Duration> {
        let days = match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
            Self::Lifetime => return None,
        };

        Some(Duration::milliseconds(days * DAY_MS))
    }

    /// Computes the expiry of a key generated at `now`.
    pub fn expiry_from(&self, now: DateTime<Utc>) -> Expiry {
        match self.duration() {
            Some(duration) => Expiry::At(now + duration),
            None => Expiry::Lifetime,
        }
    }
}

impl fmt::Display for DurationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the lowercase labels `day`, `week`, `month`, `year` and `lifetime`.
impl FromStr for DurationClass {
    type Err = LicenseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == value)
            .ok_or_else(|| LicenseError::InvalidArgument(value.to_string()))
    }
}

/// A single issued key and its binding state.
///
/// `hwid` is set once by the first successful validation and never changes
/// afterwards; only revocation removes it, together with the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    /// Hardware id the key is bound to, `None` until first use.
    pub hwid: Option<String>,
    /// When the key stops being valid.
    pub expiry: Expiry,
}

impl KeyRecord {
    /// Creates an unbound record.
    pub fn unbound(expiry: Expiry) -> Self {
        Self { hwid: None, expiry }
    }

    pub fn is_bound(&self) -> bool {
        self.hwid.is_some()
    }
}

/// Read model returned by a key check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStatus {
    pub key: String,
    pub hwid: Option<String>,
    pub expiry: Expiry,
}

impl KeyStatus {
    pub fn from_record(key: impl Into<String>, record: KeyRecord) -> Self {
        Self {
            key: key.into(),
            hwid: record.hwid,
            expiry: record.expiry,
        }
    }
}

/// Successful result of a validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The key was unbound and is now bound to the supplied hardware id.
    BoundNow,
    /// The key was already bound to the supplied hardware id.
    AlreadyValid,
}

impl ValidationOutcome {
    /// Message returned to the validating client.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BoundNow => "HWID bound.",
            Self::AlreadyValid => "Key valid.",
        }
    }
}
