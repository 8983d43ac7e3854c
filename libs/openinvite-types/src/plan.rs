use serde::{Deserialize, Deserializer, Serialize};

/// Subscription plan assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    LifetimePro,
}

impl Plan {
    /// Returns true for any paid plan (monthly/yearly or lifetime).
    pub fn is_pro(&self) -> bool {
        matches!(self, Self::Pro | Self::LifetimePro)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Pro => "PRO",
            Self::LifetimePro => "LIFETIME_PRO",
        }
    }

    /// Lenient parse used at the API boundary.
    ///
    /// Accepts any casing plus the billing aliases `premium` and `lifetime`.
    /// Anything unrecognized is `Free`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().replace(['-', ' '], "_").as_str() {
            "PRO" | "PREMIUM" => Self::Pro,
            "LIFETIME_PRO" | "LIFETIME" | "LIFETIME_PREMIUM" => Self::LifetimePro,
            _ => Self::Free,
        }
    }
}

impl<'de> Deserialize<'de> for Plan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Plan::from_raw).unwrap_or_default())
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
