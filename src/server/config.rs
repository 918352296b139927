use entity::proficiency_score::DiscountTier;

use crate::server::error::config::ConfigError;

/// One rung of the discount ladder: the minimum overall score required to
/// enter the tier and the premium discount it grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierStep {
    pub min_score: i32,
    pub discount: i32,
}

/// Score thresholds that map a pilot's overall proficiency score onto a
/// premium discount tier.
///
/// The schedule must be monotonic: strictly increasing minimum scores and
/// non-decreasing discounts from bronze to gold. A schedule that violates
/// this is rejected at startup rather than silently producing a pilot whose
/// score went up while their discount went down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierSchedule {
    pub bronze: TierStep,
    pub silver: TierStep,
    pub gold: TierStep,
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self {
            bronze: TierStep {
                min_score: 60,
                discount: 5,
            },
            silver: TierStep {
                min_score: 75,
                discount: 10,
            },
            gold: TierStep {
                min_score: 90,
                discount: 15,
            },
        }
    }
}

impl TierSchedule {
    /// Reads tier overrides from `TIER_{BRONZE,SILVER,GOLD}_{MIN_SCORE,DISCOUNT}`,
    /// falling back to the default schedule for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        let schedule = Self {
            bronze: TierStep {
                min_score: env_i32("TIER_BRONZE_MIN_SCORE", default.bronze.min_score)?,
                discount: env_i32("TIER_BRONZE_DISCOUNT", default.bronze.discount)?,
            },
            silver: TierStep {
                min_score: env_i32("TIER_SILVER_MIN_SCORE", default.silver.min_score)?,
                discount: env_i32("TIER_SILVER_DISCOUNT", default.silver.discount)?,
            },
            gold: TierStep {
                min_score: env_i32("TIER_GOLD_MIN_SCORE", default.gold.min_score)?,
                discount: env_i32("TIER_GOLD_DISCOUNT", default.gold.discount)?,
            },
        };

        schedule.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.bronze.min_score >= self.silver.min_score
            || self.silver.min_score >= self.gold.min_score
        {
            return Err(ConfigError::InvalidTierSchedule(
                "minimum scores must strictly increase from bronze to gold".to_string(),
            ));
        }

        if self.bronze.discount < 0
            || self.bronze.discount > self.silver.discount
            || self.silver.discount > self.gold.discount
        {
            return Err(ConfigError::InvalidTierSchedule(
                "discounts must not decrease from bronze to gold".to_string(),
            ));
        }

        Ok(self)
    }

    /// The tier and discount percentage earned by an overall score.
    pub fn tier_for(&self, overall_score: i32) -> (DiscountTier, i32) {
        if overall_score >= self.gold.min_score {
            (DiscountTier::Gold, self.gold.discount)
        } else if overall_score >= self.silver.min_score {
            (DiscountTier::Silver, self.silver.discount)
        } else if overall_score >= self.bronze.min_score {
            (DiscountTier::Bronze, self.bronze.discount)
        } else {
            (DiscountTier::None, 0)
        }
    }
}

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub tiers: TierSchedule,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_u16("PORT", 8080)?,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            tiers: TierSchedule::from_env()?,
        })
    }
}

fn env_i32(var: &str, default: i32) -> Result<i32, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected an integer, got {value:?}"),
        }),
        Err(_) => Ok(default),
    }
}

fn env_u16(var: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a port number, got {value:?}"),
        }),
        Err(_) => Ok(default),
    }
}
