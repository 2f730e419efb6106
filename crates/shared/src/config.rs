//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::{Currency, Locale};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Analytics thresholds and limits.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Locale and currency used when rendering monetary values.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DisplayConfig {
    /// Display locale.
    #[serde(default)]
    pub locale: Locale,
    /// Display currency.
    #[serde(default)]
    pub currency: Currency,
}

/// Named thresholds and limits used by the analytics core.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Spend percentage at which a category enters the warning band.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: Decimal,
    /// Spend percentage at which a category enters the critical band.
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: Decimal,
    /// Highest average spend percentage still scored as excellent.
    #[serde(default = "default_excellent_max")]
    pub excellent_max: Decimal,
    /// Highest average spend percentage still scored as good.
    #[serde(default = "default_good_max")]
    pub good_max: Decimal,
    /// Number of categories in the top-spending list.
    #[serde(default = "default_top_spending_count")]
    pub top_spending_count: usize,
    /// Number of transactions in the recent-activity list.
    #[serde(default = "default_recent_transactions_limit")]
    pub recent_transactions_limit: usize,
}

fn default_warning_threshold() -> Decimal {
    Decimal::from(80)
}

fn default_critical_threshold() -> Decimal {
    Decimal::ONE_HUNDRED
}

fn default_excellent_max() -> Decimal {
    Decimal::from(70)
}

fn default_good_max() -> Decimal {
    Decimal::from(85)
}

fn default_top_spending_count() -> usize {
    3
}

fn default_recent_transactions_limit() -> usize {
    5
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            warning_threshold: default_warning_threshold(),
            critical_threshold: default_critical_threshold(),
            excellent_max: default_excellent_max(),
            good_max: default_good_max(),
            top_spending_count: default_top_spending_count(),
            recent_transactions_limit: default_recent_transactions_limit(),
        }
    }
}

impl AnalyticsConfig {
    /// Checks that thresholds are ordered and limits are non-zero.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` describing the first violated rule.
    pub fn validate(&self) -> AppResult<()> {
        if self.warning_threshold <= Decimal::ZERO {
            return Err(AppError::Validation(
                "warning_threshold must be positive".into(),
            ));
        }
        if self.warning_threshold >= self.critical_threshold {
            return Err(AppError::Validation(format!(
                "warning_threshold ({}) must be below critical_threshold ({})",
                self.warning_threshold, self.critical_threshold
            )));
        }
        if self.excellent_max > self.good_max {
            return Err(AppError::Validation(format!(
                "excellent_max ({}) must not exceed good_max ({})",
                self.excellent_max, self.good_max
            )));
        }
        if self.top_spending_count == 0 {
            return Err(AppError::Validation(
                "top_spending_count must be at least 1".into(),
            ));
        }
        if self.recent_transactions_limit == 0 {
            return Err(AppError::Validation(
                "recent_transactions_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINBOARD").separator("__"))
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Checks every section for inconsistent settings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` describing the first violated rule.
    pub fn validate(&self) -> AppResult<()> {
        self.analytics.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.display.locale, Locale::FrFr);
        assert_eq!(config.display.currency, Currency::Eur);
        assert_eq!(config.analytics.warning_threshold, dec!(80));
        assert_eq!(config.analytics.critical_threshold, dec!(100));
        assert_eq!(config.analytics.excellent_max, dec!(70));
        assert_eq!(config.analytics.good_max, dec!(85));
        assert_eq!(config.analytics.top_spending_count, 3);
        assert_eq!(config.analytics.recent_transactions_limit, 5);
        assert!(config.analytics.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_bands() {
        let analytics = AnalyticsConfig {
            warning_threshold: dec!(100),
            critical_threshold: dec!(80),
            ..AnalyticsConfig::default()
        };
        assert!(matches!(analytics.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_health_breakpoints() {
        let analytics = AnalyticsConfig {
            excellent_max: dec!(90),
            ..AnalyticsConfig::default()
        };
        assert!(matches!(analytics.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_app_config_validate_checks_analytics() {
        assert!(AppConfig::default().validate().is_ok());

        let config = AppConfig {
            analytics: AnalyticsConfig {
                warning_threshold: Decimal::ZERO,
                ..AnalyticsConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let analytics = AnalyticsConfig {
            top_spending_count: 0,
            ..AnalyticsConfig::default()
        };
        assert!(analytics.validate().is_err());

        let analytics = AnalyticsConfig {
            recent_transactions_limit: 0,
            ..AnalyticsConfig::default()
        };
        assert!(analytics.validate().is_err());
    }

    #[test]
    fn test_load_uses_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "FINBOARD__DISPLAY__LOCALE",
                "FINBOARD__ANALYTICS__TOP_SPENDING_COUNT",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.display.locale, Locale::FrFr);
                assert_eq!(config.analytics.top_spending_count, 3);
            },
        );
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("FINBOARD__DISPLAY__LOCALE", Some("en-US")),
                ("FINBOARD__DISPLAY__CURRENCY", Some("USD")),
                ("FINBOARD__ANALYTICS__TOP_SPENDING_COUNT", Some("5")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.display.locale, Locale::EnUs);
                assert_eq!(config.display.currency, Currency::Usd);
                assert_eq!(config.analytics.top_spending_count, 5);
            },
        );
    }

    #[test]
    fn test_load_rejects_invalid_overrides() {
        temp_env::with_var("FINBOARD__ANALYTICS__TOP_SPENDING_COUNT", Some("0"), || {
            assert!(matches!(AppConfig::load(), Err(AppError::Validation(_))));
        });
    }
}
