use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use store::pricing::PriceRange;
use validator::Validate;

use crate::error::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    pub price_min: u32,
    pub price_max: u32,
    pub businessman_min_price: u32,
    pub student_budget: u32,
    #[validate(range(max = 1000))]
    pub deliveries_before_unsubscribe: u32,
    #[validate(range(max = 1000))]
    pub deliveries_after_unsubscribe: u32,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        app_config.price_range()?;
        Ok(app_config)
    }

    pub fn price_range(&self) -> Result<PriceRange, AppError> {
        PriceRange::new(self.price_min, self.price_max).map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;

    use super::AppConfig;

    #[test]
    fn test_new() {
        temp_env::with_var_unset("APP_PRICE_MAX", || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(_)),
                "By default, it should return a valid config"
            );
        });

        let budget = 55u32;
        temp_env::with_var("APP_STUDENT_BUDGET", Some(budget.to_string()), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.student_budget == budget),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_PRICE_MAX", Some("invalid"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Should return error when config is not valid"
            )
        });
    }

    #[test]
    fn test_new_defaults() {
        temp_env::with_var_unset("APP_SEED", || {
            // When
            let result = AppConfig::new().unwrap();

            // Then
            assert_eq!(0, result.price_min);
            assert_eq!(100, result.price_max);
            assert_eq!(20, result.businessman_min_price);
            assert_eq!(40, result.student_budget);
            assert_eq!(2, result.deliveries_before_unsubscribe);
            assert_eq!(1, result.deliveries_after_unsubscribe);
            assert_eq!(None, result.seed);
        });
    }

    #[test]
    fn test_new_should_reject_inverted_price_range() {
        temp_env::with_vars(
            [("APP_PRICE_MIN", Some("80")), ("APP_PRICE_MAX", Some("10"))],
            || {
                let result = AppConfig::new();
                assert!(
                    matches!(result, Err(AppError::Pricing(_))),
                    "Should reject a minimum price above the maximum"
                )
            },
        );
    }

    #[test]
    fn test_new_should_validate_delivery_counts() {
        temp_env::with_var("APP_DELIVERIES_AFTER_UNSUBSCRIBE", Some("5000"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::InvalidSettings(_))),
                "Should reject too many deliveries"
            )
        });
    }

    #[test]
    fn test_new_should_read_seed() {
        temp_env::with_var("APP_SEED", Some("42"), || {
            let result = AppConfig::new();
            assert!(matches!(result, Ok(x) if x.seed == Some(42)));
        });
    }
}
