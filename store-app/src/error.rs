use store::pricing::PricingError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] ValidationErrors),
    #[error(transparent)]
    Pricing(#[from] PricingError),
}
