use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid price range: {0}")]
    InvalidRange(#[from] ValidationErrors),
}
