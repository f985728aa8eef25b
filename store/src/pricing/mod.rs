mod price_source;
mod pricing_error;

pub use price_source::{PriceSource, Random};
pub use pricing_error::PricingError;

use validator::{Validate, ValidationError};

pub const DEFAULT_MIN_PRICE: u32 = 0;
pub const DEFAULT_MAX_PRICE: u32 = 100;

/// Inclusive bounds of the prices a store may announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_bounds"))]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Result<Self, PricingError> {
        let range = PriceRange { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

fn validate_bounds(range: &PriceRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new("min_above_max"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{PriceRange, PricingError, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};

    #[test]
    fn test_price_range_new() {
        // When
        let result = PriceRange::new(10, 20);
        // Then
        assert!(
            matches!(result, Ok(r) if r.min() == 10 && r.max() == 20),
            "Should accept ordered bounds"
        );

        // When
        let result = PriceRange::new(5, 5);
        // Then
        assert!(matches!(result, Ok(_)), "Should accept a single price");

        // When
        let result = PriceRange::new(21, 20);
        // Then
        assert!(
            matches!(result, Err(PricingError::InvalidRange(_))),
            "Should reject a minimum above the maximum"
        );
    }

    #[test]
    fn test_price_range_default() {
        // When
        let result = PriceRange::default();

        // Then
        assert_eq!(DEFAULT_MIN_PRICE, result.min());
        assert_eq!(DEFAULT_MAX_PRICE, result.max());
    }

    #[test]
    fn test_price_range_contains_bounds() {
        // Given
        let range = PriceRange::new(10, 20).unwrap();

        // Then
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }
}
