use rand::Rng;

use super::PriceRange;

pub trait PriceSource {
    fn next_price(&mut self, range: &PriceRange) -> u32;
}

/// Draws prices uniformly over the whole inclusive range.
pub struct Random<'a, T>
where
    T: Rng,
{
    rng: &'a mut T,
}

impl<'a, T> Random<'a, T>
where
    T: Rng,
{
    pub fn new(rng: &'a mut T) -> Self {
        Random { rng }
    }
}

impl<'a, T> PriceSource for Random<'a, T>
where
    T: Rng,
{
    fn next_price(&mut self, range: &PriceRange) -> u32 {
        self.rng.gen_range(range.min()..=range.max())
    }
}
