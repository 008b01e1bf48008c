use rand::Rng;

use tana_core::currency::round2;
use tana_core::repository::PriceJitterProvider;

/// Uniform random price perturbation simulating dynamic pricing:
/// `base * (1 + U(-band, band))`, rounded to cents. Placeholder for a real
/// pricing service.
pub struct UniformJitter {
    band: f64,
}

impl UniformJitter {
    pub fn new(band: f64) -> Self {
        Self { band }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl PriceJitterProvider for UniformJitter {
    fn jittered_price(&self, base_usd: f64) -> f64 {
        if self.band == 0.0 {
            return round2(base_usd);
        }
        let mut rng = rand::thread_rng();
        let factor = 1.0 + rng.gen_range(-self.band..=self.band);
        round2(base_usd * factor)
    }
}

/// Pass-through used by tests that need deterministic prices.
pub struct NoJitter;

impl PriceJitterProvider for NoJitter {
    fn jittered_price(&self, base_usd: f64) -> f64 {
        round2(base_usd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_within_the_band() {
        let jitter = UniformJitter::new(0.1);
        for _ in 0..500 {
            let price = jitter.jittered_price(50.0);
            assert!((45.0..=55.0).contains(&price), "price {price} out of band");
        }
    }

    #[test]
    fn no_jitter_passes_through_rounded() {
        assert_eq!(NoJitter.jittered_price(50.0), 50.0);
        assert_eq!(NoJitter.jittered_price(19.999), 20.0);
    }
}
