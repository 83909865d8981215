use serde::{Deserialize, Serialize};

/// Rule thresholds and seeding density for the ecosystem variant.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EcosystemConfig {
    pub sheep_max_age: u32,
    pub sheep_max_hunger: u32,
    pub wolf_max_age: u32,
    pub wolf_max_hunger: u32,
    /// Probability that a cell starts as Grass.
    pub grass_density: f64,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            sheep_max_age: 50,
            sheep_max_hunger: 5,
            wolf_max_age: 60,
            wolf_max_hunger: 10,
            grass_density: 0.25,
        }
    }
}

/// Seeding parameters for the Life variant; the B3/S23 rule itself is fixed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LifeConfig {
    /// Probability that a cell starts Alive in the random soup.
    pub soup_density: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self { soup_density: 0.3 }
    }
}
