mod seeds;

pub use seeds::*;

/// Pathway configuration
#[derive(Default, Serialize, Deserialize, Clone)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
pub struct Config {
    /// Content seeded into newly created accounts
    pub seeds: Seeds,
}
