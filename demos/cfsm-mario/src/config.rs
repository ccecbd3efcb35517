//! Game rules configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rewards and starting values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarioConfig {
    /// Lives at game start
    pub initial_lives: u32,
    /// Coins awarded for a mushroom
    pub mushroom_coins: u32,
    /// Coins awarded for a fire flower
    pub fire_flower_coins: u32,
    /// Coins awarded for a feather
    pub feather_coins: u32,
    /// Coin count that must be exceeded to trade coins for a life
    pub one_up_coins: u32,
}

impl Default for MarioConfig {
    fn default() -> Self {
        Self {
            initial_lives: 3,
            mushroom_coins: 100,
            fire_flower_coins: 200,
            feather_coins: 300,
            one_up_coins: 5000,
        }
    }
}
