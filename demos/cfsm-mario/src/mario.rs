//! Mario's instance data
//!
//! Shared by all variant states: which variant is active, lives, coins
//! and a short journal of what the states had to say.

use core::fmt::Write;

use heapless::{Deque, String};

use crate::config::MarioConfig;
use crate::events::MarioEvent;

/// Journal capacity; older entries are dropped first
pub const JOURNAL_LEN: usize = 16;

/// Capacity of a rendered status line
pub const STATUS_LEN: usize = 64;

/// Variants Mario can be in (one per state)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// Small (normal) Mario
    Small,
    /// Super (big) Mario
    Super,
    /// Fire Mario, throws fire balls
    Fire,
    /// Cape Mario, can fly
    Cape,
    /// Game over
    Dead,
}

impl Variant {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Small => "SmallMario",
            Variant::Super => "SuperMario",
            Variant::Fire => "FireMario",
            Variant::Cape => "CapeMario",
            Variant::Dead => "DeadMario",
        }
    }

    /// Check if no event can change this variant anymore
    pub fn is_terminal(&self) -> bool {
        matches!(self, Variant::Dead)
    }
}

/// Mario game data
#[derive(Debug, Clone)]
pub struct Mario {
    variant: Variant,
    lives: u32,
    coins: u32,
    config: MarioConfig,
    journal: Deque<&'static str, JOURNAL_LEN>,
}

impl Default for Mario {
    fn default() -> Self {
        Self::new(MarioConfig::default())
    }
}

impl Mario {
    /// Small Mario with the configured lives and no coins
    pub fn new(config: MarioConfig) -> Self {
        Self {
            variant: Variant::Small,
            lives: config.initial_lives,
            coins: 0,
            config,
            journal: Deque::new(),
        }
    }

    /// Active variant
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Lives left
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Coins not yet traded for a life
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Game rules in use
    pub fn config(&self) -> &MarioConfig {
        &self.config
    }

    /// Record the variant of the state just entered
    pub(crate) fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    /// Pay for an event; trades coins for a life once the threshold is exceeded
    pub(crate) fn update_coins(&mut self, event: MarioEvent) {
        let reward = match event {
            MarioEvent::Mushroom => self.config.mushroom_coins,
            MarioEvent::FireFlower => self.config.fire_flower_coins,
            MarioEvent::Feather => self.config.feather_coins,
            MarioEvent::Monster | MarioEvent::Quit | MarioEvent::Nop => 0,
        };
        self.coins = self.coins.saturating_add(reward);

        if self.coins > self.config.one_up_coins {
            self.announce("One life up!");
            self.lives = self.lives.saturating_add(1);
            self.coins -= self.config.one_up_coins;
        }
    }

    /// Take a life (never below zero) and return the lives left
    pub(crate) fn take_life(&mut self) -> u32 {
        if self.lives != 0 {
            self.lives -= 1;
            self.announce("Another life lost!");
        }
        self.lives
    }

    /// Record a message from the active state
    pub(crate) fn announce(&mut self, message: &'static str) {
        if self.journal.is_full() {
            self.journal.pop_front();
        }
        // Cannot fail, a slot was freed above
        let _ = self.journal.push_back(message);
    }

    /// Oldest journal entry, removed from the journal
    pub fn take_announcement(&mut self) -> Option<&'static str> {
        self.journal.pop_front()
    }

    /// Journal entries, oldest first
    pub fn announcements(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.journal.iter().copied()
    }

    /// Render `"Variant: SmallMario Lives: 3 Coins: 0"`
    pub fn status(&self) -> String<STATUS_LEN> {
        let mut line = String::new();
        // Longest possible line fits STATUS_LEN
        let _ = write!(
            line,
            "Variant: {} Lives: {} Coins: {}",
            self.variant.name(),
            self.lives,
            self.coins
        );
        line
    }
}
