//! The cross-screen session record.
//!
//! Exactly one screen owns the record at any instant: it enters through
//! `Screen::startup` and leaves through `Screen::cleanup`, both by value.
//! The runtime itself never reads or writes the fields; what resets and
//! when is policy owned by the concrete screens.

use crate::time::Ticks;

/// Selectable player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCharacter {
    Scout,
    Warden,
}

impl PlayerCharacter {
    /// The other selectable character.
    pub fn alternate(self) -> Self {
        match self {
            PlayerCharacter::Scout => PlayerCharacter::Warden,
            PlayerCharacter::Warden => PlayerCharacter::Scout,
        }
    }
}

impl Default for PlayerCharacter {
    fn default() -> Self {
        PlayerCharacter::Scout
    }
}

/// Persistent game statistics carried between screens.
///
/// A structured record instead of an open map: the fields are the shape
/// check. Anything genuinely dynamic goes through [`Extras`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionData {
    /// Coin total for the current run.
    pub coins: u32,
    /// Score for the current run.
    pub score: u32,
    /// Lives remaining.
    pub lives: u32,
    /// Best score seen this session. Survives a new-run reset.
    pub top_score: u32,
    /// Running game time, written by the active screen.
    pub elapsed: Ticks,
    /// Current level number.
    pub level: u32,
    /// Active player identity. Survives a new-run reset.
    pub player: PlayerCharacter,
    /// Typed side channel for screen-specific extensions.
    pub extras: Extras,
}

impl SessionData {
    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_LEVEL: u32 = 1;

    /// Restore the run statistics to their defaults.
    ///
    /// Keeps `top_score` and `player`: starting a new run neither forgets
    /// the best score nor deselects the character.
    pub fn reset_for_new_run(&mut self) {
        self.coins = 0;
        self.score = 0;
        self.lives = Self::STARTING_LIVES;
        self.elapsed = Ticks::ZERO;
        self.level = Self::STARTING_LEVEL;
    }

    /// Fold the current score into the best score.
    pub fn record_run_score(&mut self) {
        self.top_score = self.top_score.max(self.score);
    }
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            coins: 0,
            score: 0,
            lives: Self::STARTING_LIVES,
            top_score: 0,
            elapsed: Ticks::ZERO,
            level: Self::STARTING_LEVEL,
            player: PlayerCharacter::default(),
            extras: Extras::default(),
        }
    }
}

/// Key of one [`Extras`] entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtraKey {
    /// Duration of the most recently finished run.
    LastRunDuration,
    /// Number of continues used this session.
    ContinuesUsed,
    /// Whether the debug overlay is enabled.
    DebugOverlay,
}

/// Value of one [`Extras`] entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtraValue {
    Count(u32),
    Duration(Ticks),
    Flag(bool),
}

/// Tagged side channel for data outside the fixed session fields.
///
/// A short association list keyed by [`ExtraKey`]; at most one entry per
/// key. This is the escape hatch the record offers instead of a
/// free-form map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extras {
    entries: Vec<(ExtraKey, ExtraValue)>,
}

impl Extras {
    /// Insert or replace the entry for `key`.
    pub fn set(&mut self, key: ExtraKey, value: ExtraValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: ExtraKey) -> Option<ExtraValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Remove and return the entry for `key`.
    pub fn take(&mut self, key: ExtraKey) -> Option<ExtraValue> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
