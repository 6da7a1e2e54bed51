use core::fmt;

use crate::error::ConfigError;

pub const NUMBER_OF_SECTORS: usize = 9;
pub const NUMBER_OF_FISH: usize = 1;
pub const NUMBER_OF_BOOTS: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PondConfig {
  pub sectors: usize,
  pub fish: usize,
  pub boots: usize,
}

impl PondConfig {
  pub const fn new(sectors: usize, fish: usize, boots: usize) -> Self {
    Self { sectors, fish, boots }
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.sectors == 0 {
      return Err(ConfigError::NoSectors);
    }
    if self.fish == 0 {
      return Err(ConfigError::NoFish);
    }
    match self.fish.checked_add(self.boots) {
      Some(objects) if objects <= self.sectors => Ok(()),
      _ => Err(ConfigError::Overcrowded {
        fish: self.fish,
        boots: self.boots,
        sectors: self.sectors,
      }),
    }
  }

  /// Only meaningful for a configuration that passed [`PondConfig::validate`].
  pub fn empty_sectors(&self) -> usize {
    self.sectors.saturating_sub(self.fish + self.boots)
  }
}

impl Default for PondConfig {
  fn default() -> Self {
    Self::new(NUMBER_OF_SECTORS, NUMBER_OF_FISH, NUMBER_OF_BOOTS)
  }
}

impl fmt::Display for PondConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} sectors, {} fish, {} boots", self.sectors, self.fish, self.boots)
  }
}
