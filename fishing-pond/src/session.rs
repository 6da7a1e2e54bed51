use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{ConfigError, Outcome, PondConfig, PondSetup, StepError};

/// Count reported for a game that ended on a boot.
pub const LOST_COUNT: i64 = -1;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SessionState {
  Fishing,
  Won,
  Lost,
}

/// One game: the pond drawn at startup plus the running attempt tally.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameSession {
  setup: PondSetup,
  attempts: u32,
  state: SessionState,
}

impl GameSession {
  pub fn new(config: &PondConfig) -> Result<Self, ConfigError> {
    Self::with_rng(config, &mut StdRng::from_entropy())
  }

  pub fn with_seed(config: &PondConfig, seed: u64) -> Result<Self, ConfigError> {
    tracing::debug!(seed, "seeding pond");
    Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
  }

  pub fn with_rng<R: Rng + ?Sized>(config: &PondConfig, rng: &mut R) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::from(PondSetup::random(config, rng)))
  }

  pub fn setup(&self) -> &PondSetup {
    &self.setup
  }

  pub fn attempts(&self) -> u32 {
    self.attempts
  }

  pub fn state(&self) -> SessionState {
    self.state
  }

  pub fn is_over(&self) -> bool {
    self.state != SessionState::Fishing
  }

  /// Casts at `index`. Every resolved cast counts as one attempt; an invalid
  /// index is rejected without counting.
  pub fn cast(&mut self, index: i64) -> Result<Outcome, StepError> {
    if self.is_over() {
      return Err(StepError::GameOver);
    }

    let outcome = self.setup.resolve(index)?;
    self.attempts += 1;
    tracing::trace!(index, attempt = self.attempts, ?outcome, "cast resolved");

    match outcome {
      Outcome::NothingCaught => {}
      Outcome::FishCaught => {
        self.state = SessionState::Won;
        tracing::info!(attempts = self.attempts, "fish caught");
      }
      Outcome::BootCaught => {
        self.state = SessionState::Lost;
        tracing::info!(attempts = self.attempts, "boot caught");
      }
    }
    Ok(outcome)
  }

  /// The count to report once the game has ended: the number of attempts on
  /// a win, [`LOST_COUNT`] on a loss.
  pub fn final_count(&self) -> Option<i64> {
    match self.state {
      SessionState::Fishing => None,
      SessionState::Won => Some(i64::from(self.attempts)),
      SessionState::Lost => Some(LOST_COUNT),
    }
  }
}

impl From<PondSetup> for GameSession {
  fn from(setup: PondSetup) -> Self {
    Self {
      setup,
      attempts: 0,
      state: SessionState::Fishing,
    }
  }
}
