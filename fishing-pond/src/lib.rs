use core::fmt;

use board::Board;
use rand::prelude::SliceRandom;
use rand::Rng;

pub mod board;
pub mod config;
pub mod error;
pub mod session;

pub use config::PondConfig;
pub use error::{ConfigError, StepError};
pub use session::{GameSession, SessionState, LOST_COUNT};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Sector {
  Empty,
  Fish,
  Boot,
}

impl Sector {
  pub fn is_empty(self) -> bool {
    matches!(self, Sector::Empty)
  }

  pub fn outcome(self) -> Outcome {
    match self {
      Sector::Empty => Outcome::NothingCaught,
      Sector::Fish => Outcome::FishCaught,
      Sector::Boot => Outcome::BootCaught,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Sector::Empty => "NONE",
      Sector::Fish => "FISH",
      Sector::Boot => "BOOT",
    }
  }
}

impl fmt::Display for Sector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Outcome {
  NothingCaught,
  FishCaught,
  BootCaught,
}

impl Outcome {
  pub fn ends_game(self) -> bool {
    !matches!(self, Outcome::NothingCaught)
  }
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Outcome::NothingCaught => write!(f, "Nothing is caught."),
      Outcome::FishCaught => write!(f, "A fish has been caught."),
      Outcome::BootCaught => write!(f, "The boot is caught."),
    }
  }
}

pub type Pond = Board<Sector>;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PondSetup {
  pond: Pond,
  fish: usize,
  boots: usize,
}

impl PondSetup {
  pub fn new(pond: Pond) -> Self {
    let fish = pond.iter().filter(|&&s| s == Sector::Fish).count();
    let boots = pond.iter().filter(|&&s| s == Sector::Boot).count();
    PondSetup { pond, fish, boots }
  }

  /// Builds a pond with the configured objects dropped into uniformly random,
  /// distinct sectors. Fish go in first, then boots.
  pub fn random<R: Rng + ?Sized>(config: &PondConfig, rng: &mut R) -> Self {
    let mut builder = PondSetupBuilder::new(config.sectors);
    builder.add_random(Sector::Fish, config.fish, rng);
    builder.add_random(Sector::Boot, config.boots, rng);
    Self::from(builder)
  }

  pub fn pond(&self) -> &Pond {
    &self.pond
  }

  pub fn sectors(&self) -> usize {
    self.pond.len()
  }

  pub fn fish(&self) -> usize {
    self.fish
  }

  pub fn boots(&self) -> usize {
    self.boots
  }

  pub fn count(&self, sector: Sector) -> usize {
    match sector {
      Sector::Fish => self.fish,
      Sector::Boot => self.boots,
      Sector::Empty => self.sectors() - self.fish - self.boots,
    }
  }

  pub fn resolve(&self, index: i64) -> Result<Outcome, StepError> {
    self
      .pond
      .get(index)
      .map(|sector| sector.outcome())
      .ok_or(StepError::InvalidIndex {
        index,
        sectors: self.sectors(),
      })
  }
}

impl From<PondSetupBuilder> for PondSetup {
  fn from(builder: PondSetupBuilder) -> Self {
    Self::new(builder.pond)
  }
}

impl fmt::Debug for PondSetup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Pond: [")?;
    for (pos, sector) in self.pond.enumerate() {
      if pos > 0 {
        write!(f, " ")?;
      }
      write!(f, "{}", sector)?;
    }
    write!(f, "]")
  }
}

pub struct PondSetupBuilder {
  pond: Pond,
}

impl PondSetupBuilder {
  pub fn new(sectors: usize) -> Self {
    Self {
      pond: Pond::new(sectors, Sector::Empty),
    }
  }

  pub fn place(&mut self, pos: usize, sector: Sector) {
    assert!(self.pond[pos].is_empty(), "sector {} is already taken", pos);
    self.pond[pos] = sector;
  }

  pub fn empty_positions(&self) -> Vec<usize> {
    self.pond.positions_where(|s| s.is_empty()).collect()
  }

  /// Drops `count` objects into distinct empty sectors. Panics when fewer
  /// than `count` empty sectors are left.
  pub fn add_random<R: Rng + ?Sized>(&mut self, sector: Sector, count: usize, rng: &mut R) {
    assert!(!sector.is_empty(), "only objects can be placed");
    let mut possible_positions = self.empty_positions();
    assert!(
      count <= possible_positions.len(),
      "cannot place {} {} into {} empty sectors",
      count,
      sector,
      possible_positions.len()
    );

    let (chosen, _) = possible_positions.partial_shuffle(rng, count);
    for &pos in chosen.iter() {
      self.pond[pos] = sector;
    }
    tracing::debug!(%sector, count, positions = ?chosen, "placed objects");
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;

  fn fixed_setup() -> PondSetup {
    use Sector::*;
    PondSetup::new([Empty, Empty, Boot, Empty, Empty, Fish, Boot, Empty, Boot].into_iter().collect())
  }

  #[test]
  fn counts_match_config_for_all_small_ponds() {
    for sectors in 1..=10 {
      for fish in 1..=sectors {
        for boots in 0..=(sectors - fish) {
          let config = PondConfig::new(sectors, fish, boots);
          for seed in 0..4 {
            let setup = PondSetup::random(&config, &mut StdRng::seed_from_u64(seed));
            let pond = setup.pond();
            assert_eq!(pond.len(), sectors);
            assert_eq!(pond.iter().filter(|&&s| s == Sector::Fish).count(), fish);
            assert_eq!(pond.iter().filter(|&&s| s == Sector::Boot).count(), boots);
            assert_eq!(pond.iter().filter(|s| s.is_empty()).count(), sectors - fish - boots);
          }
        }
      }
    }
  }

  #[test]
  fn default_pond_contents() {
    let setup = PondSetup::random(&PondConfig::default(), &mut StdRng::seed_from_u64(7));
    assert_eq!(
      (setup.count(Sector::Empty), setup.count(Sector::Fish), setup.count(Sector::Boot)),
      (5, 1, 3)
    );
  }

  #[test]
  fn same_seed_same_pond() {
    let config = PondConfig::default();
    let a = PondSetup::random(&config, &mut StdRng::seed_from_u64(42));
    let b = PondSetup::random(&config, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
  }

  #[test]
  fn fish_reaches_every_sector() {
    let config = PondConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut hits = [0u32; 9];
    for _ in 0..900 {
      let setup = PondSetup::random(&config, &mut rng);
      let fish = setup.pond().positions_where(|&s| s == Sector::Fish).next().unwrap();
      hits[fish] += 1;
    }
    assert!(hits.iter().all(|&h| h > 0), "fish never landed somewhere: {:?}", hits);
  }

  #[test]
  fn resolve_follows_sector_content() {
    let setup = fixed_setup();
    for pos in setup.pond().positions() {
      let expected = setup.pond()[pos].outcome();
      assert_eq!(setup.resolve(pos as i64), Ok(expected));
    }
    assert_eq!(setup.resolve(0), Ok(Outcome::NothingCaught));
    assert_eq!(setup.resolve(5), Ok(Outcome::FishCaught));
    assert_eq!(setup.resolve(2), Ok(Outcome::BootCaught));
  }

  #[test]
  fn resolve_does_not_mutate() {
    let setup = fixed_setup();
    let before = setup.clone();
    for pos in 0..9 {
      assert_eq!(setup.resolve(pos), setup.resolve(pos));
    }
    assert_eq!(setup, before);
  }

  #[test]
  fn resolve_rejects_out_of_range() {
    let setup = fixed_setup();
    assert_eq!(setup.resolve(-1), Err(StepError::InvalidIndex { index: -1, sectors: 9 }));
    assert_eq!(setup.resolve(9), Err(StepError::InvalidIndex { index: 9, sectors: 9 }));
  }

  #[test]
  fn debug_dump_lists_labels() {
    assert_eq!(
      format!("{:?}", fixed_setup()),
      "Pond: [NONE NONE BOOT NONE NONE FISH BOOT NONE BOOT]"
    );
  }

  #[test]
  fn outcome_messages() {
    assert_eq!(Outcome::NothingCaught.to_string(), "Nothing is caught.");
    assert_eq!(Outcome::FishCaught.to_string(), "A fish has been caught.");
    assert_eq!(Outcome::BootCaught.to_string(), "The boot is caught.");
    assert!(!Outcome::NothingCaught.ends_game());
    assert!(Outcome::FishCaught.ends_game());
    assert!(Outcome::BootCaught.ends_game());
  }

  #[test]
  fn builder_fills_around_placed_sectors() {
    let mut builder = PondSetupBuilder::new(4);
    builder.place(0, Sector::Fish);
    builder.place(3, Sector::Boot);
    assert_eq!(builder.empty_positions(), vec![1, 2]);
    builder.add_random(Sector::Boot, 2, &mut StdRng::seed_from_u64(3));
    let setup = PondSetup::from(builder);
    assert_eq!(setup.pond()[0], Sector::Fish);
    assert_eq!((setup.fish(), setup.boots()), (1, 3));
  }

  #[test]
  #[should_panic(expected = "cannot place 4 BOOT into 3 empty sectors")]
  fn overcrowding_panics() {
    let mut builder = PondSetupBuilder::new(4);
    builder.add_random(Sector::Fish, 1, &mut StdRng::seed_from_u64(0));
    builder.add_random(Sector::Boot, 4, &mut StdRng::seed_from_u64(0));
  }

  #[test]
  #[should_panic(expected = "already taken")]
  fn placing_twice_panics() {
    let mut builder = PondSetupBuilder::new(2);
    builder.place(1, Sector::Fish);
    builder.place(1, Sector::Boot);
  }
}
