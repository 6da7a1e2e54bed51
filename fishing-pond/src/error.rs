use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
  #[error("sector {index} is outside of the pond (valid sectors are 0..{sectors})")]
  InvalidIndex { index: i64, sectors: usize },
  #[error("the game is already over")]
  GameOver,
}

/// Reasons a pond configuration cannot be used to start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("the pond needs at least one sector")]
  NoSectors,
  #[error("the pond needs at least one fish")]
  NoFish,
  #[error("{fish} fish and {boots} boots do not fit into {sectors} sectors")]
  Overcrowded { fish: usize, boots: usize, sectors: usize },
}
