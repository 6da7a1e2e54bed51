use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use fishing_pond::config::{NUMBER_OF_BOOTS, NUMBER_OF_FISH, NUMBER_OF_SECTORS};
use fishing_pond::{GameSession, PondConfig};
use tracing_subscriber::EnvFilter;

/// Cast into the pond until you catch the fish. Catch a boot and you lose.
#[derive(Parser, Debug)]
#[command(name = "fishing", version)]
struct Args {
  /// Number of sectors in the pond
  #[arg(long, default_value_t = NUMBER_OF_SECTORS)]
  sectors: usize,

  /// Number of fish hidden in the pond
  #[arg(long, default_value_t = NUMBER_OF_FISH)]
  fish: usize,

  /// Number of boots hidden in the pond
  #[arg(long, default_value_t = NUMBER_OF_BOOTS)]
  boots: usize,

  /// Seed for a reproducible pond
  #[arg(long)]
  seed: Option<u64>,

  /// Print the pond before the first cast
  #[arg(long)]
  show_pond: bool,
}

impl Args {
  fn config(&self) -> PondConfig {
    PondConfig::new(self.sectors, self.fish, self.boots)
  }
}

fn init_tracing() {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(io::stderr)
    .init();
}

fn make_session(args: &Args) -> anyhow::Result<GameSession> {
  let config = args.config();
  let session = match args.seed {
    Some(seed) => GameSession::with_seed(&config, seed),
    None => GameSession::new(&config),
  };
  let session = session.with_context(|| format!("cannot set up a pond with {}", config))?;
  tracing::debug!(%config, seeded = args.seed.is_some(), "pond ready");
  Ok(session)
}

fn read_index(input: &mut impl BufRead) -> anyhow::Result<i64> {
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    anyhow::bail!("input ended before the game did");
  }
  let line = line.trim();
  line.parse().with_context(|| format!("{:?} is not a sector index", line))
}

fn play(session: &mut GameSession, input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<i64> {
  while !session.is_over() {
    write!(output, "Enter the sector index: ")?;
    output.flush()?;

    let index = read_index(input)?;
    let outcome = session.cast(index)?;
    writeln!(output, "{}", outcome)?;
  }

  session.final_count().context("game ended without a result")
}

fn report(count: i64, output: &mut impl Write) -> io::Result<()> {
  writeln!(output, "Count = {}", count)?;
  writeln!(output)?;
  writeln!(output, "----------------------------------------------------------")?;
  writeln!(output, "End of program.")
}

fn main() -> anyhow::Result<()> {
  init_tracing();
  let args = Args::parse();
  let mut session = make_session(&args)?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut input = stdin.lock();
  let mut output = stdout.lock();

  if args.show_pond {
    writeln!(output, "{:?}", session.setup())?;
  }

  match play(&mut session, &mut input, &mut output) {
    Ok(count) => Ok(report(count, &mut output)?),
    Err(err) => {
      writeln!(output)?;
      writeln!(output, "An unidentified error.")?;
      Err(err)
    }
  }
}
