//! Console front end for the capture checker.
//!
//! Run with:
//! `cargo run -- play`
//! `cargo run -- random --black 6 --seed 1234 --board`

use std::io::{self, BufRead, Cursor, Write};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use capture_checker::board_state::board_state::DEFAULT_MAX_BLACK_PIECES;
use capture_checker::board_state::piece_types::WhitePieceKind;
use capture_checker::config::{RulesConfig, DEFAULT_DONE_KEYWORD};
use capture_checker::placement::placement_validator::PlacementValidator;
use capture_checker::session::console::{run_console_session, SessionOptions};
use capture_checker::utils::algebraic::{CoordinateCodec, STANDARD_FILES, STANDARD_RANKS};
use capture_checker::utils::random_scenario::random_scenario_lines;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct CommandArgs {
    #[command(subcommand)]
    mode: Option<Mode>,

    #[clap(flatten)]
    rules: RulesArg,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Place pieces interactively from stdin
    Play,
    /// Generate a random position and replay it through the validator
    Random(RandomArg),
}

#[derive(Debug, Clone, Args)]
struct RulesArg {
    /// Maximum number of black pieces
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_BLACK_PIECES)]
    max_black: usize,
    /// File letters, lowest file first
    #[arg(long, global = true, default_value = STANDARD_FILES)]
    files: String,
    /// Rank characters, lowest rank first
    #[arg(long, global = true, default_value = STANDARD_RANKS)]
    ranks: String,
    /// Print the board diagram before the capture list
    #[arg(long, global = true)]
    board: bool,
}

#[derive(Debug, Clone, Args)]
struct RandomArg {
    /// Number of black pieces to place
    #[arg(long, default_value_t = 4)]
    black: usize,
    /// White piece kind (random when omitted)
    #[arg(long, value_parser = parse_white_kind)]
    white: Option<WhitePieceKind>,
    /// RNG seed for a reproducible position
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_white_kind(s: &str) -> Result<WhitePieceKind, String> {
    s.parse().map_err(|err| format!("{err}"))
}

impl RulesArg {
    fn to_config(&self) -> anyhow::Result<RulesConfig> {
        let config = RulesConfig {
            codec: CoordinateCodec::new(&self.files, &self.ranks)?,
            white_kinds: WhitePieceKind::ALL.to_vec(),
            max_black_pieces: self.max_black,
            done_keyword: DEFAULT_DONE_KEYWORD.to_owned(),
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CommandArgs::parse();
    let config = args.rules.to_config().context("invalid rules")?;
    let options = SessionOptions {
        echo: false,
        show_board: args.rules.board,
    };

    match args.mode.unwrap_or(Mode::Play) {
        Mode::Play => {
            let stdin = io::stdin();
            run(config, stdin.lock(), options)
        }
        Mode::Random(arg) => {
            let seed = arg.seed.unwrap_or_else(rand::random);
            log::info!("random scenario seed {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            let lines = random_scenario_lines(&config, arg.black, arg.white, &mut rng)
                .context("cannot generate scenario")?;

            println!("Seed: {seed}");
            let script = lines.join("\n") + "\n";
            run(
                config,
                Cursor::new(script),
                SessionOptions {
                    echo: true,
                    ..options
                },
            )
        }
    }
}

fn run(config: RulesConfig, input: impl BufRead, options: SessionOptions) -> anyhow::Result<()> {
    let mut validator = PlacementValidator::new(config).context("invalid rules")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_console_session(&mut validator, input, &mut out, options)
        .context("placement session failed")?;
    out.flush()?;
    Ok(())
}
