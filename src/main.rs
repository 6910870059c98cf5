use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_hex::hex::cellset::board_side;
use lib_hex::hex::{notation, search};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A thin CLI over the solver: parse a position, run `search`, print the
/// winner and its proof footprint. Kept small and undocumented beyond
/// what's needed to exercise `lib_hex`.
#[derive(Parser, Debug)]
#[command(name = "hexsolve", about = "Decide a Hex position's forced winner and minimal proof")]
struct Options {
    /// A literal position: either a bare glyph stream or a "P:GGG...G" state string.
    #[arg(short, long, conflicts_with = "input")]
    state: Option<String>,

    /// Path to a file holding a position in the same format as --state.
    #[arg(short, long)]
    input: Option<std::path::PathBuf>,

    /// Seed for the move-exploration PRNG; fixed seeds make proofs reproducible.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Log level passed through to flexi_logger's env-or-str initializer.
    #[arg(long)]
    log_level: Option<String>,
}

fn cell_count(content: &str) -> usize {
    let body = content.find(':').map_or(content, |idx| &content[idx + 1..]);
    body.chars().filter(|c| !c.is_whitespace()).count()
}

fn solve<const N: u32>(content: &str, seed: u64) -> anyhow::Result<()> {
    let board = if content.contains(':') {
        notation::parse_state_string::<N>(content)?
    } else {
        notation::parse_board::<N>(content)?
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let (winner, witness) = search::search(&board, &mut rng);
    log::debug!("search completed, witness cost {}", witness.cost());

    let mut footprint: Vec<u32> = witness.body().iter().collect();
    footprint.sort();
    println!("winner: {winner:?}");
    println!("footprint: {footprint:?}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let options = Options::parse();
    let _logger = Logger::try_with_env_or_str(options.log_level.clone().unwrap_or_else(|| "info".into()))?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(match cfg!(debug_assertions) {
            true => AdaptiveFormat::WithThread,
            false => AdaptiveFormat::Default,
        })
        .start()?;

    let content = match (&options.state, &options.input) {
        (Some(s), _) => s.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => anyhow::bail!("one of --state or --input is required"),
    };

    let n = cell_count(&content) as u32;
    let side = board_side(n);
    if side * side != n || side < 1 || side > 13 {
        anyhow::bail!("position has {n} cells, which is not a square board side in [1,13]");
    }

    match side {
        1 => solve::<1>(&content, options.seed),
        2 => solve::<4>(&content, options.seed),
        3 => solve::<9>(&content, options.seed),
        4 => solve::<16>(&content, options.seed),
        5 => solve::<25>(&content, options.seed),
        6 => solve::<36>(&content, options.seed),
        7 => solve::<49>(&content, options.seed),
        8 => solve::<64>(&content, options.seed),
        9 => solve::<81>(&content, options.seed),
        10 => solve::<100>(&content, options.seed),
        11 => solve::<121>(&content, options.seed),
        12 => solve::<144>(&content, options.seed),
        13 => solve::<169>(&content, options.seed),
        _ => unreachable!("side was validated to lie in [1,13] above"),
    }
}
