use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::{ColoredString, Colorize};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wishsim::{BannerSession, Catalog, PullResult, Rarity};

/// Simulator for pulls in Genshin Impact
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the banner to simulate. Use "list" to list banner names.
    #[arg(value_name = "BANNER NAME")]
    banner: String,

    /// Number of pulls to simulate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Current pity, as a comma-separated list of <pity type>:<pity count>
    #[arg(short, long, value_name = "X:Y,...")]
    pity: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    debug: bool,

    /// Remove color codes from output
    #[arg(long = "no-color", visible_alias = "nc")]
    no_color: bool,

    /// Random seed (optional)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory holding std_pools.json and event_banners.json
    #[arg(long, default_value = "data")]
    data: PathBuf,
}

/// No color for 3*, purple for 4*, yellow for 5*.
fn paint(pull: &PullResult<'_>) -> ColoredString {
    match pull.tier {
        Rarity::Three => pull.item.normal(),
        Rarity::Four => pull.item.purple(),
        Rarity::Five => pull.item.yellow(),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let catalog = Catalog::load(&args.data)
        .with_context(|| format!("loading banner data from {}", args.data.display()))?;

    if args.banner == "list" {
        for name in catalog.banner_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let banner = catalog.banner(&args.banner)?;
    let mut session = match &args.pity {
        Some(pity) => BannerSession::with_pity(&banner, pity)?,
        None => BannerSession::new(&banner),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!("pulling {} x{}", banner.name, args.count);

    for _ in 0..args.count {
        let pull = session.pull(&mut rng);
        println!("{}", paint(&pull));
    }
    info!("final pity: {}", session.pity());

    Ok(())
}
