use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use video_player::{PlayerConfig, Shell, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Play, search, flag and organise videos from a fixed catalog", long_about = None)]
struct Args {
    /// Catalog file, one `title | id | tag1, tag2` entry per line (default: bundled catalog)
    #[arg(short = 'c', long)]
    catalog: Option<String>,

    /// Seed for PLAY_RANDOM, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new();

    // Expand ~ in the catalog path
    if let Some(catalog) = &args.catalog {
        let path = shellexpand::tilde(catalog);
        config = config.with_catalog(PathBuf::from(path.as_ref()));
    }
    if let Some(seed) = args.seed {
        log::info!("Random playback seeded with {}", seed);
        config = config.with_seed(seed);
    }

    let catalog = config.load_catalog()?;
    log::info!("Catalog ready: {} videos", catalog.video_count());

    let player = VideoPlayer::new(&catalog, config.picker());
    let mut shell = Shell::new(player);

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("Hello and welcome to the video player, what would you like to do?");
        println!("Enter HELP for list of available commands or EXIT to terminate.");
        shell = shell.with_prompt("YT> ");
    }

    shell.run(stdin.lock(), io::stdout().lock())?;
    log::info!("Goodbye");
    Ok(())
}
