use clap::Parser;
use mazesolver::search::{
    heuristics::HeuristicName,
    search_engines::{SearchEngineName, TracingObserver},
    Maze, Report, SearchConfig, Verbosity,
};
use std::{error::Error, path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Find a route from the start cell of a grid maze to one of its goals.
struct Cli {
    #[arg(help = "The maze file")]
    maze: PathBuf,
    #[arg(value_enum, help = "The search method to use", id = "METHOD")]
    method: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic for informed methods, overrides the config file",
        short = 'H',
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<HeuristicName>,
    #[arg(
        help = "A TOML file with search options",
        short = 'c',
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "The depth bound of the first iterative deepening round, \
        overrides the config file",
        long = "ids-initial-depth",
        id = "DEPTH"
    )]
    ids_initial_depth: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match solve(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn solve(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    if let Some(heuristic) = cli.heuristic {
        config.heuristic = heuristic;
    }
    if let Some(depth) = cli.ids_initial_depth {
        config.ids_initial_depth = depth;
    }
    info!(?config, method = cli.method.code(), "configured search");

    let maze = Maze::from_path(&cli.maze)?;
    let mut engine = cli.method.create(&config);
    let (result, statistics) =
        engine.search(maze.map(), maze.start(), maze.goals(), &mut TracingObserver);

    match result.path() {
        Some(path) => info!(path_length = path.len(), nodes = statistics.nodes(), "path found"),
        None => info!(nodes = statistics.nodes(), "no path found"),
    }

    let file = cli.maze.display().to_string();
    println!(
        "{}",
        Report::new(&file, cli.method, statistics.nodes(), result.path())
    );
    Ok(())
}
