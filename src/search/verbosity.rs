/// How much the binary logs to stderr.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[clap(help = "Only errors.")]
    Silent,
    #[default]
    #[clap(help = "Search start, finish and results.")]
    Normal,
    #[clap(help = "Also deepening rounds, multi-goal legs and found paths.")]
    Verbose,
    #[clap(help = "Also every cell expansion.")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
