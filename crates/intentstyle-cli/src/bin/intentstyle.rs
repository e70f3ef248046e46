use clap::Parser;
use intentstyle_cli::{init_tracing, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
