use anyhow::{Context, Result};
use clap::Parser;

use scoreboard::args::ParsedArgs;
use scoreboard::{Ranker, write_ranking};

/// Downstream closed stdout (e.g. piping to `head`).
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::BrokenPipe)
    })
}

fn run(args: &ParsedArgs) -> Result<()> {
    let config = args.ranker_config().context("failed to resolve configuration")?;
    tracing::debug!(
        dir = %config.scoreboard_dir.display(),
        ext = %config.file_extension,
        header_rows = config.header_row_count,
        rows = %config.row_basis,
        "ranking scoreboard"
    );

    let ranker = Ranker::new(config);
    let ranking = ranker.rank()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_ranking(&mut out, &ranking, &args.render_options())?;
    Ok(())
}

fn main() {
    let args = ParsedArgs::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    if let Err(err) = run(&args) {
        if is_broken_pipe(&err) {
            // Quietly exit when downstream closes the pipe.
            std::process::exit(0);
        }
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
