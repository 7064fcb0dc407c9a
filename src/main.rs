//! Grid renderer (default binary).
//!
//! Builds one grid from the command line, places the requested points and
//! prints the result once.

use anyhow::Result;
use clap::Parser;

use tui_chart::cli::Args;
use tui_chart::core::{Grid, PlainDecorator};
use tui_chart::term::{AnsiDecorator, GridPrinter};

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = args.grid_config();
    let grid = if args.no_color {
        Grid::with_points(config, &args.points, &PlainDecorator)?
    } else {
        Grid::with_points(config, &args.points, &AnsiDecorator)?
    };

    #[cfg(feature = "tracing")]
    {
        let region = tui_chart::core::enclosing_region(args.points.iter().map(|p| p.point()));
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            points = args.points.len(),
            region = region.map(|r| r.as_str()).unwrap_or("none"),
            "grid ready"
        );
    }

    let mut printer = GridPrinter::new();
    if args.json {
        printer.print_line(&serde_json::to_string_pretty(&grid.snapshot())?)?;
    } else {
        printer.draw(&grid)?;
    }
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG`
fn init_tracing() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }
}
