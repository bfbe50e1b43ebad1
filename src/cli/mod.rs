use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod pack;

#[derive(Parser)]
#[command(
    name = "potext",
    version,
    about = "Pot translation plugin packager"
)]
pub struct Cli {
    /// Plugin source directory containing main.js, info.json and the icon
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Output directory for the package [default: <dir>/dist]
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Run the command line and return the process exit code.
pub fn run(cli: Cli) -> i32 {
    if cli.about {
        print_about();
        return 0;
    }

    init_logging(cli.verbose);

    let mut opts = potext::PackOptions::new(cli.dir);
    if let Some(out_dir) = cli.out_dir {
        opts = opts.with_output_dir(out_dir);
    }
    pack::run(&opts)
}

/// Install a stderr subscriber; `--verbose` forces debug, otherwise
/// `RUST_LOG` applies with a `warn` fallback.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_about() {
    println!(
        "potext: Pot Translation Plugin Packager\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         ├─ source:     {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
    );
}
