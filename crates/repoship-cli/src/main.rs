//! Repoship CLI - publish release builds to the public package archive

use clap::Parser;
use std::path::PathBuf;

mod commands;
mod error;
mod exit_codes;

#[derive(Parser)]
#[command(name = "repoship")]
#[command(version)]
#[command(about = "Publish a release build to the package archive", long_about = None)]
struct Cli {
    /// Release version to publish (e.g. 1.2.3dev1)
    #[arg(value_name = "VERSION")]
    release_version: String,

    /// Override the target repository bucket
    #[arg(long, value_name = "URL")]
    target_bucket: Option<String>,

    /// Override the build server the packages are pulled from
    #[arg(long, value_name = "URL")]
    build_server: Option<String>,

    /// Load release configuration from a YAML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Argument errors exit 1 with the usage message on stderr;
            // --help and --version stay on stdout with status 0
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            std::process::exit(code);
        }
    };

    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    let outcome = commands::update::run(
        &cli.release_version,
        cli.target_bucket.as_deref(),
        cli.build_server.as_deref(),
        cli.config.as_deref(),
    );

    if let Err(err) = outcome {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
