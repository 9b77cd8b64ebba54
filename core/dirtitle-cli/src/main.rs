//! dirtitle: derives a terminal title for a directory path.
//!
//! Invoked from shell prompt hooks. Prints exactly one line to stdout (the
//! title) on success and nothing otherwise; diagnostics go to stderr with a
//! `dirtitle: ` prefix and exit code 1.
//!
//! ## Usage
//!
//! ```bash
//! dirtitle [--long] [--show-command] DIR_PATH
//! ```

mod logging;

use std::fmt::Display;
use std::path::PathBuf;

use clap::Parser;
use dirtitle_core::{
    CommandEnv, OverrideStore, Settings, TitleOptions, TitleResolver, UserIdentity,
};

#[derive(Parser)]
#[command(name = "dirtitle")]
#[command(about = "Derives a terminal title for a directory path")]
#[command(version)]
struct Cli {
    /// Emit the breadcrumb form (ancestor titles joined innermost-first)
    #[arg(long)]
    long: bool,

    /// Overlay the currently running shell command onto the short title
    #[arg(long)]
    show_command: bool,

    /// Directory to derive a title for (absolute or relative)
    #[arg(value_name = "DIR_PATH")]
    path: PathBuf,
}

fn main() {
    let _logging_guard = logging::init();

    // Usage errors must exit 1 with nothing on stdout; stock clap exits 2.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    let dpath = match std::path::absolute(&cli.path) {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(err) => fail(err),
    };

    let identity = match UserIdentity::current() {
        Ok(identity) => identity,
        Err(err) => fail(err),
    };

    let overrides = OverrideStore::resolve(&identity);
    let settings = Settings::load(&identity.home_dir);
    let resolver = TitleResolver::new(identity, overrides, settings);

    let options = TitleOptions {
        long: cli.long,
        show_command: cli.show_command,
    };
    match resolver.title(&dpath, options, &CommandEnv::from_env()) {
        Ok(title) => println!("{title}"),
        Err(err) => fail(err),
    }
}

fn fail(err: impl Display) -> ! {
    tracing::error!(error = %err, "title derivation failed");
    eprintln!("dirtitle: {err}");
    std::process::exit(1);
}
