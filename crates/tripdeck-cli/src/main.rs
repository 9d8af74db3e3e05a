use clap::Parser;
use tripdeck::{Cli, run};

fn main() {
    // Quiet by default: the alternate screen and stderr logging do not
    // mix. RUST_LOG opts back in for diagnostics.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
