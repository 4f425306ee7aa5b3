// src/main.rs
use nol::app;
use nol::args::Args;
use nol::config::Config;
use std::io;
use std::process::ExitCode;

/// Diagnostics go to stderr and are off unless `NOL_LOG` asks for them.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("NOL_LOG", "off"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    init_logger();
    log::debug!("nol v{}", nol::VERSION);

    let config = Config::from(Args::parse_literal());
    let mut stdout = io::stdout().lock();

    match app::run(&config, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(app::report_failure(&mut stdout, &e)),
    }
}
