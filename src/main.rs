use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use site_routing::cli::{run, Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    run(&args, io::stdout().lock()).into()
}
