//! `ass-tags` entry point.

use std::process;

use clap::Parser;
use log::{debug, error};

use ass_tag_cli::Args;

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(args.log_level())
        .format_timestamp(None)
        .init();

    debug!("Parsed arguments: {args:?}");

    if let Err(err) = ass_tag_cli::run(&args) {
        error!("{err:#}");
        process::exit(1);
    }
}
