use clap::{ErrorKind, Parser};
use env_logger::Env;
use log::debug;
use std::process::exit;

use gbsrom_tools::insert::{insert, InsertArgs, USAGE};

fn main() {
    env_logger::init_from_env(Env::new().default_filter_or("warn"));

    let args = match InsertArgs::try_parse_from(wild::args()) {
        Ok(args) => args,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.exit()
        }
        Err(error) => {
            debug!("{error}");
            println!("{USAGE}");
            return;
        }
    };

    if let Err(error) = insert(args) {
        debug!("{error:?}");
        println!("ERROR: {error}");
        exit(1);
    }
}
