use std::io;
use std::process;

use cantine::core::query::{parse_query, USAGE};
use cantine::core::validate::validate_query;
use cantine::utils::{logger, validation::Validate};
use cantine::{Dispatcher, HttpPageSource, SiteProfile, SystemLinkOpener};
use chrono::{Datelike, Local};

fn main() {
    logger::init();

    let profile = match SiteProfile::load() {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("could not load the site profile: {}", e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = profile.validate() {
        tracing::error!("site profile rejected: {}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let query = parse_query(&tokens, Local::now().weekday());

    if let Err(e) = validate_query(&query) {
        eprintln!("error: {}", e);
        if e.is_usage_error() {
            eprintln!();
            eprint!("{}", USAGE);
        }
        process::exit(1);
    }

    let dispatcher = Dispatcher::new(profile, HttpPageSource::new(), SystemLinkOpener);
    if let Err(e) = dispatcher.run(&query, &mut io::stdout()) {
        tracing::error!("query failed: {}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
