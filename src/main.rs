// std imports
use std::{
    io::{stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use extglob::{
    Cache, Detector, NoCache,
    cli::{Checker, Opt},
    config,
    detector,
    error::*,
};

// ---

const EXTGLOB_DEBUG_LOG: &str = "EXTGLOB_DEBUG_LOG";
const EXTGLOB_DEBUG_LOG_STYLE: &str = "EXTGLOB_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<Opt> {
    if std::env::var(EXTGLOB_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(EXTGLOB_DEBUG_LOG)
                .write_style(EXTGLOB_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let opt = Opt::parse();

    let (configs, no_default) = opt.config_files();
    let settings = config::at(configs).no_default(no_default).load()?;
    config::global::initialize(settings);

    Ok(opt)
}

fn run() -> Result<i32> {
    let opt = bootstrap()?;

    let found = if opt.no_cache {
        check(&opt, &Detector::new(NoCache::default()))?
    } else {
        check(&opt, detector::global())?
    };

    Ok(if opt.quiet && !found { 1 } else { 0 })
}

fn check<C: Cache>(opt: &Opt, detector: &Detector<C>) -> Result<bool> {
    let stdout = stdout();
    let mut checker = Checker::new(detector, stdout.lock(), opt.quiet);

    if opt.patterns.is_empty() {
        log::debug!("reading patterns from stdin");
        checker.check_lines(stdin().lock())?;
    } else {
        checker.check_args(opt.patterns.iter().cloned())?;
    }

    let found = checker.finish()?;

    let stats = detector.cache().stats();
    log::debug!(
        "cache: {} entries of {}, {} hits, {} misses",
        detector.cache().len(),
        detector.cache().capacity(),
        stats.hits,
        stats.misses
    );

    Ok(found)
}

fn main() {
    match run() {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
