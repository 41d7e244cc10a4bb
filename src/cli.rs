// std imports
use std::{
    ffi::OsString,
    io::{self, BufRead, Write},
    str,
};

// third-party imports
use clap::Parser;

// local imports
use crate::{cache::Cache, detector::Detector};

// ---

/// Reports which glob patterns contain extended glob tokens like ?(a|b), @(a|b), !(a), +(a) or *(a).
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, may be repeated. An empty value or '-' discards the default configuration.
    #[arg(long, value_name = "FILE", env = "EXTGLOB_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Print nothing, exit with status 0 if any pattern contains an extglob and 1 otherwise.
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not memoize detection results.
    #[arg(long)]
    pub no_cache: bool,

    /// Patterns to check. If none are given, patterns are read from stdin, one per line.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<OsString>,
}

impl Opt {
    /// Splits configuration files into the ones to load and whether default configuration is discarded.
    pub fn config_files(&self) -> (&[String], bool) {
        self.config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (&self.config[x + 1..], true))
            .unwrap_or((&self.config[..], false))
    }
}

// ---

/// Checks patterns and reports results to an output stream.
pub struct Checker<'a, C, W> {
    detector: &'a Detector<C>,
    output: W,
    quiet: bool,
    found: bool,
}

impl<'a, C: Cache, W: Write> Checker<'a, C, W> {
    pub fn new(detector: &'a Detector<C>, output: W, quiet: bool) -> Self {
        Self {
            detector,
            output,
            quiet,
            found: false,
        }
    }

    /// Checks a single pattern given as raw bytes.
    ///
    /// Patterns that are not valid UTF-8 never contain an extglob.
    pub fn check(&mut self, pattern: &[u8]) -> io::Result<bool> {
        let result = match str::from_utf8(pattern) {
            Ok(pattern) => self.detector.is_extglob(pattern),
            Err(_) => {
                log::debug!("pattern is not valid utf-8: {:?}", String::from_utf8_lossy(pattern));
                false
            }
        };

        self.found |= result;

        if !self.quiet {
            writeln!(self.output, "{}\t{}", result, String::from_utf8_lossy(pattern))?;
        }

        Ok(result)
    }

    /// Checks each command line argument.
    pub fn check_args<I>(&mut self, args: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        for arg in args {
            self.check(arg.into().as_encoded_bytes())?;
        }
        Ok(())
    }

    /// Checks each line of `input`.
    pub fn check_lines<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.split(b'\n') {
            let line = line?;
            self.check(line.strip_suffix(b"\r").unwrap_or(&line))?;
        }
        Ok(())
    }

    /// Flushes the output and returns whether any checked pattern contained an extglob.
    pub fn finish(mut self) -> io::Result<bool> {
        self.output.flush()?;
        Ok(self.found)
    }
}
