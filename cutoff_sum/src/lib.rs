use std::{
    convert::Infallible,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use num::BigInt;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CUTOFF: i64 = 54623;
pub const DEFAULT_INPUT: &str = "demo-audio-data.csv";

#[derive(Error, Debug, miette::Diagnostic)]
pub enum Error {
    #[error("unable to open input {}", .path.display())]
    #[diagnostic(
        code(cutoff_sum::open),
        help("pass an existing file, or `-` to read standard input")
    )]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading input")]
    #[diagnostic(code(cutoff_sum::read))]
    Read(#[from] io::Error),
}

#[derive(Debug, Default)]
struct Tally {
    lines: usize,
    qualifying: usize,
    total: BigInt,
}

/// The cutoff is inclusive.
pub fn is_qualifying(value: &BigInt, cutoff: &BigInt) -> bool {
    value >= cutoff
}

fn tally<S, E>(input: impl Iterator<Item = Result<S, E>>, cutoff: &BigInt) -> Result<Tally, E>
where
    S: AsRef<str>,
{
    let mut tally = Tally::default();

    for chunk in input {
        let chunk = chunk?;

        // a lone '\r' ends a line too; `BufRead::lines` only splits on '\n'
        for line in chunk.as_ref().split('\r') {
            tally.lines += 1;

            // unparsable lines don't count and don't stop the pass
            let Some(value) = util::parse_line(line) else {
                continue;
            };

            if is_qualifying(&value, cutoff) {
                tally.qualifying += 1;
                tally.total += value;
            }
        }
    }

    Ok(tally)
}

/// Sums every line that parses as an integer and is at least `cutoff`.
pub fn sum_qualifying(input: impl Iterator<Item = impl AsRef<str>>, cutoff: i64) -> BigInt {
    match tally(input.map(Ok::<_, Infallible>), &BigInt::from(cutoff)) {
        Ok(tally) => tally.total,
        Err(never) => match never {},
    }
}

/// Same as [`sum_qualifying`], pulling lines from `reader`.
///
/// A line that can't be read (I/O failure, invalid UTF-8) aborts the whole
/// sum, unlike a line that can't be parsed.
pub fn sum_qualifying_reader(reader: impl BufRead, cutoff: i64) -> Result<BigInt, Error> {
    let tally = tally(reader.lines(), &BigInt::from(cutoff))?;

    debug!(
        lines = tally.lines,
        qualifying = tally.qualifying,
        total = %tally.total,
        "finished input"
    );

    Ok(tally.total)
}

/// Opens `path` (`-` for stdin) and sums it. The source is closed on return.
pub fn sum_qualifying_path(path: &Path, cutoff: i64) -> Result<BigInt, Error> {
    let reader = util::open_input(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), cutoff, "opened input");

    sum_qualifying_reader(reader, cutoff)
}
