use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use nom::{
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::separated_list1,
    sequence::pair,
    IResult,
};
use num::BigInt;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Base-10 integer with an optional sign, e.g. `-12`, `+7`, `54623`.
///
/// Digit groups may be joined by single underscores (`54_623`), never at
/// either end of the digits.
pub fn parse_number(i: &str) -> IResult<&str, BigInt> {
    map_res(
        recognize(pair(
            opt(one_of("+-")),
            separated_list1(char('_'), digit1),
        )),
        |s: &str| s.replace('_', "").parse::<BigInt>(),
    )(i)
}

/// Parses a whole line as a number, ignoring surrounding whitespace.
///
/// Anything left over after the number makes the line unparsable, so `12.5`
/// and `7 apples` both give `None`.
pub fn parse_line(l: &str) -> Option<BigInt> {
    all_consuming(parse_number)(l.trim()).ok().map(|(_, n)| n)
}

pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("54623", 54623)]
    #[case("  54623  ", 54623)]
    #[case("\t60000\r", 60000)]
    #[case("+100", 100)]
    #[case("-100", -100)]
    #[case("007", 7)]
    #[case("1_000", 1000)]
    #[case("54_623", 54623)]
    #[case("-1_2_3", -123)]
    fn parse_line_ok(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_line(input), Some(BigInt::from(expected)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("12.5")]
    #[case("1e5")]
    #[case("_1")]
    #[case("1_")]
    #[case("1__0")]
    #[case("+_1")]
    #[case("0x10")]
    #[case("- 5")]
    #[case("+-5")]
    #[case("12 34")]
    #[case("not_a_number")]
    fn parse_line_rejects(#[case] input: &str) {
        assert_eq!(parse_line(input), None);
    }

    #[test]
    fn parse_line_beyond_i64() {
        let res = parse_line("123456789012345678901234567890");
        assert_eq!(
            res,
            Some("123456789012345678901234567890".parse::<BigInt>().unwrap())
        );
    }

    #[test]
    fn parse_number_leaves_rest() {
        let (rest, n) = parse_number("-42 and more").unwrap();
        assert_eq!(rest, " and more");
        assert_eq!(n, BigInt::from(-42));
    }

    #[test]
    fn parse_number_stops_before_dangling_underscore() {
        let (rest, n) = parse_number("12_").unwrap();
        assert_eq!(rest, "_");
        assert_eq!(n, BigInt::from(12));
    }

    #[test]
    fn open_input_missing_file() {
        let res = open_input(Path::new("does/not/exist.csv"));
        assert!(res.is_err());
        assert_eq!(res.err().unwrap().kind(), io::ErrorKind::NotFound);
    }
}
