use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::SporkError;
use crate::models::{Location, SearchCriteria};

pub const USAGE: &str =
    "Usage:\nspork inputSporkFile resultsFile userLocX userLocY maxDistMiles minAvgRating";

/// Positional command-line arguments
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub criteria: SearchCriteria,
}

impl CliArgs {
    /// Build from the arguments that follow the program name
    ///
    /// Exactly six are required. Paths are taken as-is, whatever their
    /// encoding. Numbers are read leniently: text that does not start with a
    /// number becomes `0.0`.
    pub fn parse<I, S>(args: I) -> Result<Self, SporkError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [input, output, x, y, max_distance, min_rating] = args.as_slice() else {
            return Err(SporkError::Usage { got: args.len() });
        };
        let number = |arg: &OsString| parse_lenient(&arg.to_string_lossy());

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            criteria: SearchCriteria {
                origin: Location::new(number(x), number(y)),
                max_distance: number(max_distance),
                min_rating: number(min_rating),
            },
        })
    }
}

/// Parse the longest numeric prefix of `text` the way C `atof` does
///
/// Leading whitespace is skipped and an optional sign is accepted, followed
/// by a decimal number with optional exponent, a `0x` hex float with optional
/// `p` exponent, or `inf`/`infinity`/`nan` in any case. Anything else is `0.0`.
pub fn parse_lenient(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| !is_c_space(*b)).unwrap_or(bytes.len());
    let bytes = &bytes[start..];

    let (negative, body) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let magnitude = parse_special(body)
        .or_else(|| parse_hex(body))
        .or_else(|| parse_decimal(body));

    match magnitude {
        Some(value) if negative => -value,
        Some(value) => value,
        None => 0.0,
    }
}

fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn starts_with_ignore_case(bytes: &[u8], prefix: &str) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// `inf` also covers `infinity`
fn parse_special(body: &[u8]) -> Option<f64> {
    if starts_with_ignore_case(body, "inf") {
        Some(f64::INFINITY)
    } else if starts_with_ignore_case(body, "nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Index just past the run of ASCII digits starting at `from`
fn digits_end(bytes: &[u8], from: usize) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |offset| from + offset)
}

/// Optional `[eE][+-]digits` suffix; returns where it ends, or `at` if absent
fn exponent_end(bytes: &[u8], at: usize, markers: [u8; 2]) -> (usize, Option<(bool, usize)>) {
    if !bytes.get(at).is_some_and(|b| markers.contains(b)) {
        return (at, None);
    }

    let mut start = at + 1;
    let negative = bytes.get(start) == Some(&b'-');
    if matches!(bytes.get(start), Some(b'+' | b'-')) {
        start += 1;
    }

    let end = digits_end(bytes, start);
    if end > start {
        (end, Some((negative, start)))
    } else {
        (at, None)
    }
}

fn parse_decimal(body: &[u8]) -> Option<f64> {
    let int_end = digits_end(body, 0);
    let mut end = int_end;
    let mut has_digits = int_end > 0;

    if body.get(int_end) == Some(&b'.') {
        let frac_end = digits_end(body, int_end + 1);
        has_digits |= frac_end > int_end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }

    let (end, _) = exponent_end(body, end, [b'e', b'E']);
    std::str::from_utf8(&body[..end]).ok()?.parse().ok()
}

fn parse_hex(body: &[u8]) -> Option<f64> {
    if body.len() < 2 || body[0] != b'0' || !matches!(body[1], b'x' | b'X') {
        return None;
    }

    let mut mantissa = 0.0f64;
    let mut exponent: i32 = 0;
    let mut has_digits = false;
    let mut seen_point = false;
    let mut end = 2;

    while let Some(&byte) = body.get(end) {
        if byte == b'.' && !seen_point {
            seen_point = true;
        } else if let Some(digit) = char::from(byte).to_digit(16) {
            has_digits = true;
            mantissa = mantissa * 16.0 + f64::from(digit);
            if seen_point {
                exponent -= 4;
            }
        } else {
            break;
        }
        end += 1;
    }
    if !has_digits {
        return None;
    }

    if let (exp_end, Some((negative, digits_start))) = exponent_end(body, end, [b'p', b'P']) {
        let value = body[digits_start..exp_end]
            .iter()
            .fold(0i32, |acc, b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')));
        exponent = if negative {
            exponent.saturating_sub(value)
        } else {
            exponent.saturating_add(value)
        };
    }

    Some(mantissa * 2f64.powi(exponent))
}
