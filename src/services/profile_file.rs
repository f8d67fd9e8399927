use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::SporkError;
use crate::models::{AdLevel, Location, Profile, MAX_NAME_LEN};

/// Reads profile records from a whitespace-separated text file
///
/// Each line must hold exactly `name x y rating adLevel`. Anything else is
/// skipped without error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileReader {
    max_profiles: Option<usize>,
}

impl ProfileReader {
    /// Reader that keeps every accepted record
    pub fn new() -> Self {
        Self::default()
    }

    /// Reader that stops after `max_profiles` accepted records
    pub fn with_limit(max_profiles: usize) -> Self {
        Self {
            max_profiles: Some(max_profiles),
        }
    }

    pub fn max_profiles(&self) -> Option<usize> {
        self.max_profiles
    }

    /// Read all accepted profiles from `path`, in file order
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Profile>, SporkError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SporkError::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let profiles = self
            .read(BufReader::new(file))
            .map_err(|source| SporkError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), count = profiles.len(), "profiles loaded");
        Ok(profiles)
    }

    /// Read accepted profiles from any buffered source
    pub fn read<R: BufRead>(&self, reader: R) -> std::io::Result<Vec<Profile>> {
        let mut profiles = Vec::new();
        let mut skipped = 0usize;

        for line in reader.split(b'\n') {
            if self.max_profiles.is_some_and(|max| profiles.len() >= max) {
                break;
            }

            let line = line?;
            match parse_line(&line) {
                Some(profile) => profiles.push(profile),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(skipped, "malformed lines dropped");
        }

        Ok(profiles)
    }
}

/// Whitespace as the C locale defines it
#[inline]
fn is_field_separator(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn parse_number<T: FromStr>(token: &[u8]) -> Option<T> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// Parse one `name x y rating adLevel` line
///
/// Returns `None` unless the line splits into exactly five tokens, the three
/// numbers parse as floats and the ad level is 0, 1 or 2. The name is kept
/// byte for byte.
pub fn parse_line(line: &[u8]) -> Option<Profile> {
    let mut tokens = line
        .split(is_field_separator)
        .filter(|token| !token.is_empty());

    let name = tokens.next()?;
    let x = parse_number::<f64>(tokens.next()?)?;
    let y = parse_number::<f64>(tokens.next()?)?;
    let rating = parse_number::<f64>(tokens.next()?)?;
    let ad_level = parse_number::<i64>(tokens.next()?)?;

    if tokens.next().is_some() || name.len() > MAX_NAME_LEN {
        return None;
    }

    let ad_level = AdLevel::try_from(ad_level).ok()?;

    Some(Profile::new(name, Location::new(x, y), rating, ad_level))
}
