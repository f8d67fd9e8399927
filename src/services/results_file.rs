use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::SporkError;
use crate::models::{Profile, RankedResults};

/// Write one results line: `name<TAB>rating<TAB>distance`
///
/// The name goes out exactly as it was read.
pub fn write_line<W: Write>(mut writer: W, profile: &Profile) -> io::Result<()> {
    writer.write_all(&profile.name)?;
    writeln!(writer, "\t{:.2}\t{:.2}", profile.rating, profile.distance)
}

/// Write every qualifying profile to `writer`, sponsor first
///
/// # Returns
/// Number of lines written
pub fn render<W: Write>(results: &RankedResults, mut writer: W) -> io::Result<usize> {
    let mut written = 0;
    for profile in results.ordered() {
        write_line(&mut writer, profile)?;
        written += 1;
    }
    writer.flush()?;

    Ok(written)
}

/// Create (or truncate) the results file at `path` and write the results
///
/// If writing fails after the file was created, whatever was already
/// written stays on disk.
pub fn write_results<P: AsRef<Path>>(results: &RankedResults, path: P) -> Result<usize, SporkError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| SporkError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let written = render(results, BufWriter::new(file)).map_err(|source| SporkError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), lines = written, "results written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdLevel, Location};

    fn qualifying(name: &str, rating: f64, distance: f64) -> Profile {
        Profile::new(name, Location::default(), rating, AdLevel::None)
            .mark_nearby(distance)
            .mark_good()
    }

    fn line_for(profile: &Profile) -> Vec<u8> {
        let mut buffer = Vec::new();
        write_line(&mut buffer, profile).unwrap();
        buffer
    }

    #[test]
    fn test_write_line_two_decimals() {
        assert_eq!(line_for(&qualifying("Diner", 4.0, 3.14159)), b"Diner\t4.00\t3.14\n");
        assert_eq!(line_for(&qualifying("Grill", 3.456, 0.005)), b"Grill\t3.46\t0.01\n");
    }

    #[test]
    fn test_write_line_keeps_name_bytes() {
        let latin1 = Profile::new(&b"Caf\xe9"[..], Location::default(), 4.0, AdLevel::None)
            .mark_nearby(1.0)
            .mark_good();
        assert_eq!(line_for(&latin1), b"Caf\xe9\t4.00\t1.00\n");

        let nbsp = qualifying("Caf\u{a0}Bar", 4.0, 1.0);
        assert_eq!(line_for(&nbsp), "Caf\u{a0}Bar\t4.00\t1.00\n".as_bytes());
    }

    #[test]
    fn test_render_sponsor_first() {
        let results = RankedResults {
            profiles: vec![
                qualifying("First", 4.5, 1.0),
                qualifying("Second", 4.0, 2.0),
                qualifying("Third", 5.0, 3.0),
            ],
            sponsor: Some(1),
        };

        let mut buffer = Vec::new();
        let written = render(&results, &mut buffer).unwrap();

        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Second\t4.00\t2.00\nFirst\t4.50\t1.00\nThird\t5.00\t3.00\n"
        );
    }

    #[test]
    fn test_render_skips_non_qualifying() {
        let results = RankedResults {
            profiles: vec![
                Profile::new("Hidden", Location::default(), 5.0, AdLevel::Premium).mark_good(),
                qualifying("Shown", 4.0, 1.0),
            ],
            sponsor: Some(1),
        };

        let mut buffer = Vec::new();
        render(&results, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "Shown\t4.00\t1.00\n");
    }

    #[test]
    fn test_write_results_bad_path() {
        let results = RankedResults {
            profiles: vec![],
            sponsor: None,
        };

        let err = write_results(&results, "/nonexistent/spork/out.txt").unwrap_err();
        assert!(matches!(err, SporkError::OutputOpen { .. }));
    }
}
