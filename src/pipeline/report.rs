//! Console reporter
//!
//! One overwritable progress line plus permanent per-record lines. The
//! progress line is redrawn in place with a carriage return and an erase
//! escape; classification and skip lines end with a newline and stay.

use crate::classify::Verdict;
use crate::fetch::FetchError;
use std::io::{self, Write};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Erase the current terminal line before printing.
const CLEAR_LINE: &str = "\r\x1b[K";

/// Tracks how far the run has come and renders every line of output.
///
/// `total` is fixed at construction and never revised, even when later
/// reads fail; `processed` counts every record attempt, successful or not.
pub struct Reporter<W: Write> {
    processed: usize,
    total: usize,
    out: W,
}

impl Reporter<io::Stdout> {
    /// Production reporter writing to standard output.
    pub fn stdout(total: usize) -> Self {
        Self::new(total, io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(total: usize, out: W) -> Self {
        Self {
            processed: 0,
            total,
            out,
        }
    }

    /// Number of record attempts counted so far.
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Count one record attempt and redraw the progress line.
    pub fn tick(&mut self) {
        self.processed += 1;

        if self.total == 0 {
            let _ = writeln!(
                self.out,
                "{}Invalid progress calculation: total records must be greater than 0.",
                CLEAR_LINE
            );
            return;
        }

        let percent = self.processed * 100 / self.total;
        let glyph = SPINNER[(self.processed - 1) % SPINNER.len()];
        let _ = write!(
            self.out,
            "{}Processing... {}% complete {} ",
            CLEAR_LINE, percent, glyph
        );
        let _ = self.out.flush();
    }

    /// Permanent skip line for a record whose page could not be fetched.
    pub fn fetch_failed(&mut self, url: &str, error: &FetchError) {
        let _ = writeln!(
            self.out,
            "{}Failed to fetch data from {}: {}",
            CLEAR_LINE, url, error
        );
    }

    /// Permanent classification line for a fetched record.
    pub fn classification(&mut self, name: &str, verdict: Verdict) {
        let line = match verdict {
            Verdict::Accepting => {
                format!("Event at \"{}\" is currently accepting applications.", name)
            }
            Verdict::NotAccepting => {
                format!("Event at \"{}\" is not accepting applications.", name)
            }
            Verdict::Undetermined => format!(
                "Could not determine if event at \"{}\" is accepting applications.",
                name
            ),
        };
        let _ = writeln!(self.out, "{}{}", CLEAR_LINE, line);
    }

    /// Final line once the record source is exhausted.
    pub fn finish(&mut self) {
        let _ = writeln!(self.out, "{}Processing complete.", CLEAR_LINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_progress_percent_is_floored() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(3, &mut buf);
        reporter.tick();
        reporter.tick();
        let output = String::from_utf8(buf).unwrap();
        // 1/3 -> 33%, 2/3 -> 66%
        assert!(output.contains("Processing... 33% complete"));
        assert!(output.contains("Processing... 66% complete"));
    }

    #[test]
    fn test_spinner_cycles_through_four_glyphs() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(5, &mut buf);
        for _ in 0..5 {
            reporter.tick();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("20% complete | "));
        assert!(output.contains("40% complete / "));
        assert!(output.contains("60% complete - "));
        assert!(output.contains("80% complete \\ "));
        // Fifth tick wraps back to the first glyph
        assert!(output.contains("100% complete | "));
    }

    #[test]
    fn test_zero_total_guard() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(0, &mut buf);
        reporter.tick();
        let output = String::from_utf8(buf).unwrap();
        assert!(output
            .contains("Invalid progress calculation: total records must be greater than 0."));
        assert!(!output.contains("% complete"));
    }

    #[test]
    fn test_classification_lines() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(4, &mut buf);
        reporter.classification("EventA", Verdict::Accepting);
        reporter.classification("EventB", Verdict::NotAccepting);
        reporter.classification("EventC", Verdict::Undetermined);
        drop(reporter);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Event at \"EventA\" is currently accepting applications.\n"));
        assert!(output.contains("Event at \"EventB\" is not accepting applications.\n"));
        assert!(output
            .contains("Could not determine if event at \"EventC\" is accepting applications.\n"));
    }

    #[test]
    fn test_skip_line_names_url_and_cause() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(4, &mut buf);
        reporter.fetch_failed(
            "https://bad.example",
            &FetchError::Status(StatusCode::SERVICE_UNAVAILABLE),
        );
        drop(reporter);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains(
            "Failed to fetch data from https://bad.example: non-OK HTTP status: 503 Service Unavailable\n"
        ));
    }

    #[test]
    fn test_lines_erase_before_printing() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(4, &mut buf);
        reporter.tick();
        reporter.finish();
        drop(reporter);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\r\x1b[KProcessing... "));
        assert!(output.ends_with("\r\x1b[KProcessing complete.\n"));
    }
}
