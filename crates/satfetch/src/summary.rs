use std::fmt::Display;

/// Counters for one batch run. Not persisted.
///
/// `downloaded + skipped + failed == total` holds after every completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of records in the input dataset
    pub total: usize,
    /// Records fetched and written during this run
    pub downloaded: usize,
    /// Records whose image file already existed
    pub skipped: usize,
    /// Records whose request failed (non-200 status or transport error)
    pub failed: usize,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Number of records accounted for so far.
    pub fn processed(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Download Summary")?;
        writeln!(f, "----------------")?;
        writeln!(f, "Total records    : {}", self.total)?;
        writeln!(f, "Downloaded       : {}", self.downloaded)?;
        writeln!(f, "Skipped (exists) : {}", self.skipped)?;
        write!(f, "Failed           : {}", self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_sums_all_outcomes() {
        let summary = RunSummary {
            total: 6,
            downloaded: 3,
            skipped: 2,
            failed: 1,
        };
        assert_eq!(summary.processed(), summary.total);
    }

    #[test]
    fn display_renders_summary_block() {
        let summary = RunSummary {
            total: 2,
            downloaded: 1,
            skipped: 0,
            failed: 1,
        };
        let rendered = summary.to_string();
        assert!(rendered.starts_with("Download Summary"));
        assert!(rendered.contains("Total records    : 2"));
        assert!(rendered.contains("Downloaded       : 1"));
        assert!(rendered.contains("Skipped (exists) : 0"));
        assert!(rendered.ends_with("Failed           : 1"));
    }
}
