//! Run statistics tracking.

/// Outcome of processing a single media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Downloaded, no conversion needed.
    Downloaded,
    /// Downloaded and converted from HEIC to JPEG.
    Converted,
    /// Skipped because the target file already exists.
    SkippedExisting,
    /// Download or conversion failed; logged and isolated.
    Failed,
}

/// Per-run download statistics.
#[derive(Debug, Default)]
pub struct DownloadStats {
    pub downloaded: u64,
    pub converted: u64,
    pub skipped_existing: u64,
    pub skipped_non_image: u64,
    pub failed: u64,
}

impl DownloadStats {
    /// Record the outcome of one item.
    pub fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Downloaded => self.downloaded += 1,
            ItemOutcome::Converted => {
                self.downloaded += 1;
                self.converted += 1;
            }
            ItemOutcome::SkippedExisting => self.skipped_existing += 1,
            ItemOutcome::Failed => self.failed += 1,
        }
    }

    /// Record an item ignored for not being an image.
    pub fn record_non_image(&mut self) {
        self.skipped_non_image += 1;
    }

    /// Total number of items visited.
    pub fn total_visited(&self) -> u64 {
        self.downloaded + self.skipped_existing + self.skipped_non_image + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut stats = DownloadStats::default();
        stats.record(ItemOutcome::Downloaded);
        stats.record(ItemOutcome::Converted);
        stats.record(ItemOutcome::SkippedExisting);
        stats.record(ItemOutcome::Failed);
        stats.record_non_image();

        assert_eq!(stats.downloaded, 2);
        assert_eq!(stats.converted, 1);
        assert_eq!(stats.skipped_existing, 1);
        assert_eq!(stats.skipped_non_image, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total_visited(), 5);
    }
}
