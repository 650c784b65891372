//! Statistics reporting.

use console::style;

use crate::download::DownloadStats;

/// Print statistics for the run.
pub fn print_stats(stats: &DownloadStats) {
    println!();
    println!("{}", style("Run statistics:").bold());
    println!("  Downloaded: {}", stats.downloaded);
    println!("  Converted:  {} (HEIC to JPEG)", stats.converted);
    println!("  Existing:   {} skipped", stats.skipped_existing);
    println!("  Non-image:  {} ignored", stats.skipped_non_image);
    if stats.failed > 0 {
        println!("  Failed:     {}", style(stats.failed).red());
    }
    println!("  Total:      {} items visited", stats.total_visited());
}
