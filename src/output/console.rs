//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a debug message.
pub fn print_debug(message: &str) {
    println!("{} {}", style("DEBUG").dim(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     GPhotos Favorites                                 ║
║     Download favorited photos from Google Photos      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(download_dir: &str, page_size: i32, convert_heic: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Directory: {}", download_dir);
    println!("  Page size: {}", page_size);
    println!(
        "  HEIC conversion: {}",
        if convert_heic { "enabled" } else { "disabled" }
    );
    println!();
}
