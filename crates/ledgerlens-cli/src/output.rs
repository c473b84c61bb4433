//! Output formatting utilities.

use colored::Colorize;

/// Formats a raw statement value as an integer with thousands separators.
pub fn format_grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a derived column as a two-decimal percentage.
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

/// Formats a ratio as a two-decimal multiple.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}x")
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a labeled metric with an optional signed delta indicator.
pub fn print_metric(label: &str, value: &str, delta: Option<f64>) {
    match delta {
        Some(d) => {
            let indicator = format!("{d:+.2}");
            let colored = if d >= 0.0 {
                indicator.green()
            } else {
                indicator.red()
            };
            println!("{label}: {} ({colored})", value.bold());
        }
        None => println!("{label}: {}", value.bold()),
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
