//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::Result;

/// Progress bar counting `unit`s (games, climbs); hidden when `enabled` is false
pub fn create_progress(total: u64, unit: &str, enabled: bool) -> Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} ({{msg}})"
            ))?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a tour as `0 -> 3 -> 1 -> 0`, eliding the middle of long tours
pub fn format_tour(tour: &[usize]) -> String {
    const SHOWN: usize = 12;
    let join = |cities: &[usize]| {
        cities
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    };
    if tour.len() <= 2 * SHOWN {
        join(tour)
    } else {
        format!(
            "{} -> ... -> {}",
            join(&tour[..SHOWN]),
            join(&tour[tour.len() - SHOWN..])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_tour() {
        assert_eq!(format_tour(&[0, 2, 1, 0]), "0 -> 2 -> 1 -> 0");
        let long: Vec<usize> = (0..40).chain([0]).collect();
        let formatted = format_tour(&long);
        assert!(formatted.starts_with("0 -> 1 -> "));
        assert!(formatted.contains(" -> ... -> "));
        assert!(formatted.ends_with("39 -> 0"));
    }
}
