use crate::stats::ImportReport;
use crate::utils::format_number;
use crate::Args;

pub fn print_import_report(report: &ImportReport, args: &Args) {
    println!("\n--- Email domains in {} ---", args.source.display());
    println!("Rows read: {}", format_number(report.rows_read));
    println!("Rows counted: {}", format_number(report.total_counted()));
    println!("Rows skipped: {}", format_number(report.rows_skipped()));
    println!("Unique domains: {}", format_number(report.groups.len()));

    let shown = args.top.unwrap_or(report.groups.len());
    if shown < report.groups.len() {
        println!("\nFirst {} domains:", shown);
    } else {
        println!();
    }

    for group in report.groups.iter().take(shown) {
        println!("- {}: {}", group.domain, format_number(group.count));
    }
}
