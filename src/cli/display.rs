//! Terminal display for draws
//!
//! All output goes to stderr so stdout remains clean for piping. Nothing
//! shown here reveals who drew whom.

use colored::Colorize;

use crate::log::DrawRecord;

/// Print the summary of a finished draw
pub fn render_draw_summary(record: &DrawRecord) {
    let title = if record.dry_run {
        "Dry run".yellow().bold()
    } else {
        "Draw complete".green().bold()
    };
    eprintln!("\n{} {}", "===".bold().cyan(), title);
    eprintln!("{}", "─".repeat(50).dimmed());

    for (label, value) in summary_fields(record) {
        eprintln!("  {} {value}", format!("{label}:").dimmed());
    }

    eprintln!();
}

/// Print a fatal error with its context chain
pub fn render_error(err: &anyhow::Error) {
    eprintln!("{} {err}", "✗".red().bold());
    for cause in err.chain().skip(1) {
        eprintln!("  {} {cause}", "caused by:".dimmed());
    }
}

/// Label/value pairs shown in the summary, in display order
#[must_use]
pub fn summary_fields(record: &DrawRecord) -> Vec<(&'static str, String)> {
    let seed = record
        .seed
        .map_or_else(|| "random".to_string(), |s| s.to_string());
    let output = if record.dry_run {
        "nothing written".to_string()
    } else {
        format!(
            "{} {} file(s) in {}",
            record.files_written,
            record.output_type,
            record.output_dir.display()
        )
    };

    vec![
        ("Participants", record.participants.to_string()),
        ("Cycles", describe_plan(record)),
        ("Seed", seed),
        ("Language", record.language.clone()),
        ("Output", output),
    ]
}

/// Human description of the plan, e.g. `(3,2)(2,1) = 2 cycles of 3, 1 cycle of 2`
fn describe_plan(record: &DrawRecord) -> String {
    if record.plan.is_empty() {
        return "none".to_string();
    }
    let parts: Vec<String> = record
        .plan
        .groups()
        .iter()
        .map(|g| {
            let noun = if g.count == 1 { "cycle" } else { "cycles" };
            format!("{} {noun} of {}", g.count, g.size)
        })
        .collect();
    format!("{} = {}", record.plan, parts.join(", "))
}
