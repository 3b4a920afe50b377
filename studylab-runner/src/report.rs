//! Text and JSON renderings of simulation reports.

use crate::simulate::SimulationReport;

/// Aligned table for terminal output.
pub fn render_text(report: &SimulationReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Study:       {}\n", report.study));
    out.push_str(&format!("Fingerprint: {}\n", short_hash(&report.config_hash)));
    out.push_str(&format!(
        "Draws:       {} (master seed {})\n\n",
        report.draws, report.master_seed
    ));

    out.push_str(&format!(
        "{:<16} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
        "Group", "Weight", "Expected", "Observed", "Freq", "Dev"
    ));
    out.push_str(&format!("{}\n", "-".repeat(70)));

    for g in &report.groups {
        out.push_str(&format!(
            "{:<16} {:>10} {:>10.4} {:>10} {:>10.4} {:>+10.4}\n",
            g.group.to_string(),
            g.weight.to_string(),
            g.expected,
            g.observed,
            g.frequency,
            g.deviation(),
        ));
    }

    out.push_str(&format!(
        "\nMax |deviation|: {:.4}\n",
        report.max_abs_deviation
    ));
    out
}

/// Pretty JSON for machine consumption.
pub fn render_json(report: &SimulationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(16)]
}
