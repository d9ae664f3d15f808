//! Markdown report rendering
//!
//! Fixed layout: overview, key takeaways, action items, optional transcript.
//! Pure rendering; the caller owns the filesystem write.

use crate::summarize::models::MergedReport;

const UNASSIGNED: &str = "Unassigned";

/// Render the merged report as a markdown document.
pub fn render(report: &MergedReport, transcript: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str("# Meeting Summary\n\n");
    out.push_str("## Overview\n\n");
    out.push_str(&report.overview);
    out.push_str("\n\n");

    out.push_str("## Key Takeaways\n\n");
    for point in &report.key_points {
        out.push_str("- ");
        out.push_str(point);
        out.push('\n');
    }

    out.push_str("\n## Action Items\n\n");
    for item in &report.action_items {
        let assignee = item.assignee.as_deref().unwrap_or(UNASSIGNED);
        let task = item.task.as_deref().unwrap_or_default();
        out.push_str("- **");
        out.push_str(assignee);
        out.push_str("**: ");
        out.push_str(task);
        out.push('\n');
    }

    if let Some(transcript) = transcript {
        out.push_str("\n## Full Transcript\n\n");
        out.push_str(transcript);
    }

    out
}
