//! Plain-text rendering of search outcomes

use super::types::{SearchHit, SearchOutcome};

/// Width of the divider line closing every hit block
pub const DIVIDER_WIDTH: usize = 40;

/// Render one hit as a block ending with the divider line
pub fn render_hit(hit: &SearchHit) -> String {
    let mut block = format!("Query: {}\nTitle: {}\nLink: {}", hit.query, hit.title, hit.link);

    if hit.sitelinks.is_empty() {
        block.push_str("\nSitelinks: None");
    } else {
        let lines: Vec<String> = hit
            .sitelinks
            .iter()
            .map(|s| format!("    - {}: {}", s.title, s.link))
            .collect();
        block.push_str("\nSitelinks:\n");
        block.push_str(&lines.join("\n"));
    }

    block.push('\n');
    block.push_str(&"-".repeat(DIVIDER_WIDTH));
    block
}

/// Render a single outcome. An empty hit list renders as the empty string.
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Failed { query, message } => {
            format!("Error for query '{}': {}", query, message)
        }
        SearchOutcome::Hits { hits, .. } => hits
            .iter()
            .map(render_hit)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render all outcomes into the combined report, in the given order
pub fn render_report(outcomes: &[SearchOutcome]) -> String {
    outcomes
        .iter()
        .map(render_outcome)
        .collect::<Vec<_>>()
        .join("\n")
}
