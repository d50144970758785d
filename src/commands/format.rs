//! Console formatting for issues.

use crate::infra::gitlab::Issue;

/// Format an issue as a key/value block for display.
pub fn format_issue(issue: &Issue) -> String {
    let mut out = format!(
        "Issue #{}: {}\n  State   : {}\n  Created : {}\n  URL     : {}",
        issue.iid,
        issue.title,
        issue.state,
        issue.created_at.format("%Y-%m-%d %H:%M UTC"),
        issue.web_url,
    );

    if let Some(description) = issue.description.as_deref()
        && !description.is_empty()
    {
        out.push_str("\n\n");
        out.push_str(&indent(description, "  "));
    }

    out
}

/// Prefix each line of `text` with `prefix`.
fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
