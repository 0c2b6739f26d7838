use std::fmt::Write;

use anyhow::Result;

use crate::data_models::SearchResult;

pub const NO_RESULTS_MESSAGE: &str = "No results found or error during search.";
pub const SEPARATOR: &str = "---";

pub fn render_listing(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("{NO_RESULTS_MESSAGE}\n");
    }

    let mut out = format!("\nResults for '{query}':\n\n");
    for (i, result) in results.iter().enumerate() {
        // writing into a String cannot fail
        let _ = writeln!(out, "{}. Title: {}", i + 1, result.title);
        let _ = writeln!(out, "   URL: {}", result.url);
        if let Some(snippet) = &result.snippet {
            let _ = writeln!(out, "   Snippet: {snippet}");
        }
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}

pub fn render_json(results: &[SearchResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
