//! Excerpt extraction around the first query match.

/// Extract a window of roughly `width` characters from `text`, centred on the
/// earliest occurrence of any needle. Needles are matched case-insensitively;
/// trimmed ends are marked with an ellipsis.
pub fn make_snippet(text: &str, needles: &[String], width: usize) -> String {
    if text.is_empty() || width == 0 {
        return String::new();
    }

    let anchor = find_anchor(text, needles);
    let total_chars = text.chars().count();

    if total_chars <= width {
        return text.to_string();
    }

    // Character offset of the window start, biased so the match sits near the
    // middle, clamped to keep the window inside the text.
    let anchor_chars = text[..anchor].chars().count();
    let start_chars = anchor_chars
        .saturating_sub(width / 2)
        .min(total_chars.saturating_sub(width));

    let mut snippet: String = text.chars().skip(start_chars).take(width).collect();

    // Avoid leading/trailing partial words where possible.
    if start_chars > 0 {
        if let Some(space) = snippet.find(' ') {
            snippet = snippet[space + 1..].to_string();
        }
        snippet = format!("…{snippet}");
    }
    if start_chars + width < total_chars {
        if let Some(space) = snippet.rfind(' ') {
            snippet.truncate(space);
        }
        snippet.push('…');
    }

    snippet
}

/// Byte offset of the earliest case-insensitive needle match, or 0.
fn find_anchor(text: &str, needles: &[String]) -> usize {
    let lower = text.to_lowercase();
    // Lowercasing can change byte length for a handful of scripts; offsets
    // only map back when it does not.
    if lower.len() != text.len() {
        return 0;
    }

    needles
        .iter()
        .filter(|needle| !needle.is_empty())
        .filter_map(|needle| lower.find(&needle.to_lowercase()))
        .min()
        .unwrap_or(0)
}
