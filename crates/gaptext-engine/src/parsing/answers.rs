use regex::Regex;
use std::sync::OnceLock;

fn answer_regex() -> &'static Regex {
    static ANSWER: OnceLock<Regex> = OnceLock::new();
    // Digits, then an arrow or colon separator, then the answer text.
    ANSWER.get_or_init(|| Regex::new(r"^(\d+)\s*[→:]\s*(.+)$").expect("invalid answer regex"))
}

/// Parses one answer line of the shape `3 → hub` or `3: hub`.
///
/// Lines without the shape yield `None` and are discarded by the fold; no
/// error is raised.
pub fn parse_answer_line(line: &str) -> Option<(u32, String)> {
    let caps = answer_regex().captures(line.trim())?;
    let number: u32 = caps[1].parse().ok()?;
    Some((number, caps[2].trim().to_string()))
}
