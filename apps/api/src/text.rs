/// Normalizes extracted text: each line is trimmed, runs of whitespace inside a line collapse
/// to a single space, and blank lines are dropped. Line breaks between non-blank lines survive.
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
