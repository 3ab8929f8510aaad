pub const COUNT_MIN: i64 = 1;
pub const COUNT_MAX: i64 = 50;

pub fn parse_count(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|count| (COUNT_MIN..=COUNT_MAX).contains(count))
}

pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
