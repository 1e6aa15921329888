/// Truncate a string to at most `max_bytes` bytes at a character boundary.
/// Image providers reject prompts past ~2000 characters.
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &s[..end]
}

/// Strip one matching pair of surrounding quotes from a model reply.
/// Models often quote a requested headline even when told not to.
pub fn strip_surrounding_quotes(response: &str) -> &str {
    let trimmed = response.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}
