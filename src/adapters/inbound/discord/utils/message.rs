/// Discord rejects message content longer than this many characters.
pub const MESSAGE_LIMIT: usize = 2000;

#[must_use]
pub fn fit_to_message(content: &str, limit: usize) -> &str {
    match content.char_indices().nth(limit) {
        Some((end, _)) => &content[..end],
        None => content,
    }
}
