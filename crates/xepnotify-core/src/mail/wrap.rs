//! Paragraph wrapping for plain-text mail bodies.

/// Column limit for body lines
pub const WRAP_WIDTH: usize = 70;

/// Wrap every line of `text` to [`WRAP_WIDTH`] columns
///
/// Lines are wrapped independently; empty lines are kept so paragraph
/// breaks survive.
pub fn wrap_text(text: &str) -> String {
    text.split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, WRAP_WIDTH)
                    .into_iter()
                    .map(|wrapped| wrapped.into_owned())
                    .collect()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
