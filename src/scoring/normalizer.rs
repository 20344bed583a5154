//! Text normalization for the scoring pipeline

/// Lower-cases the input, replaces every character that is not a lowercase
/// letter, digit, `+`, or whitespace with a space, then collapses runs of
/// whitespace into single spaces and trims.
///
/// `+` survives normalization so tokens like "c++" stay intact downstream.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
