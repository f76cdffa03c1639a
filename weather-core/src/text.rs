//! String helpers for request building and display.

/// Escapes spaces as `%20`. Nothing else is touched.
pub fn encode_location(text: &str) -> String {
    text.replace(' ', "%20")
}

/// Upper-cases the first character of every space-separated word.
///
/// The rest of each word is left as is. Runs of spaces collapse to one and
/// the result is trimmed.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns `"1430"` into `"14:30"`. Anything that is not exactly four ASCII
/// digits comes back unchanged.
pub fn format_hour_label(four_digits: &str) -> String {
    if four_digits.len() == 4 && four_digits.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{}", &four_digits[..2], &four_digits[2..])
    } else {
        four_digits.to_string()
    }
}
