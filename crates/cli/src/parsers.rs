// crates/cli/src/parsers.rs

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input is not a valid number or is zero.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {s}"))?;
    if n == 0 {
        return Err(String::from("option's argument must be a number >= 1"));
    }
    Ok(n)
}

/// Split a string into whitespace-separated words, honoring single and
/// double quotes and backslash escapes. Used for the `LFOPTS` variable.
///
/// # Errors
/// Returns an error for an unbalanced quote or a trailing backslash.
pub fn split_words(s: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                } else if c == '\\' && q == '"' {
                    match chars.next() {
                        Some(escaped) => current.push(escaped),
                        None => return Err(String::from("trailing backslash")),
                    }
                } else {
                    current.push(c);
                }
            }
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => match chars.next() {
                    Some(escaped) => {
                        current.push(escaped);
                        in_word = true;
                    }
                    None => return Err(String::from("trailing backslash")),
                },
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(String::from("unbalanced quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
