//! Environment variable validation with typo suggestions

/// Validator for enumerated environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, or explain why it was rejected.
    ///
    /// The error string is a complete, user-facing warning.
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, String>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| {
            format!(
                "invalid {} value '{}'{}; valid values: {}",
                self.var_name,
                value,
                self.suggest(value),
                self.valid_values.join(", ")
            )
        })
    }

    fn suggest(&self, value: &str) -> String {
        match closest(&value.to_lowercase(), self.valid_values) {
            Some((suggested, dist)) if dist > 0 => format!(" (did you mean '{}'?)", suggested),
            _ => String::new(),
        }
    }
}

/// Closest candidate within two edits, with its distance
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<(&'c str, usize)> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(input, c)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
