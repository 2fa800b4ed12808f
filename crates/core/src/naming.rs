//! Name normalization: case conversions, selector building, path splitting

/// Split an input into lowercase words on `-`, `_`, whitespace, and
/// lower-to-upper case boundaries.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in input.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() || ch == '.' {
            if !current.is_empty() {
                words.push(current.clone());
                current.clear();
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(current.clone());
            current.clear();
            current.extend(ch.to_lowercase());
        } else {
            current.extend(ch.to_lowercase());
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `my-widget` / `my_widget` / `MyWidget` -> `myWidget`
pub fn camelize(input: &str) -> String {
    let words = split_words(input);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// `my-widget` -> `MyWidget`
pub fn classify(input: &str) -> String {
    split_words(input).iter().map(|w| capitalize(w)).collect()
}

/// `myWidget` / `MyWidget` -> `my-widget`
pub fn dasherize(input: &str) -> String {
    split_words(input).join("-")
}

/// Build the public selector for an artifact.
///
/// An explicit prefix always wins, including an explicitly empty one.
/// When no prefix was specified at all, a non-empty project default applies.
/// Otherwise the name stands alone. The name portion is camelized either way.
pub fn build_selector(name: &str, prefix: Option<&str>, default_prefix: &str) -> String {
    let camel = camelize(name);
    match prefix {
        Some("") => camel,
        Some(p) => format!("{p}-{camel}"),
        None if !default_prefix.is_empty() => format!("{default_prefix}-{camel}"),
        None => camel,
    }
}

/// Split a raw `path/name` argument into a canonical (directory, name) pair.
///
/// `admin/users/highlight` -> (`admin/users`, `highlight`); a bare `highlight`
/// resolves to an empty directory. Backslashes are normalized to `/`.
pub fn split_path_name(raw: &str) -> (String, String) {
    let normalized = raw.replace('\\', "/");
    let trimmed = normalized.trim_matches('/');
    match trimmed.rsplit_once('/') {
        Some((dir, name)) => (dir.to_string(), name.to_string()),
        None => (String::new(), trimmed.to_string()),
    }
}
