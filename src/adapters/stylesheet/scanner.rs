//! Class selector scanner
//!
//! Lists the class selectors that appear in selector preludes, i.e. the text
//! in front of every `{`. This is a token scan over comment- and string-free
//! source, not a stylesheet parser: nesting is not resolved and `&-suffix`
//! selectors are not expanded. Only the `:global(...)` function form is
//! dropped; classes after a bare `:global` are still collected.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::ClassNames;

static CLASS_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(-?[_a-zA-Z][_a-zA-Z0-9-]*)").expect("class selector regex is valid")
});

/// Stands in for a `#{...}` interpolation in cleaned source
const INTERPOLATION: char = '\u{1}';

/// Scan stylesheet source for class names
///
/// Returns a message describing the first structural problem found.
pub fn scan_class_names(source: &str) -> Result<ClassNames, String> {
    let cleaned = strip_noise(source)?;
    let mut class_names = ClassNames::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in cleaned.char_indices() {
        match c {
            '{' => {
                collect_prelude(&cleaned[start..i], &mut class_names);
                depth += 1;
                start = i + 1;
            },
            '}' => {
                depth = depth.checked_sub(1).ok_or_else(|| "unexpected '}'".to_string())?;
                start = i + 1;
            },
            ';' => start = i + 1,
            _ => {},
        }
    }

    if depth > 0 {
        return Err(format!("{depth} unclosed block(s)"));
    }
    Ok(class_names)
}

fn collect_prelude(prelude: &str, class_names: &mut ClassNames) {
    let prelude = prelude.trim();
    // At-rule preludes (@media, @supports, @keyframes) never declare classes
    if prelude.is_empty() || prelude.starts_with('@') {
        return;
    }
    let prelude = strip_global_groups(prelude);
    for capture in CLASS_SELECTOR.captures_iter(&prelude) {
        let Some(whole) = capture.get(0) else { continue };
        // Names built from interpolations are only known after compilation
        if prelude[whole.end()..].starts_with(INTERPOLATION) {
            continue;
        }
        class_names.insert(&capture[1]);
    }
}

/// Remove every `:global(...)` group, honoring nested parentheses
fn strip_global_groups(prelude: &str) -> String {
    const OPEN: &str = ":global(";
    let mut out = String::with_capacity(prelude.len());
    let mut rest = prelude;

    while let Some(at) = rest.find(OPEN) {
        out.push_str(&rest[..at]);
        let inner = &rest[at + OPEN.len()..];
        let mut depth = 1usize;
        let mut end = inner.len();
        for (i, c) in inner.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        end = i + 1;
                        break;
                    }
                },
                _ => {},
            }
        }
        rest = &inner[end..];
    }
    out.push_str(rest);
    out
}

/// Drop comments, quoted strings and `#{...}` interpolations
fn strip_noise(source: &str) -> Result<String, String> {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut prev = '\n';

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut closed = false;
                let mut last = '\0';
                for n in chars.by_ref() {
                    if last == '*' && n == '/' {
                        closed = true;
                        break;
                    }
                    last = n;
                }
                if !closed {
                    return Err("unterminated comment".to_string());
                }
                out.push(' ');
                prev = ' ';
                continue;
            },
            // `http://` and `url(//host)` are values, not comments
            '/' if chars.peek() == Some(&'/') && !matches!(prev, ':' | '(') => {
                for n in chars.by_ref() {
                    if n == '\n' {
                        break;
                    }
                }
                out.push('\n');
                prev = '\n';
                continue;
            },
            '"' | '\'' => {
                let quote = c;
                let mut escaped = false;
                let mut closed = false;
                for n in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if n == '\\' {
                        escaped = true;
                    } else if n == quote {
                        closed = true;
                        break;
                    } else if n == '\n' {
                        break;
                    }
                }
                if !closed {
                    return Err("unterminated string".to_string());
                }
                out.push_str("\"\"");
                prev = '"';
                continue;
            },
            '#' if chars.peek() == Some(&'{') => {
                chars.next();
                let mut depth = 1usize;
                for n in chars.by_ref() {
                    match n {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        },
                        _ => {},
                    }
                }
                if depth > 0 {
                    return Err("unterminated interpolation".to_string());
                }
                out.push(INTERPOLATION);
                prev = INTERPOLATION;
                continue;
            },
            _ => {},
        }
        out.push(c);
        prev = c;
    }

    Ok(out)
}
