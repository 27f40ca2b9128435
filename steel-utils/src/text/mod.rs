//! Translation lookup for display names.
//!
//! Keys follow the legacy `<prefix>.<name>.name` layout and values use
//! java-style format placeholders (`%s`, `%1$s`, `%%`).

use rustc_hash::FxHashMap;

const EN_US: &str = include_str!("../../assets/en_us.json");

/// A table of translation keys to localized strings.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: FxHashMap<String, String>,
}

impl Translations {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the bundled `en_us` table.
    #[must_use]
    pub fn vanilla() -> Self {
        match Self::from_json(EN_US) {
            Ok(translations) => translations,
            Err(err) => {
                log::error!("Bundled translations are invalid: {err}");
                Self::new()
            }
        }
    }

    /// Parses a flat JSON object of key/value strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: FxHashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Adds or replaces a translation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns whether a translation exists for `key`.
    #[must_use]
    pub fn can_translate(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Translates `key`, falling back to the key itself.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Translates `key` and substitutes `args` into its placeholders.
    #[must_use]
    pub fn translate_formatted(&self, key: &str, args: &[&str]) -> String {
        match self.entries.get(key) {
            Some(pattern) => format_args_java(pattern, args),
            None => key.to_string(),
        }
    }
}

/// Substitutes `%s`, `%d`, `%n$s` and `%%` placeholders.
///
/// Missing arguments leave the placeholder untouched.
fn format_args_java(pattern: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut arg = String::new();
        while let Some(&d) = chars.peek() {
            if d.is_ascii_digit() || d == '$' {
                arg.push(d);
                chars.next();
            } else {
                break;
            }
        }

        match chars.next() {
            Some('%') if arg.is_empty() => out.push('%'),
            Some(conv @ ('s' | 'd')) => {
                let index = match arg.strip_suffix('$') {
                    Some(position) => position.parse::<usize>().ok().and_then(|p| p.checked_sub(1)),
                    None if arg.is_empty() => {
                        next_arg += 1;
                        Some(next_arg - 1)
                    }
                    None => None,
                };
                match index.and_then(|i| args.get(i)) {
                    Some(arg) => out.push_str(arg),
                    None => {
                        out.push('%');
                        out.push_str(&arg);
                        out.push(conv);
                    }
                }
            }
            Some(other) => {
                out.push('%');
                out.push_str(&arg);
                out.push(other);
            }
            None => {
                out.push('%');
                out.push_str(&arg);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanilla_table() {
        let translations = Translations::vanilla();
        assert!(translations.can_translate("item.bucket.name"));
        assert_eq!(translations.translate("item.bucket.name"), "Bucket");
        assert_eq!(translations.translate("missing.key"), "missing.key");
    }

    #[test]
    fn test_formatting() {
        let mut translations = Translations::new();
        translations.insert("a", "%s Bucket");
        translations.insert("b", "%2$s then %1$s");
        translations.insert("c", "100%% %s");
        assert_eq!(translations.translate_formatted("a", &["Oil"]), "Oil Bucket");
        assert_eq!(translations.translate_formatted("b", &["x", "y"]), "y then x");
        assert_eq!(translations.translate_formatted("c", &["pure"]), "100% pure");
        assert_eq!(translations.translate_formatted("a", &[]), "%s Bucket");
        assert_eq!(translations.translate_formatted("nope", &["x"]), "nope");
    }
}
