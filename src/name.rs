/// Key-name policy: validation and the mapping to datastore keys.
///
/// A key name is acceptable only if it survives filesystem sanitization
/// unchanged. This keeps names safe to embed in datastore keys and file
/// names on every platform, and rejects traversal attempts outright.

/// Characters that never appear in a portable file name.
const ILLEGAL_CHARS: &[char] = &['/', '\\', '?', '<', '>', ':', '*', '|', '"'];

/// Device names reserved on Windows, bare or with any extension.
const WINDOWS_RESERVED: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Returns true iff `name` is non-empty and byte-equal to the sanitized
/// form of its whitespace-trimmed self.
pub fn validate_key_name(name: &str) -> bool {
    !name.is_empty() && name == sanitize(name.trim())
}

/// Reduce a candidate name to its filesystem-safe form: drop path
/// separators, control characters and other illegal characters, reject
/// pure-dot names and reserved device names, trim trailing dots/spaces.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control() && !ILLEGAL_CHARS.contains(c))
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return String::new();
    }

    let stem = cleaned.split('.').next().unwrap_or("");
    if WINDOWS_RESERVED.iter().any(|r| stem.eq_ignore_ascii_case(r)) {
        return String::new();
    }

    cleaned.trim_end_matches(&['.', ' '][..]).to_string()
}

/// Datastore key for a validated name: `/<name>`.
pub fn to_datastore_key(name: &str) -> String {
    format!("/{name}")
}

/// Inverse of [`to_datastore_key`].
pub fn from_datastore_key(key: &str) -> &str {
    key.strip_prefix('/').unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_names() {
        for name in ["rsa-key", "backup.2024", "node identity", "key_01", "ключ"] {
            assert!(validate_key_name(name), "expected '{name}' to validate");
        }
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(!validate_key_name(""));
        assert!(!validate_key_name("    "));
        assert!(!validate_key_name(" padded "));
        assert!(!validate_key_name("\t"));
    }

    #[test]
    fn test_rejects_path_traversal() {
        assert!(!validate_key_name("../../nasty"));
        assert!(!validate_key_name("a/b"));
        assert!(!validate_key_name("a\\b"));
        assert!(!validate_key_name(".."));
        assert!(!validate_key_name("."));
    }

    #[test]
    fn test_rejects_illegal_characters() {
        for name in ["a:b", "a*b", "a?b", "a|b", "a<b", "a>b", "a\"b", "a\x07b"] {
            assert!(!validate_key_name(name), "expected '{name}' to be rejected");
        }
    }

    #[test]
    fn test_rejects_reserved_device_names() {
        assert!(!validate_key_name("con"));
        assert!(!validate_key_name("NUL"));
        assert!(!validate_key_name("com1"));
        assert!(!validate_key_name("aux.txt"));
        // not reserved: the stem merely starts with a reserved word
        assert!(validate_key_name("console"));
        assert!(validate_key_name("config.toml"));
    }

    #[test]
    fn test_rejects_trailing_dots_and_spaces() {
        assert!(!validate_key_name("name."));
        assert!(!validate_key_name("name "));
    }

    #[test]
    fn test_datastore_key_mapping() {
        assert_eq!(to_datastore_key("rsa-key"), "/rsa-key");
        assert_eq!(from_datastore_key("/rsa-key"), "rsa-key");
        assert_eq!(from_datastore_key(&to_datastore_key("a")), "a");
    }
}
