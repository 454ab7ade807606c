//! Entry name validation
//!
//! Guards user-supplied entry names at the shell boundary. Names coming
//! from a directory listing never contain a path separator or a parent
//! reference, so anything else must not reach past the open directory.

/// Whether a user-supplied entry name stays inside the open directory.
pub fn is_safe_entry_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_entry_names() {
        assert!(is_safe_entry_name("Holidays"));
        assert!(is_safe_entry_name("a.jpeg"));
        assert!(is_safe_entry_name("notes.txt"));
    }

    #[test]
    fn test_rejects_separators_and_parent_references() {
        assert!(!is_safe_entry_name(""));
        assert!(!is_safe_entry_name("."));
        assert!(!is_safe_entry_name(".."));
        assert!(!is_safe_entry_name("../secret.jpeg"));
        assert!(!is_safe_entry_name("a/b"));
        assert!(!is_safe_entry_name("a\\b"));
    }
}
