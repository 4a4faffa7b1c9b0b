//! Cache key builders for the explorer's query cache.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Prefix applied to all explorer cache keys.
const PREFIX: &str = "docex";

/// Cache key for the full folder listing.
pub fn folders() -> String {
    format!("{PREFIX}:folders")
}

/// Cache key for the file listing of one folder.
pub fn files(folder_id: i64) -> String {
    format!("{PREFIX}:files:{folder_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct_per_folder() {
        assert_eq!(folders(), "docex:folders");
        assert_eq!(files(7), "docex:files:7");
        assert_ne!(files(7), files(8));
    }
}
