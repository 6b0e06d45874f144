//! Request path to chapter identifier mapping.

use story_graph::ChapterId;

/// Resolve a request path to the chapter it names.
///
/// Surrounding whitespace is trimmed; an empty path or `/` names the entry
/// chapter. Otherwise exactly one leading `/` is removed and the remainder is
/// taken verbatim: no percent-decoding, no collapsing of repeated separators,
/// and nested segments stay part of a single identifier.
pub fn chapter_id_for_path(path: &str) -> &str {
    let path = path.trim();
    if path.is_empty() || path == "/" {
        return ChapterId::ENTRY;
    }
    path.strip_prefix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_and_empty_map_to_entry() {
        assert_eq!(chapter_id_for_path("/"), "intro");
        assert_eq!(chapter_id_for_path(""), "intro");
        assert_eq!(chapter_id_for_path("  / \t"), "intro");
        assert_eq!(chapter_id_for_path("   "), "intro");
    }

    #[test]
    fn test_strips_one_leading_separator() {
        assert_eq!(chapter_id_for_path("/left-path"), "left-path");
        assert_eq!(chapter_id_for_path("//left-path"), "/left-path");
        assert_eq!(chapter_id_for_path(" /intro "), "intro");
    }

    #[test]
    fn test_no_further_normalization() {
        assert_eq!(chapter_id_for_path("/a/b"), "a/b");
        assert_eq!(chapter_id_for_path("/new%20york"), "new%20york");
        assert_eq!(chapter_id_for_path("/trailing/"), "trailing/");
        assert_eq!(chapter_id_for_path("/Intro"), "Intro");
    }

    #[test]
    fn test_path_without_separator_used_as_is() {
        assert_eq!(chapter_id_for_path("denver"), "denver");
    }
}
