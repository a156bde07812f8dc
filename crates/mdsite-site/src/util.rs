//! Shared utility functions for page assembly.

/// Compute the relative link from one document slug to another.
///
/// Both arguments are slugs without leading slash. The last segment of
/// `from` is the current document; links resolve against everything before
/// it. Unlike directory URLs, `to` always names a document, so its last
/// segment is kept even when it matches a directory of `from`.
///
/// # Examples
///
/// ```
/// use mdsite_site::relative_path;
///
/// assert_eq!(relative_path("Guides/install", "Guides/faq"), "faq");
/// assert_eq!(relative_path("", "Guides/install"), "Guides/install");
/// assert_eq!(relative_path("Guides/install", "home"), "../home");
/// ```
pub fn relative_path(from: &str, to: &str) -> String {
    let from_segs: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to_segs: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    let Some((to_name, to_dir)) = to_segs.split_last() else {
        return "./".to_owned();
    };
    let from_dir = &from_segs[..from_segs.len().saturating_sub(1)];

    let common = from_dir
        .iter()
        .zip(to_dir)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec![".."; from_dir.len() - common];
    parts.extend(&to_dir[common..]);
    parts.push(*to_name);
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_siblings() {
        assert_eq!(relative_path("faq", "guide"), "guide");
    }

    #[test]
    fn test_relative_path_siblings_nested() {
        assert_eq!(relative_path("Guides/install", "Guides/faq"), "faq");
    }

    #[test]
    fn test_relative_path_same_page() {
        assert_eq!(relative_path("Guides/install", "Guides/install"), "install");
    }

    #[test]
    fn test_relative_path_root_to_nested() {
        assert_eq!(relative_path("", "Guides/Deep/tuning"), "Guides/Deep/tuning");
    }

    #[test]
    fn test_relative_path_deep_to_shallow() {
        assert_eq!(relative_path("Guides/Deep/tuning", "home"), "../../home");
    }

    #[test]
    fn test_relative_path_across_branches() {
        assert_eq!(
            relative_path("Guides/Deep/tuning", "Reference/api"),
            "../../Reference/api"
        );
    }

    #[test]
    fn test_relative_path_to_document_named_like_parent_dir() {
        assert_eq!(relative_path("Guides/install", "Guides"), "../Guides");
    }

    #[test]
    fn test_relative_path_empty_target() {
        assert_eq!(relative_path("guide", ""), "./");
    }
}
