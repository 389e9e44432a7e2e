//! Class-list composition shared by every variant table.

use tailwind_fuse::tw_merge;

/// Join class fragments into a single space-separated list.
///
/// Fragments may themselves contain several classes. Empty fragments are skipped and a
/// token that already appeared earlier is dropped. Conflicting utilities are kept; use
/// [`with_extra`] when a later list must override an earlier one.
#[must_use]
pub fn join_classes<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    let mut seen: Vec<&str> = Vec::new();
    for token in fragments.into_iter().flat_map(str::split_whitespace) {
        if seen.contains(&token) {
            continue;
        }
        seen.push(token);
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Append an optional caller class to a computed base list.
///
/// Caller utilities win over conflicting base utilities (`p-2` replaces `p-6`,
/// `max-w-xl` replaces `max-w-lg`), following Tailwind merge rules.
#[must_use]
pub fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => tw_merge!(base, extra),
        _ => join_classes([base]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_empty_and_duplicates() {
        assert_eq!(
            join_classes(["flex gap-2", "", "  ", "gap-2 p-4"]),
            "flex gap-2 p-4"
        );
    }

    #[test]
    fn join_preserves_order() {
        assert_eq!(join_classes(["b a", "c"]), "b a c");
    }

    #[test]
    fn extra_is_appended_last() {
        assert_eq!(with_extra("rounded", Some("mt-4")), "rounded mt-4");
        assert_eq!(with_extra("rounded", None), "rounded");
        assert_eq!(with_extra("rounded", Some("  ")), "rounded");
    }

    #[test]
    fn caller_utilities_replace_conflicting_base() {
        let merged = with_extra("fixed p-6 max-w-lg rounded-lg", Some("max-w-xl p-2"));
        assert_eq!(merged, "fixed rounded-lg max-w-xl p-2");
    }

    #[test]
    fn unrelated_caller_utilities_are_kept_alongside_base() {
        assert_eq!(
            with_extra("flex items-center p-6 pt-0", Some("justify-end")),
            "flex items-center p-6 pt-0 justify-end"
        );
    }
}
