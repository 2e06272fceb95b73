//! `document.cookie` lookup

/// Find the value of cookie `key` in a `document.cookie` style string
/// (`a=1; b=2`). Whitespace around names and values is ignored; a value
/// may itself contain `=`.
pub fn read_cookie(cookies: &str, key: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name.trim() == key).then(|| value.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reads_xsrf() {
        let cookies = "theme=dark; _xsrf=2|abc|def|123; session=xyz";
        assert_eq!(read_cookie(cookies, "_xsrf").as_deref(), Some("2|abc|def|123"));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(read_cookie("a=1; b=2", "_xsrf"), None);
        assert_eq!(read_cookie("", "_xsrf"), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        assert_eq!(read_cookie("x_xsrf=1; _xsrf_old=2", "_xsrf"), None);
    }

    #[test]
    fn test_value_with_equals_is_kept_whole() {
        assert_eq!(read_cookie("_xsrf=YWJj==", "_xsrf").as_deref(), Some("YWJj=="));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(read_cookie("_xsrf=one; _xsrf=two", "_xsrf").as_deref(), Some("one"));
    }

    #[test]
    fn test_pair_without_equals_is_skipped() {
        assert_eq!(read_cookie("flag; _xsrf=t", "_xsrf").as_deref(), Some("t"));
    }

    proptest! {
        #[test]
        fn prop_finds_cookie_among_others(
            value in "[A-Za-z0-9|=_-]{1,40}",
            before in proptest::collection::vec("[a-z]{1,8}=[a-z0-9]{0,8}", 0..5),
            after in proptest::collection::vec("[a-z]{1,8}=[a-z0-9]{0,8}", 0..5),
        ) {
            let mut pairs = before.clone();
            pairs.push(format!("_xsrf={}", value));
            pairs.extend(after);
            let cookies = pairs.join("; ");
            prop_assert_eq!(read_cookie(&cookies, "_xsrf"), Some(value));
        }
    }
}
