//! Upload request construction

/// A file picked for upload. Built fresh for each submission and consumed
/// by it.
#[derive(Debug, Clone)]
pub struct UploadRequest<P> {
    pub filename: String,
    pub payload: P,
}

impl<P> UploadRequest<P> {
    pub fn new(filename: impl Into<String>, payload: P) -> Self {
        Self {
            filename: filename.into(),
            payload,
        }
    }
}

/// Everything the transport needs to issue the POST
#[derive(Debug, Clone)]
pub struct PreparedUpload<P> {
    pub url: String,
    /// `(header name, token)`; absent when the page has no XSRF cookie
    pub xsrf: Option<(String, String)>,
    pub payload: P,
}

/// Append the percent-encoded filename to the form action.
///
/// Encodes everything outside `A-Z a-z 0-9 - _ . ~`, so spaces, `&`, `#`
/// and non-ASCII names survive the trip.
pub fn upload_url(action: &str, param: &str, filename: &str) -> String {
    let separator = if action.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        action,
        separator,
        param,
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_filename() {
        assert_eq!(
            upload_url("https://example.com/recognize", "filename", "scan.pdf"),
            "https://example.com/recognize?filename=scan.pdf"
        );
    }

    #[test]
    fn test_space_and_ampersand_encoded() {
        assert_eq!(
            upload_url("/recognize", "filename", "tax & fees 2021.pdf"),
            "/recognize?filename=tax%20%26%20fees%202021.pdf"
        );
    }

    #[test]
    fn test_unicode_encoded() {
        assert_eq!(
            upload_url("/recognize", "filename", "résumé.pdf"),
            "/recognize?filename=r%C3%A9sum%C3%A9.pdf"
        );
    }

    #[test]
    fn test_existing_query_uses_ampersand() {
        assert_eq!(
            upload_url("/recognize?lang=en", "filename", "a.pdf"),
            "/recognize?lang=en&filename=a.pdf"
        );
    }

    proptest! {
        #[test]
        fn prop_encoded_name_has_no_reserved_chars(name in "\\PC{1,40}") {
            let url = upload_url("/recognize", "filename", &name);
            let encoded = url.strip_prefix("/recognize?filename=").unwrap();
            prop_assert!(encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
            prop_assert_eq!(urlencoding::decode(encoded).unwrap(), name);
        }
    }
}
