use url::form_urlencoded;

pub const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Appends the form-urlencoded `term` to `base`.
pub fn build_query_url(base: &str, term: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
    format!("{base}{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_term_is_appended() {
        assert_eq!(
            build_query_url(API_ENDPOINT, "React"),
            "https://hn.algolia.com/api/v1/search?query=React"
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(
            build_query_url("http://h/s?query=", "rust & c++"),
            "http://h/s?query=rust+%26+c%2B%2B"
        );
    }

    #[test]
    fn empty_term_yields_bare_base() {
        assert_eq!(build_query_url(API_ENDPOINT, ""), API_ENDPOINT);
    }
}
