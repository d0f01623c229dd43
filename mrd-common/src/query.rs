/// Ordered URL query parameters.
///
/// Keeps the order the parameters arrived in so that rewriting `page` does
/// not shuffle the rest of the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    ///
    /// Malformed input yields an empty parameter set.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self(serde_urlencoded::from_str(query).unwrap_or_default())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, replacing the first occurrence in place and dropping any
    /// duplicates, or appending it when absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.0[index].1 = value;
                let mut seen = 0;
                self.0.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.0.push((key.to_string(), value)),
        }
    }

    /// Builder-style `set`, skipping blank values.
    pub fn with(mut self, key: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            let value = value.into();
            if !value.trim().is_empty() {
                self.set(key, value);
            }
        }
        self
    }

    /// Encode as `a=1&b=2` (no leading `?`).
    pub fn encode(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }

    /// Relative href pointing at `page` with every other parameter kept.
    pub fn href_for_page(&self, page: u32) -> String {
        let mut params = self.clone();
        params.set("page", page.to_string());
        format!("?{}", params.encode())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_question_mark() {
        let a = QueryParams::parse("?query=iron+maiden&page=2");
        let b = QueryParams::parse("query=iron%20maiden&page=2");
        assert_eq!(a, b);
        assert_eq!(a.get("query"), Some("iron maiden"));
        assert_eq!(a.get("page"), Some("2"));
        assert_eq!(a.get("size"), None);
    }

    #[test]
    fn test_href_overwrites_page_in_place() {
        let params = QueryParams::parse("query=opeth&page=2&size=20");
        assert_eq!(params.href_for_page(5), "?query=opeth&page=5&size=20");
    }

    #[test]
    fn test_href_appends_page_when_absent() {
        let params = QueryParams::parse("query=opeth");
        assert_eq!(params.href_for_page(3), "?query=opeth&page=3");
        assert_eq!(QueryParams::new().href_for_page(1), "?page=1");
    }

    #[test]
    fn test_set_drops_duplicate_keys() {
        let mut params = QueryParams::parse("page=1&query=x&page=7");
        params.set("page", "4");
        assert_eq!(params.encode(), "page=4&query=x");
    }

    #[test]
    fn test_with_skips_blank_values() {
        let params = QueryParams::new()
            .with("query", Some("  "))
            .with("from", None::<String>)
            .with("to", Some("2024-01-31"));
        assert_eq!(params.encode(), "to=2024-01-31");
    }

    #[test]
    fn test_values_are_encoded() {
        let params: QueryParams = [("query", "black & white")].into_iter().collect();
        assert_eq!(params.href_for_page(2), "?query=black+%26+white&page=2");
    }
}
