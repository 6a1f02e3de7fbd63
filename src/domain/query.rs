use url::form_urlencoded;

/// Filter describing one page request against the quote source.
///
/// A value of `0` for `page` or `limit` means "unset"; unset fields are
/// omitted from the serialized query string, matching the backend's
/// treatment of absent parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub author: Option<String>,
    pub genre: Option<String>,
    pub query: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl QueryOptions {
    pub fn for_genre(genre: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            ..Self::default()
        }
    }

    pub fn for_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Self::default()
        }
    }

    pub fn for_search(term: impl Into<String>) -> Self {
        Self {
            query: Some(term.into()),
            ..Self::default()
        }
    }

    /// Returns a copy pinned to the given page and page size.
    pub fn paged(&self, page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..self.clone()
        }
    }

    /// Returns a copy with the free-text term set or replaced. Author and
    /// genre are preserved; the backend ANDs all set fields together.
    pub fn with_query(&self, term: impl Into<String>) -> Self {
        Self {
            query: Some(term.into()),
            ..self.clone()
        }
    }

    /// Serializes the set fields as `key=value&...` in a fixed order
    /// (author, genre, query, limit, page) with percent-encoded values.
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(author) = self.author.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("author", author);
        }
        if let Some(genre) = self.genre.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("genre", genre);
        }
        if let Some(query) = self.query.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("query", query);
        }
        if self.limit > 0 {
            serializer.append_pair("limit", &self.limit.to_string());
        }
        if self.page > 0 {
            serializer.append_pair("page", &self.page.to_string());
        }
        serializer.finish()
    }

    /// Human-readable summary of the active filter, e.g. `wisdom & journey`.
    pub fn describe(&self) -> String {
        [&self.genre, &self.author, &self.query]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_serialize_to_nothing() {
        assert_eq!(QueryOptions::default().query_string(), "");
    }

    #[test]
    fn test_field_order_is_fixed() {
        let options = QueryOptions {
            author: Some("Lao Tzu".into()),
            genre: Some("wisdom".into()),
            query: Some("journey".into()),
            page: 2,
            limit: 9,
        };
        assert_eq!(
            options.query_string(),
            "author=Lao+Tzu&genre=wisdom&query=journey&limit=9&page=2"
        );
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let options = QueryOptions::for_genre("age").paged(1, 9);
        assert_eq!(options.query_string(), "genre=age&limit=9&page=1");
    }

    #[test]
    fn test_zero_page_and_limit_are_omitted() {
        let options = QueryOptions::for_search("love");
        assert_eq!(options.query_string(), "query=love");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let options = QueryOptions::for_author("Antoine de Saint-Exupéry");
        assert_eq!(
            options.query_string(),
            "author=Antoine+de+Saint-Exup%C3%A9ry"
        );
    }

    #[test]
    fn test_paged_leaves_filter_untouched() {
        let filter = QueryOptions::for_genre("age");
        let paged = filter.paged(3, 9);
        assert_eq!(paged.genre.as_deref(), Some("age"));
        assert_eq!(paged.page, 3);
        assert_eq!(paged.limit, 9);
        assert_eq!(filter.page, 0);
    }

    #[test]
    fn test_with_query_preserves_author_and_genre() {
        let filter = QueryOptions::for_genre("age").with_query("old");
        assert_eq!(filter.genre.as_deref(), Some("age"));
        assert_eq!(filter.query.as_deref(), Some("old"));

        let replaced = filter.with_query("young");
        assert_eq!(replaced.query.as_deref(), Some("young"));
        assert_eq!(replaced.genre.as_deref(), Some("age"));
    }

    #[test]
    fn test_describe_joins_set_fields() {
        let filter = QueryOptions::for_genre("age").with_query("old");
        assert_eq!(filter.describe(), "age & old");
        assert_eq!(QueryOptions::default().describe(), "");
    }
}
