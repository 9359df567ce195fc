/// Parameters for `GET /movies`. Only set filters are sent; `limit` always is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub limit: u32,
    pub search: Option<String>,
    pub genre: Option<String>,
    pub keyword: Option<String>,
    pub actor: Option<String>,
}

impl MovieQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            search: None,
            genre: None,
            keyword: None,
            actor: None,
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string())];
        let filters = [
            ("search", &self.search),
            ("genre", &self.genre),
            ("keyword", &self.keyword),
            ("actor", &self.actor),
        ];
        for (name, value) in filters {
            if let Some(value) = value {
                params.push((name, value.clone()));
            }
        }
        params
    }
}
