/// The two screens a path can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Detail view; the segment is kept exactly as it appeared in the path.
    Movie(String),
}

impl Route {
    /// Resolves a path against the route table (`/` and `/movie/:id`).
    ///
    /// Anything else, including `/movie/` with an empty or multi-segment id, has no route.
    pub fn parse(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(Self::Home);
        }

        let id = path.strip_prefix("/movie/")?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Self::Movie(id.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => String::from("/"),
            Self::Movie(id) => format!("/movie/{id}"),
        }
    }
}

/// Path a card navigates to when activated.
pub fn movie_path(id: u64) -> String {
    format!("/movie/{id}")
}
