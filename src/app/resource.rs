/// Identifies one issued request. Later requests always get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

pub enum LoadState<T> {
    /// Nothing requested (view not shown).
    Idle,
    Loading,
    Loaded(T),
}

/// Remote data owned by one view.
///
/// Only the most recently issued request may fill it; responses carrying an
/// older token are dropped, so a slow reply can never overwrite a newer one.
pub struct Resource<T> {
    state: LoadState<T>,
    issued: u64,
    current: Option<RequestToken>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            issued: 0,
            current: None,
        }
    }
}

impl<T> Resource<T> {
    /// Starts a new request: discards any snapshot and returns the token the
    /// response must present.
    pub fn begin(&mut self) -> RequestToken {
        self.issued = self.issued.wrapping_add(1);
        let token = RequestToken(self.issued);
        self.current = Some(token);
        self.state = LoadState::Loading;
        token
    }

    /// Stores `value` if `token` belongs to the latest request. Returns whether it was applied.
    pub fn resolve(&mut self, token: RequestToken, value: T) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.state = LoadState::Loaded(value);
        true
    }

    /// Back to `Idle`; anything still in flight becomes stale.
    pub fn clear(&mut self) {
        self.current = None;
        self.state = LoadState::Idle;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn loaded(&self) -> Option<&T> {
        match &self.state {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
