/// Incremental free-text query state. The query feeds the filter engine
/// live while typing; confirming just leaves search mode with the query
/// still applied.
pub struct SearchState {
    pub search_mode: bool,
    pub query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            search_mode: false,
            query: String::new(),
        }
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// Leaves search mode and discards the query.
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.query.clear();
    }

    /// Leaves search mode keeping the query applied.
    pub fn confirm_search(&mut self) {
        self.search_mode = false;
    }

    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }
}
