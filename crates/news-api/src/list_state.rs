//! List Page State
//!
//! Loading/ready/failed bookkeeping shared by the simple list pages.

use crate::models::NewsItem;

/// Where a page is in its fetch cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Identifies one issued load; only the newest ticket may apply its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Generation(u64);

impl Generation {
    pub(crate) fn next(&mut self) -> RequestTicket {
        self.0 += 1;
        RequestTicket(self.0)
    }

    pub(crate) fn is_current(&self, ticket: RequestTicket) -> bool {
        self.0 == ticket.0
    }
}

/// Items of a page that loads one list and shows it
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub phase: LoadPhase,
    pub items: Vec<T>,
    generation: Generation,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            items: Vec::new(),
            generation: Generation::default(),
        }
    }
}

impl<T> ListState<T> {
    /// Enter loading and clear any earlier failure
    pub fn begin_load(&mut self) -> RequestTicket {
        self.phase = LoadPhase::Loading;
        self.generation.next()
    }

    /// Apply a response; stale tickets are ignored
    pub fn finish_load(&mut self, ticket: RequestTicket, items: Vec<T>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.items = items;
        self.phase = LoadPhase::Ready;
        true
    }

    pub fn fail(&mut self, ticket: RequestTicket, message: impl Into<String>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.phase = LoadPhase::Failed(message.into());
        true
    }

    /// Loaded successfully but nothing came back
    pub fn is_empty_result(&self) -> bool {
        self.phase == LoadPhase::Ready && self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl ListState<NewsItem> {
    /// Favorites response: every item is favorited by definition
    pub fn finish_favorites(&mut self, ticket: RequestTicket, mut items: Vec<NewsItem>) -> bool {
        for item in &mut items {
            item.is_favorited = Some(true);
        }
        self.finish_load(ticket, items)
    }

    /// Local reconciliation after a card toggled; drops exactly the un-favorited id
    pub fn apply_favorite_change(&mut self, news_id: i64, is_favorited: bool) -> bool {
        if is_favorited {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id != news_id);
        self.items.len() != before
    }
}
