//! Per-browser view state and the refresh decision
//!
//! Refreshes are pulled, never pushed: input only sets flags, and the
//! browser acts on them during the next measurement pass. [`ViewState::next_step`]
//! turns the flags into the single [`RefreshStep`] to take this cycle.

use std::time::{Duration, Instant};

/// What the browser does during one measurement pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStep {
    /// Nothing to do; the previous results stay on screen
    Idle,
    /// A refresh is due but the user is still typing
    DebounceWait,
    /// Waiting on the catalog loader; owned definitions are shown meanwhile
    Loading,
    /// Rebuild ownership, filter, sort and paginate
    Refreshing,
    /// Only the page changed; re-slice the existing results
    RepaginateOnly,
}

/// Search, paging and scheduling state of one browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Current query
    pub search_text: String,
    /// Include catalog definitions the caller does not own
    pub show_all: bool,
    /// Page size; 0 disables paging
    pub search_limit: usize,
    /// 1-based page
    pub current_page: usize,
    /// Results after filtering
    pub match_count: usize,
    /// Pages after the last pagination
    pub page_count: usize,
    /// Refreshes are held back until this instant
    pub debounce_deadline: Option<Instant>,
    /// Filtering must run again
    pub needs_refresh: bool,
    /// Only pagination must run again
    pub pending_pagination: bool,
}

impl ViewState {
    /// Fresh state with a refresh already scheduled
    #[must_use]
    pub const fn new(search_limit: usize) -> Self {
        Self {
            search_text: String::new(),
            show_all: false,
            search_limit,
            current_page: 1,
            match_count: 0,
            page_count: 1,
            debounce_deadline: None,
            needs_refresh: true,
            pending_pagination: false,
        }
    }

    /// Decide what to do at `now`
    #[must_use]
    pub fn next_step(&self, now: Instant, loading: bool) -> RefreshStep {
        if self.needs_refresh {
            if self.debounce_deadline.is_some_and(|deadline| now < deadline) {
                RefreshStep::DebounceWait
            } else {
                RefreshStep::Refreshing
            }
        } else if self.pending_pagination {
            RefreshStep::RepaginateOnly
        } else if loading {
            RefreshStep::Loading
        } else {
            RefreshStep::Idle
        }
    }

    /// Schedule a refresh after a quiet period of `delay` from `now`
    ///
    /// Each call pushes the deadline out again, so a burst of keystrokes
    /// collapses into one refresh.
    pub fn schedule_debounced(&mut self, now: Instant, delay: Duration) {
        self.debounce_deadline = Some(now + delay);
        self.needs_refresh = true;
    }

    /// Schedule a refresh for the next cycle, ignoring any debounce
    pub fn schedule_refresh(&mut self) {
        self.debounce_deadline = None;
        self.needs_refresh = true;
    }

    /// Mark that only the page slice must be recomputed
    pub const fn schedule_pagination(&mut self) {
        self.pending_pagination = true;
    }

    /// True when the page controls should be offered
    #[must_use]
    pub const fn is_paged(&self) -> bool {
        self.search_limit > 0 && self.match_count > self.search_limit
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(250);

    fn idle() -> ViewState {
        ViewState {
            needs_refresh: false,
            ..ViewState::new(10)
        }
    }

    #[test]
    fn test_new_state_wants_refresh() {
        let state = ViewState::new(10);
        assert_eq!(state.next_step(Instant::now(), false), RefreshStep::Refreshing);
    }

    #[test]
    fn test_idle_without_flags() {
        assert_eq!(idle().next_step(Instant::now(), false), RefreshStep::Idle);
    }

    #[test]
    fn test_loading_when_only_loader_is_pending() {
        assert_eq!(idle().next_step(Instant::now(), true), RefreshStep::Loading);
    }

    #[test]
    fn test_debounce_holds_refresh_until_deadline() {
        let start = Instant::now();
        let mut state = idle();
        state.schedule_debounced(start, DEBOUNCE);

        assert_eq!(state.next_step(start + Duration::from_millis(249), false), RefreshStep::DebounceWait);
        assert_eq!(state.next_step(start + DEBOUNCE, false), RefreshStep::Refreshing);
    }

    #[test]
    fn test_keystrokes_push_deadline_out() {
        let start = Instant::now();
        let mut state = idle();
        for i in 0..3 {
            state.schedule_debounced(start + Duration::from_millis(50 * i), DEBOUNCE);
        }
        let last = start + Duration::from_millis(100);
        assert_eq!(state.next_step(last + Duration::from_millis(200), false), RefreshStep::DebounceWait);
        assert_eq!(state.next_step(last + DEBOUNCE, false), RefreshStep::Refreshing);
    }

    #[test]
    fn test_submit_bypasses_debounce() {
        let start = Instant::now();
        let mut state = idle();
        state.schedule_debounced(start, DEBOUNCE);
        state.schedule_refresh();
        assert_eq!(state.next_step(start, false), RefreshStep::Refreshing);
    }

    #[test]
    fn test_refresh_wins_over_pagination() {
        let mut state = ViewState::new(10);
        state.schedule_pagination();
        assert_eq!(state.next_step(Instant::now(), false), RefreshStep::Refreshing);
        state.needs_refresh = false;
        assert_eq!(state.next_step(Instant::now(), false), RefreshStep::RepaginateOnly);
    }

    #[test]
    fn test_is_paged() {
        let mut state = idle();
        state.match_count = 11;
        assert!(state.is_paged());
        state.search_limit = 0;
        assert!(!state.is_paged());
    }
}
