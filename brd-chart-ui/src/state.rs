//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use brd_core::AppContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded records and bounds (None until loaded, or if loading failed)
    pub context: Signal<Option<Rc<AppContext>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Fatal error message if the data could not be loaded
    pub error_msg: Signal<Option<String>>,
    /// Start date for date range filtering (YYYY-MM-DD)
    pub start_date: Signal<String>,
    /// End date for date range filtering (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Earliest selectable date (YYYY-MM-DD)
    pub min_date: Signal<String>,
    /// Latest selectable date (YYYY-MM-DD)
    pub max_date: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            context: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
