use crate::nav::Route;

/// Scroll offset (logical points) past which the header condenses.
pub const HEADER_SCROLL_THRESHOLD: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct AppState {
    pub route: Route,
    pub menu_open: bool,
    pub header_condensed: bool,
    /// Set on every navigation; the shell consumes it to jump back to top.
    pub scroll_reset_pending: bool,
    /// Bumped only on real category changes; keys the grid cross-fade.
    pub grid_generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Home,
            menu_open: false,
            header_condensed: false,
            scroll_reset_pending: false,
            grid_generation: 0,
        }
    }
}
