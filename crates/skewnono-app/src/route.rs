//! Screen routing between the selector and the main view

use std::fmt;

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Fab/tool selection screen
    #[default]
    Selector,
    /// Main screen for a completed selection
    Main,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Selector, Route::Main];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Selector => "/",
            Route::Main => "/main",
        }
    }

    /// Human-readable screen name for headers
    pub fn title(&self) -> &'static str {
        match self {
            Route::Selector => "Select Fab & Tool",
            Route::Main => "Main",
        }
    }

    /// Resolve a path; unknown paths land on the selector
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or_default()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
