use serde::Serialize;

/// Screens reachable from the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    /// Hosts the analysis console
    Console,
    Documentation,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 4] =
        [Screen::Home, Screen::Console, Screen::Documentation, Screen::Settings];

    /// Resolve a URL path. A trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        Self::ALL.into_iter().find(|screen| screen.path() == normalized)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Console => "/console",
            Screen::Documentation => "/documentation",
            Screen::Settings => "/settings",
        }
    }
}
