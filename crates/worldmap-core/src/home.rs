/// Main screens reachable after onboarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Map,
}

/// Bottom navigation bar items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTab {
    Home,
    Map,
    Search,
    Saved,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 5] = [
        NavTab::Home,
        NavTab::Map,
        NavTab::Search,
        NavTab::Saved,
        NavTab::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Map => "Map",
            NavTab::Search => "Search",
            NavTab::Saved => "Saved",
            NavTab::Profile => "Profile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    ViewMap,
    Search,
}

impl QuickAction {
    pub const ALL: [QuickAction; 2] = [QuickAction::ViewMap, QuickAction::Search];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::ViewMap => "View Map",
            QuickAction::Search => "Search",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeState {
    active: NavTab,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            active: NavTab::Home,
        }
    }
}

impl HomeState {
    pub fn active(&self) -> NavTab {
        self.active
    }

    /// Highlight `tab`. Only the map tab leaves the home screen.
    pub fn select(&mut self, tab: NavTab) -> Option<Route> {
        self.active = tab;
        (tab == NavTab::Map).then_some(Route::Map)
    }

    pub fn quick_action(&mut self, action: QuickAction) -> Option<Route> {
        match action {
            // Navigates without touching the highlighted tab.
            QuickAction::ViewMap => Some(Route::Map),
            QuickAction::Search => self.select(NavTab::Search),
        }
    }
}
