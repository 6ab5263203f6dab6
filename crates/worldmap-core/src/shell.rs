//! Top-level controller. Owns the app mode and everything that hangs off it.

use crate::config::Config;
use crate::error::Result;
use crate::home::{HomeState, NavTab, QuickAction, Route};
use crate::onboarding::{Carousel, OnboardingError};
use crate::search::MapSearchState;
use crate::store::{Ephemeral, JsonFileStore, OnboardingStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    Onboarding,
    Main,
}

pub struct MainState {
    route: Route,
    pub home: HomeState,
    pub map: MapSearchState,
}

impl MainState {
    fn new(filters: &[String]) -> Self {
        Self {
            route: Route::Home,
            home: HomeState::default(),
            map: MapSearchState::new(filters.to_vec()),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }
}

enum Stage {
    Onboarding(Carousel),
    Main(MainState),
}

type Hook = Box<dyn FnMut()>;

pub struct Shell {
    stage: Stage,
    config: Config,
    store: Box<dyn OnboardingStore>,
    on_complete: Vec<Hook>,
}

impl Shell {
    /// Build the shell, consulting `store` once to decide whether onboarding runs.
    ///
    /// An unreadable store counts as "not completed".
    pub fn new(config: Config, store: Box<dyn OnboardingStore>) -> Result<Self> {
        let completed = store.has_completed().unwrap_or_else(|e| {
            log::warn!("could not read onboarding state: {e}");
            false
        });
        let stage = if completed {
            log::info!("onboarding already completed, starting on home");
            Stage::Main(MainState::new(&config.initial_filters))
        } else {
            Stage::Onboarding(Carousel::new(config.onboarding_pages())?)
        };
        Ok(Self {
            stage,
            config,
            store,
            on_complete: Vec::new(),
        })
    }

    /// Pick the store from `config.remember_onboarding`.
    pub fn from_config(config: Config) -> Result<Self> {
        let store: Box<dyn OnboardingStore> = if config.remember_onboarding {
            Box::new(JsonFileStore::new(config.state_file.clone()))
        } else {
            Box::new(Ephemeral)
        };
        Self::new(config, store)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> AppMode {
        match self.stage {
            Stage::Onboarding(_) => AppMode::Onboarding,
            Stage::Main(_) => AppMode::Main,
        }
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        match &self.stage {
            Stage::Onboarding(c) => Some(c),
            Stage::Main(_) => None,
        }
    }

    pub fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        match &mut self.stage {
            Stage::Onboarding(c) => Some(c),
            Stage::Main(_) => None,
        }
    }

    pub fn main(&self) -> Option<&MainState> {
        match &self.stage {
            Stage::Main(m) => Some(m),
            Stage::Onboarding(_) => None,
        }
    }

    pub fn main_mut(&mut self) -> Option<&mut MainState> {
        match &mut self.stage {
            Stage::Main(m) => Some(m),
            Stage::Onboarding(_) => None,
        }
    }

    /// Register a hook fired once when onboarding completes.
    pub fn on_onboarding_complete(&mut self, f: impl FnMut() + 'static) {
        self.on_complete.push(Box::new(f));
    }

    /// Acknowledge onboarding on its last page and switch to the main app.
    pub fn acknowledge(&mut self) -> Result<()> {
        let Stage::Onboarding(carousel) = &mut self.stage else {
            return Err(OnboardingError::AlreadyAcknowledged.into());
        };
        carousel.acknowledge()?;

        if let Err(e) = self.store.mark_completed() {
            log::warn!("could not persist onboarding completion: {e}");
        }
        self.stage = Stage::Main(MainState::new(&self.config.initial_filters));
        for hook in self.on_complete.iter_mut() {
            hook();
        }
        self.on_complete.clear();
        Ok(())
    }

    /// Show `route`. Each visit starts the screen from fresh local state.
    pub fn navigate(&mut self, route: Route) {
        let filters = self.config.initial_filters.clone();
        let Some(main) = self.main_mut() else {
            log::warn!("navigation to {route:?} requested during onboarding");
            return;
        };
        if main.route == route {
            return;
        }
        match route {
            Route::Home => main.home = HomeState::default(),
            Route::Map => main.map = MapSearchState::new(filters),
        }
        main.route = route;
        log::debug!("showing {route:?}");
    }

    /// Bottom-bar tap on whichever main screen is visible.
    pub fn select_tab(&mut self, tab: NavTab) {
        let Some(main) = self.main_mut() else {
            return;
        };
        let next = match main.route {
            Route::Home => main.home.select(tab),
            Route::Map => main.map.select(tab),
        };
        if let Some(route) = next {
            self.navigate(route);
        }
    }

    pub fn quick_action(&mut self, action: QuickAction) {
        let Some(main) = self.main_mut() else {
            return;
        };
        if let Some(route) = main.home.quick_action(action) {
            self.navigate(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::store::MemoryStore;

    fn shell() -> Shell {
        Shell::new(Config::default(), Box::new(Ephemeral)).unwrap()
    }

    #[test]
    fn onboarding_scenario_fires_hook_once() {
        let mut shell = shell();
        let fired = Rc::new(Cell::new(0));
        shell.on_onboarding_complete({
            let fired = fired.clone();
            move || fired.set(fired.get() + 1)
        });

        assert_eq!(shell.mode(), AppMode::Onboarding);
        let c = shell.carousel_mut().unwrap();
        assert_eq!(c.page_count(), 3);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_acknowledged());
        assert_eq!(c.on_scroll_position_changed(2.0 * 360.0, 360.0), 2);

        shell.acknowledge().unwrap();
        assert_eq!(fired.get(), 1);
        assert_eq!(shell.mode(), AppMode::Main);
        assert!(shell.carousel().is_none());
        assert_eq!(shell.main().unwrap().route(), Route::Home);

        assert!(shell.acknowledge().is_err());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn early_acknowledge_keeps_onboarding() {
        let mut shell = shell();
        let err = shell.acknowledge().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Onboarding(OnboardingError::NotOnFinalPage { current: 0, last: 2 })
        ));
        assert_eq!(shell.mode(), AppMode::Onboarding);
        assert!(shell.main().is_none());
        insta::assert_snapshot!(
            err,
            @"acknowledge is only available on the last page (at 0, last is 2)"
        );
    }

    #[test]
    fn wide_windows_can_finish_onboarding() {
        for viewport in [600.0, 800.0, 1280.0] {
            let mut shell = shell();
            let carousel = shell.carousel_mut().unwrap();
            let mut offset = 0.0;
            while offset < carousel.max_offset(viewport) {
                offset = (offset + viewport / 3.0).min(carousel.max_offset(viewport));
                carousel.sync_pager(offset, viewport, true);
            }
            assert_eq!(carousel.sync_pager(offset, viewport, false), None);
            assert_eq!(carousel.current_index(), 2, "viewport {viewport}");

            shell.acknowledge().unwrap();
            assert_eq!(shell.mode(), AppMode::Main);
        }
    }

    #[test]
    fn ephemeral_store_shows_onboarding_every_launch() {
        for _ in 0..2 {
            let mut shell = shell();
            assert_eq!(shell.mode(), AppMode::Onboarding);
            shell.carousel_mut().unwrap().on_scroll_position_changed(1e6, 360.0);
            shell.acknowledge().unwrap();
        }
    }

    #[test]
    fn completed_store_skips_onboarding() {
        let store = MemoryStore { completed: true };
        let shell = Shell::new(Config::default(), Box::new(store)).unwrap();
        assert_eq!(shell.mode(), AppMode::Main);
    }

    #[test]
    fn file_store_remembers_across_launches() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            remember_onboarding: true,
            state_file: dir.path().join("state.json"),
            ..Config::default()
        };

        let mut first = Shell::from_config(config.clone()).unwrap();
        assert_eq!(first.mode(), AppMode::Onboarding);
        first
            .carousel_mut()
            .unwrap()
            .on_scroll_position_changed(720.0, 360.0);
        first.acknowledge().unwrap();

        let second = Shell::from_config(config).unwrap();
        assert_eq!(second.mode(), AppMode::Main);
    }

    #[test]
    fn empty_page_list_is_rejected() {
        let config = Config {
            onboarding_pages: Some(vec![]),
            ..Config::default()
        };
        assert!(matches!(
            Shell::new(config, Box::new(Ephemeral)),
            Err(crate::Error::Onboarding(OnboardingError::NoPages))
        ));
    }

    fn main_shell() -> Shell {
        Shell::new(Config::default(), Box::new(MemoryStore { completed: true })).unwrap()
    }

    #[test]
    fn tabs_move_between_home_and_map() {
        let mut shell = main_shell();

        shell.select_tab(NavTab::Saved);
        assert_eq!(shell.main().unwrap().route(), Route::Home);
        assert_eq!(shell.main().unwrap().home.active(), NavTab::Saved);

        shell.select_tab(NavTab::Map);
        let main = shell.main().unwrap();
        assert_eq!(main.route(), Route::Map);
        assert_eq!(main.map.active(), NavTab::Map);

        shell.select_tab(NavTab::Profile);
        let main = shell.main().unwrap();
        assert_eq!(main.route(), Route::Home);
        assert_eq!(main.home.active(), NavTab::Home);
    }

    #[test]
    fn revisiting_map_resets_its_state() {
        let mut shell = main_shell();
        shell.quick_action(QuickAction::ViewMap);
        {
            let map = &mut shell.main_mut().unwrap().map;
            map.filters.remove("canteen");
            map.overlay.open();
        }
        shell.select_tab(NavTab::Home);
        assert_eq!(shell.main().unwrap().route(), Route::Home);

        shell.navigate(Route::Map);
        let map = &shell.main().unwrap().map;
        assert_eq!(map.filters.chips(), ["canteen".to_string()]);
        assert!(!map.overlay.is_open());
    }

    #[test]
    fn navigation_ignored_during_onboarding() {
        let mut shell = shell();
        shell.navigate(Route::Map);
        shell.select_tab(NavTab::Map);
        shell.quick_action(QuickAction::ViewMap);
        assert_eq!(shell.mode(), AppMode::Onboarding);
        assert!(shell.main().is_none());
    }
}
