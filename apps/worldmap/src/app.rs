use std::cell::RefCell;
use std::rc::Rc;

use repose_core::prelude::*;
use repose_ui::*;
use worldmap_core::{AppMode, Config, Route, Shell};

use crate::screens;

pub type SharedShell = Rc<RefCell<Shell>>;

/// Load config from the environment and build the shell the UI drives.
pub fn load_shell() -> anyhow::Result<SharedShell> {
    let config = Config::from_env()?;
    let mut shell = Shell::from_config(config)?;
    shell.on_onboarding_complete(|| log::info!("onboarding complete, entering main app"));
    Ok(Rc::new(RefCell::new(shell)))
}

fn campus_theme() -> Theme {
    let mut t = Theme::default();
    t.background = Color::from_hex("#F8FAFC");
    t.surface = Color::WHITE;
    t.on_surface = Color::from_hex("#1E293B");
    t.primary = Color::from_hex("#2563EB");
    t.on_primary = Color::WHITE;
    t.outline = Color::from_hex("#E2E8F0");
    t.button_bg = Color::from_hex("#2563EB");
    t.button_bg_hover = Color::from_hex("#1D4ED8");
    t.button_bg_pressed = Color::from_hex("#1E40AF");
    t
}

pub fn app(_s: &mut Scheduler, shell: &SharedShell) -> View {
    with_theme(campus_theme(), || {
        let (mode, route) = {
            let sh = shell.borrow();
            (sh.mode(), sh.main().map(|m| m.route()))
        };
        let content = match (mode, route) {
            (AppMode::Main, Some(Route::Map)) => screens::map_search::screen(shell),
            (AppMode::Main, _) => screens::home::screen(shell),
            (AppMode::Onboarding, _) => screens::onboarding::screen(shell),
        };

        Surface(
            Modifier::new()
                .fill_max_size()
                .background(theme().background),
            content,
        )
    })
}
