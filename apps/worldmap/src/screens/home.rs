use repose_core::prelude::*;
use repose_ui::scroll::{ScrollArea, remember_scroll_state};
use repose_ui::*;
use worldmap_core::content::{APP_TITLE, HOME_GREETING, POPULAR_DESTINATIONS, RECENT_LOCATIONS};
use worldmap_core::{NavTab, QuickAction};

use crate::app::SharedShell;
use crate::ui::{BottomNav, Gap, Header, PlaceCard, SectionTitle};

pub fn screen(shell: &SharedShell) -> View {
    let active = match shell.borrow().main() {
        Some(main) => main.home.active(),
        None => NavTab::Home,
    };
    let scroll = remember_scroll_state("home:content");

    let quick_actions = Grid(
        2,
        Modifier::new().fill_max_width(),
        QuickAction::ALL
            .iter()
            .map(|&action| {
                let bg = match action {
                    QuickAction::ViewMap => theme().primary,
                    QuickAction::Search => Color::from_hex("#FACC15"),
                };
                Button(action.label(), {
                    let shell = shell.clone();
                    move || shell.borrow_mut().quick_action(action)
                })
                .modifier(
                    Modifier::new()
                        .height(96.0)
                        .padding(12.0)
                        .background(bg)
                        .clip_rounded(16.0),
                )
            })
            .collect(),
        12.0,
        12.0,
    );

    let recent = Column(Modifier::new().fill_max_width()).child(
        RECENT_LOCATIONS
            .iter()
            .flat_map(|p| [PlaceCard(p.name, p.detail), Gap(8.0)])
            .collect::<Vec<_>>(),
    );

    let popular = Grid(
        2,
        Modifier::new().fill_max_width(),
        POPULAR_DESTINATIONS
            .iter()
            .map(|p| PlaceCard(p.name, p.detail))
            .collect(),
        12.0,
        12.0,
    );

    Column(Modifier::new().fill_max_size()).child((
        Header(APP_TITLE, Some(HOME_GREETING)),
        ScrollArea(
            Modifier::new().fill_max_width().flex_grow(1.0),
            scroll,
            Column(Modifier::new().fill_max_width().padding(20.0)).child((
                SectionTitle("Quick Actions"),
                quick_actions,
                Gap(20.0),
                SectionTitle("🕒 Recent Locations"),
                recent,
                Gap(12.0),
                SectionTitle("📈 Popular Destinations"),
                popular,
            )),
        ),
        BottomNav(active, {
            let shell = shell.clone();
            move |tab| shell.borrow_mut().select_tab(tab)
        }),
    ))
}
