use repose_core::prelude::*;
use repose_ui::scroll::{ScrollArea, remember_scroll_state};
use repose_ui::*;
use worldmap_core::content::{ResultRow, SEARCH_PLACEHOLDER};
use worldmap_core::{MapSearchState, NavTab};

use crate::app::SharedShell;
use crate::ui::{BottomNav, Chip, Gap, Pill};

/// High bits keep query-field keys clear of layout-assigned view ids.
const QUERY_FIELD_KEY: u64 = 0x5EA2_C400_0000_0000;

/// Run `f` against the map-search state if the main app is showing.
fn with_map(shell: &SharedShell, f: impl FnOnce(&mut MapSearchState)) {
    if let Some(main) = shell.borrow_mut().main_mut() {
        f(&mut main.map);
    }
}

pub fn screen(shell: &SharedShell) -> View {
    let Some(state) = shell.borrow().main().map(|m| m.map.clone()) else {
        return Box(Modifier::new());
    };

    let top = if state.filter_bar_visible() {
        Column(Modifier::new().fill_max_width().padding(16.0)).child((
            SearchBar(shell),
            Gap(12.0),
            FilterRow(shell, state.filters.chips()),
        ))
    } else {
        Column(Modifier::new().fill_max_width().padding(16.0)).child(SearchBar(shell))
    };

    let mut layers = vec![
        MapBackdrop(),
        Box(Modifier::new()
            .absolute()
            .offset_top(0.0)
            .fill_max_width()
            .z_index(10.0))
        .child(top),
        Pill("🧭", || log::debug!("compass tapped")).modifier(
            Modifier::new()
                .absolute()
                .offset_right(24.0)
                .offset_bottom(96.0)
                .size(56.0, 56.0)
                .background(theme().surface)
                .clip_rounded(28.0)
                .z_index(10.0),
        ),
    ];
    if state.overlay.is_open() {
        layers.push(Overlay(shell, &state));
    }
    layers.push(
        Box(Modifier::new()
            .absolute()
            .offset_bottom(0.0)
            .fill_max_width()
            .z_index(30.0))
        .child(BottomNav(state.active(), {
            let shell = shell.clone();
            move |tab: NavTab| shell.borrow_mut().select_tab(tab)
        })),
    );

    Stack(Modifier::new().fill_max_size()).child(layers)
}

#[allow(non_snake_case)]
fn MapBackdrop() -> View {
    Box(Modifier::new()
        .fill_max_size()
        .background(Color::from_hex("#BFDBFE"))
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::Center))
    .child(Text("📍").size(48.0))
}

#[allow(non_snake_case)]
fn SearchBar(shell: &SharedShell) -> View {
    Pill(format!("{SEARCH_PLACEHOLDER}  🔍"), {
        let shell = shell.clone();
        move || with_map(&shell, |m| m.overlay.open())
    })
    .modifier(
        Modifier::new()
            .fill_max_width()
            .padding(12.0)
            .background(theme().surface)
            .clip_rounded(999.0),
    )
}

#[allow(non_snake_case)]
fn FilterRow(shell: &SharedShell, chips: &[String]) -> View {
    let add = Pill("⚙ add filter", {
        let shell = shell.clone();
        move || with_map(&shell, |m| m.overlay.open())
    });
    let chips = chips
        .iter()
        .map(|chip| {
            Chip(chip, {
                let shell = shell.clone();
                let chip = chip.clone();
                move || with_map(&shell, |m| {
                    m.filters.remove(&chip);
                })
            })
        })
        .collect::<Vec<_>>();
    Row(Modifier::new()
        .fill_max_width()
        .flex_wrap(FlexWrap::Wrap)
        .align_items(AlignItems::Center))
    .child((add, chips))
}

/// Search input keyed per overlay session, so a reopened overlay starts empty.
#[allow(non_snake_case)]
fn QueryField(shell: &SharedShell, session: u64) -> View {
    let mut field = TextField(
        SEARCH_PLACEHOLDER,
        Modifier::new().flex_grow(1.0).height(36.0),
        {
            let shell = shell.clone();
            move |text: String| with_map(&shell, |m| m.overlay.set_query(text))
        },
    );
    if let ViewKind::TextField { state_key, .. } = &mut field.kind {
        *state_key = QUERY_FIELD_KEY | session;
    }
    field
}

/// Tapping a result keeps it as a filter chip and closes the overlay.
fn result_pill(shell: &SharedShell, label: &'static str) -> View {
    Pill(label, {
        let shell = shell.clone();
        move || {
            with_map(&shell, |m| {
                m.filters.add(label);
                m.overlay.close();
            })
        }
    })
    .modifier(
        Modifier::new()
            .flex_grow(1.0)
            .padding(10.0)
            .background(theme().surface)
            .clip_rounded(999.0),
    )
}

#[allow(non_snake_case)]
fn Overlay(shell: &SharedShell, state: &MapSearchState) -> View {
    let scroll = remember_scroll_state("map:results");
    let rows = state
        .overlay
        .results()
        .iter()
        .flat_map(|row| {
            let line = match *row {
                ResultRow::Wide(label) => result_pill(shell, label),
                ResultRow::Pair(a, b) => Row(Modifier::new().fill_max_width()).child((
                    result_pill(shell, a),
                    Box(Modifier::new().width(12.0).height(1.0)),
                    result_pill(shell, b),
                )),
            };
            [line, Gap(16.0)]
        })
        .collect::<Vec<_>>();

    Column(Modifier::new()
        .absolute()
        .fill_max_size()
        .padding(16.0)
        .background(Color(0xBF, 0xDB, 0xFE, 0xE6))
        .z_index(20.0))
    .child((
        Row(Modifier::new()
            .fill_max_width()
            .padding(8.0)
            .background(theme().surface)
            .clip_rounded(999.0)
            .align_items(AlignItems::Center))
        .child((
            QueryField(shell, state.overlay.session()),
            Button("✕", {
                let shell = shell.clone();
                move || with_map(&shell, |m| m.overlay.close())
            })
            .modifier(
                Modifier::new()
                    .size(28.0, 28.0)
                    .background(theme().primary)
                    .clip_rounded(14.0),
            ),
        )),
        Gap(16.0),
        ScrollArea(
            Modifier::new().fill_max_width().flex_grow(1.0),
            scroll,
            Column(Modifier::new().fill_max_width()).child(rows),
        ),
    ))
}
