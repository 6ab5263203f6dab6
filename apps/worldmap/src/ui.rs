#![allow(non_snake_case)]

use repose_core::prelude::*;
use repose_ui::*;
use worldmap_core::NavTab;

pub fn muted() -> Color {
    Color::from_hex("#64748B")
}

/// Large screen title with an optional muted line under it.
pub fn Header(title: &str, subtitle: Option<&str>) -> View {
    let title = Text(title)
        .size(28.0)
        .color(theme().on_surface)
        .modifier(Modifier::new().padding(4.0));
    match subtitle {
        Some(s) => Column(Modifier::new().padding(20.0)).child((
            title,
            Text(s).size(14.0).color(muted()).max_lines(2),
        )),
        None => Column(Modifier::new().padding(20.0)).child(title),
    }
}

pub fn SectionTitle(title: &str) -> View {
    Text(title)
        .size(18.0)
        .color(theme().on_surface)
        .modifier(Modifier::new().padding(8.0))
}

/// Bordered card with a name line and a muted detail line.
pub fn PlaceCard(name: &str, detail: &str) -> View {
    Column(
        Modifier::new()
            .fill_max_width()
            .padding(14.0)
            .background(theme().surface)
            .border(1.0, theme().outline, 12.0)
            .clip_rounded(12.0),
    )
    .child((
        Text(name).size(16.0).color(theme().on_surface),
        Text(detail).size(12.0).color(muted()),
    ))
}

/// Rounded white button used on top of the map and in the search overlay.
pub fn Pill(label: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    Button(label, on_click).modifier(
        Modifier::new()
            .padding(10.0)
            .background(theme().surface)
            .border(1.0, theme().outline, 999.0)
            .clip_rounded(999.0),
    )
}

/// Filter chip with a remove control.
pub fn Chip(label: &str, on_remove: impl Fn() + 'static) -> View {
    Row(Modifier::new()
        .padding(6.0)
        .background(theme().surface)
        .border(1.0, theme().outline, 999.0)
        .clip_rounded(999.0)
        .align_items(AlignItems::Center))
    .child((
        Text(label)
            .size(14.0)
            .color(theme().on_surface)
            .modifier(Modifier::new().padding(6.0)),
        Button("✕", on_remove).modifier(
            Modifier::new()
                .size(24.0, 24.0)
                .background(theme().primary)
                .clip_rounded(12.0),
        ),
    ))
}

pub fn Gap(h: f32) -> View {
    Box(Modifier::new().height(h).width(1.0))
}

/// Five-item bar pinned to the bottom of the main screens.
pub fn BottomNav(active: NavTab, on_select: impl Fn(NavTab) + Clone + 'static) -> View {
    Row(Modifier::new()
        .fill_max_width()
        .padding(8.0)
        .background(theme().surface)
        .border(1.0, theme().outline, 0.0)
        .justify_content(JustifyContent::SpaceAround))
    .child(
        NavTab::ALL
            .iter()
            .map(|&tab| {
                let bg = if tab == active {
                    theme().primary
                } else {
                    theme().surface
                };
                Button(tab.label(), {
                    let on_select = on_select.clone();
                    move || on_select(tab)
                })
                .modifier(Modifier::new().padding(6.0).background(bg).clip_rounded(8.0))
            })
            .collect::<Vec<_>>(),
    )
}
