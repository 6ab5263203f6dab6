use std::cell::Cell;

use repose_core::prelude::*;
use repose_ui::scroll::{HorizontalScrollArea, remember_horizontal_scroll_state};
use repose_ui::*;
use worldmap_core::content::APP_TITLE;
use worldmap_core::{OnboardingPage, PageIcon};

use crate::app::SharedShell;
use crate::ui::{Gap, Header, muted};

fn glyph(icon: PageIcon) -> &'static str {
    match icon {
        PageIcon::Pin => "📍",
        PageIcon::Navigation => "🧭",
        PageIcon::Book => "📖",
    }
}

/// Page width before the pager has been painted once.
const UNMEASURED_PAGE_DP: f32 = 360.0;

pub fn screen(shell: &SharedShell) -> View {
    let pager = remember_horizontal_scroll_state("onboarding:pager");
    // Pager width in px as of the last paint; 0 until then.
    let viewport = remember_with_key("onboarding:viewport", || Cell::new(0.0f32));
    // Width the scroll offset was last lined up with.
    let aligned = remember_with_key("onboarding:aligned", || Cell::new(0.0f32));
    let width = viewport.get();

    let (pages, dots) = {
        let mut sh = shell.borrow_mut();
        let Some(carousel) = sh.carousel_mut() else {
            return Box(Modifier::new());
        };
        if width > 0.0 {
            if aligned.get() != width {
                // Resized: keep the current page in view. The scroller may
                // still clamp to the old content width, so retry until it lands.
                let target = carousel.snap_offset(width);
                pager.set_offset(target);
                if (pager.get() - target).abs() < 1.0 {
                    aligned.set(width);
                }
            } else {
                let scrolling = pager.tick();
                if let Some(target) = carousel.sync_pager(pager.get(), width, scrolling) {
                    pager.set_offset(target);
                }
            }
        }
        let pages: Vec<(OnboardingPage, bool)> = carousel
            .pages()
            .map(|(_, page, is_final)| (page.clone(), is_final))
            .collect();
        (pages, carousel.pagination())
    };
    let page_dp = if width > 0.0 {
        width / dp_to_px(1.0)
    } else {
        UNMEASURED_PAGE_DP
    };

    Column(Modifier::new().fill_max_size()).child((
        Row(Modifier::new()
            .fill_max_width()
            .justify_content(JustifyContent::Center))
        .child(Header(APP_TITLE, None)),
        HorizontalScrollArea(
            Modifier::new()
                .fill_max_width()
                .flex_grow(1.0)
                .painter({
                    let viewport = viewport.clone();
                    move |_scene, rect| viewport.set(rect.w)
                }),
            pager,
            Row(Modifier::new().fill_max_height()).child(
                pages
                    .iter()
                    .map(|(page, is_final)| Page(shell, page, *is_final, page_dp))
                    .collect::<Vec<_>>(),
            ),
        ),
        Dots(&dots),
    ))
}

#[allow(non_snake_case)]
fn Page(shell: &SharedShell, page: &OnboardingPage, is_final: bool, width: f32) -> View {
    let body = Column(
        Modifier::new()
            .max_width(320.0)
            .align_items(AlignItems::Center),
    )
    .child((
        Text(glyph(page.icon)).size(56.0),
        Gap(24.0),
        Text(page.title.clone())
            .size(20.0)
            .color(theme().on_surface),
        Gap(12.0),
        Text(page.body.clone()).size(14.0).color(muted()).max_lines(4),
    ));

    let content = if is_final {
        Column(Modifier::new().align_items(AlignItems::Center)).child((
            body,
            Gap(32.0),
            Button("✓ Acknowledge", {
                let shell = shell.clone();
                move || {
                    if let Err(e) = shell.borrow_mut().acknowledge() {
                        log::warn!("acknowledge rejected: {e}");
                    }
                }
            })
            .modifier(
                Modifier::new()
                    .padding(12.0)
                    .background(theme().primary)
                    .clip_rounded(8.0),
            ),
        ))
    } else {
        body
    };

    Box(Modifier::new()
        .width(width)
        .fill_max_height()
        .padding(32.0)
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::Center))
    .child(content)
}

#[allow(non_snake_case)]
fn Dots(dots: &[bool]) -> View {
    Row(Modifier::new()
        .fill_max_width()
        .padding(32.0)
        .justify_content(JustifyContent::Center))
    .child(
        dots.iter()
            .map(|&active| {
                let (w, c) = if active {
                    (32.0, theme().primary)
                } else {
                    (8.0, theme().outline)
                };
                Box(Modifier::new()
                    .size(w, 8.0)
                    .margin_horizontal(4.0)
                    .background(c)
                    .clip_rounded(4.0))
            })
            .collect::<Vec<_>>(),
    )
}
