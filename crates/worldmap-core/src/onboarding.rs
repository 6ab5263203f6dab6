//! Onboarding carousel.
//!
//! The carousel is a horizontally paged list of [`OnboardingPage`]s. The
//! renderer reports the scroll offset and viewport width; the carousel turns
//! that into the index of the page nearest the viewport center. The last page
//! carries the acknowledge control, and acknowledging is the only way out of
//! onboarding.

use serde::{Deserialize, Serialize};

/// How far a resting pager may sit from a page boundary before it snaps, in px.
const SNAP_TOLERANCE: f32 = 0.5;

/// Glyph drawn above a page title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageIcon {
    #[default]
    Pin,
    Navigation,
    Book,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OnboardingPage {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub icon: PageIcon,
}

impl OnboardingPage {
    pub fn new(title: impl Into<String>, body: impl Into<String>, icon: PageIcon) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("onboarding needs at least one page")]
    NoPages,
    #[error("acknowledge is only available on the last page (at {current}, last is {last})")]
    NotOnFinalPage { current: usize, last: usize },
    #[error("onboarding was already acknowledged")]
    AlreadyAcknowledged,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    pages: Vec<OnboardingPage>,
    current: usize,
    acknowledged: bool,
}

impl Carousel {
    pub fn new(pages: Vec<OnboardingPage>) -> Result<Self, OnboardingError> {
        if pages.is_empty() {
            return Err(OnboardingError::NoPages);
        }
        Ok(Self {
            pages,
            current: 0,
            acknowledged: false,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn last(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &OnboardingPage {
        &self.pages[self.current]
    }

    pub fn is_final(&self, index: usize) -> bool {
        index == self.last()
    }

    /// Pages in order with their index and whether they carry the acknowledge control.
    pub fn pages(&self) -> impl Iterator<Item = (usize, &OnboardingPage, bool)> + '_ {
        let last = self.last();
        self.pages
            .iter()
            .enumerate()
            .map(move |(i, p)| (i, p, i == last))
    }

    /// One dot per page; `true` marks the centered one.
    pub fn pagination(&self) -> Vec<bool> {
        (0..self.pages.len()).map(|i| i == self.current).collect()
    }

    /// Recompute the centered page from a horizontal scroll position.
    ///
    /// Nearest-page rounding, clamped to the page range so overscroll and
    /// negative offsets stay valid. Garbage input keeps the current index.
    pub fn on_scroll_position_changed(&mut self, offset: f32, viewport_width: f32) -> usize {
        if !offset.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
            log::warn!(
                "ignoring scroll update (offset {offset}, viewport width {viewport_width})"
            );
            return self.current;
        }
        let nearest = (offset / viewport_width).round();
        // Negative and NaN already excluded; the float->int cast saturates.
        let index = if nearest <= 0.0 {
            0
        } else {
            (nearest as usize).min(self.last())
        };
        if index != self.current {
            log::debug!("onboarding page {} -> {}", self.current, index);
            self.current = index;
        }
        self.current
    }

    /// Offset a snap-scroll should settle on for the centered page.
    pub fn snap_offset(&self, viewport_width: f32) -> f32 {
        self.current as f32 * viewport_width.max(0.0)
    }

    /// Offset of the last page when every page is one viewport wide.
    pub fn max_offset(&self, viewport_width: f32) -> f32 {
        self.last() as f32 * viewport_width.max(0.0)
    }

    /// Feed one pager frame, with every page exactly one viewport wide.
    ///
    /// The index follows the offset while `scrolling`. Once the pager is at
    /// rest off a page boundary, returns the offset it should snap to.
    pub fn sync_pager(&mut self, offset: f32, viewport_width: f32, scrolling: bool) -> Option<f32> {
        self.on_scroll_position_changed(offset, viewport_width);
        if scrolling || !offset.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0
        {
            return None;
        }
        let target = self.snap_offset(viewport_width);
        ((offset - target).abs() > SNAP_TOLERANCE).then_some(target)
    }

    /// Confirm onboarding. Only valid on the last page, and only once.
    pub fn acknowledge(&mut self) -> Result<(), OnboardingError> {
        if self.acknowledged {
            return Err(OnboardingError::AlreadyAcknowledged);
        }
        if self.current != self.last() {
            return Err(OnboardingError::NotOnFinalPage {
                current: self.current,
                last: self.last(),
            });
        }
        self.acknowledged = true;
        log::info!("onboarding acknowledged");
        Ok(())
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}
