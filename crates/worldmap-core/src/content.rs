//! Hardcoded placeholder content. There is no data layer behind any of this.

use crate::onboarding::{OnboardingPage, PageIcon};

pub const APP_TITLE: &str = "TU World Map";
pub const HOME_GREETING: &str = "Welcome back! Where would you like to go today?";
pub const SEARCH_PLACEHOLDER: &str = "search";

pub fn default_onboarding_pages() -> Vec<OnboardingPage> {
    vec![
        OnboardingPage::new(
            "Welcome to TU World Map",
            "Navigate your campus with ease. Find buildings, facilities, and points of interest all in one place.",
            PageIcon::Pin,
        ),
        OnboardingPage::new(
            "Real-time Navigation",
            "Get turn-by-turn directions to any location on campus. Never get lost on your way to class again.",
            PageIcon::Navigation,
        ),
        OnboardingPage::new(
            "Discover Campus Life",
            "Explore dining halls, libraries, study spaces, and more. Everything you need is at your fingertips.",
            PageIcon::Book,
        ),
    ]
}

pub fn default_filters() -> Vec<String> {
    vec!["canteen".to_string()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Place {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const RECENT_LOCATIONS: &[Place] = &[
    Place {
        name: "อาคาร 1",
        detail: "Engineering Building",
    },
    Place {
        name: "โรงอาหาร",
        detail: "Canteen Building",
    },
    Place {
        name: "ห้องสมุด",
        detail: "Library",
    },
];

pub const POPULAR_DESTINATIONS: &[Place] = &[
    Place {
        name: "ร้านอาหาร",
        detail: "15 locations",
    },
    Place {
        name: "ห้องเรียน",
        detail: "50+ rooms",
    },
    Place {
        name: "ลานจอดรถ",
        detail: "8 parking lots",
    },
    Place {
        name: "ปั๊มรถเมล์",
        detail: "6 bus stops",
    },
];

/// One line of the search overlay: a full-width pill or two half-width ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultRow {
    Wide(&'static str),
    Pair(&'static str, &'static str),
}

pub const SEARCH_RESULTS: &[ResultRow] = &[
    ResultRow::Wide("อาคาร1"),
    ResultRow::Pair("ร้านอาหาร", "โรงอาหาร"),
    ResultRow::Wide("ขนส่ง"),
    ResultRow::Pair("วินมอไซ", "รถตู้"),
    ResultRow::Wide("ปั๊มรถเมล์"),
];
