//! # App state for TU World Map
//!
//! Everything the screens need, with no renderer attached. Event handlers in
//! the UI are thin wrappers over methods here, so the behavior is testable
//! with plain `cargo test`.
//!
//! - [`Shell`]: owns the [`AppMode`]. While onboarding it holds a
//!   [`Carousel`]; after acknowledgment it holds the visible [`Route`] and the
//!   per-screen state.
//! - [`Carousel`]: horizontally paged onboarding, gated by an explicit
//!   acknowledge on its last page.
//! - [`HomeState`] and [`MapSearchState`]: bottom-nav highlight, filter chips,
//!   search overlay.
//!
//! ## Onboarding
//!
//! ```rust
//! use worldmap_core::*;
//!
//! let mut shell = Shell::from_config(Config::default()).unwrap();
//! assert_eq!(shell.mode(), AppMode::Onboarding);
//!
//! let carousel = shell.carousel_mut().unwrap();
//! carousel.on_scroll_position_changed(140.0, 300.0); // still page 0
//! carousel.on_scroll_position_changed(600.0, 300.0); // last page
//!
//! shell.acknowledge().unwrap();
//! assert_eq!(shell.mode(), AppMode::Main);
//! ```
//!
//! Nothing is persisted unless `remember_onboarding` is set in [`Config`], so
//! by default onboarding shows on every launch.

pub mod config;
pub mod content;
pub mod error;
pub mod home;
pub mod onboarding;
pub mod search;
pub mod shell;
pub mod store;

pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use home::{HomeState, NavTab, QuickAction, Route};
pub use onboarding::{Carousel, OnboardingError, OnboardingPage, PageIcon};
pub use search::{FilterBar, MapSearchState, SearchOverlay};
pub use shell::{AppMode, MainState, Shell};
pub use store::{Ephemeral, JsonFileStore, OnboardingStore, StoreError};
