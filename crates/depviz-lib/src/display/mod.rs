//! Terminal display system
//!
//! User-facing output, kept apart from logging (tracing). The color decision
//! is made once, from the resolved [`ColorIntent`](crate::primitives::ColorIntent),
//! and shared by every status line.

use crate::primitives::ConfigError;
use std::sync::OnceLock;

pub mod status;
pub mod styling;

pub use status::StatusDisplay;
pub use styling::StyleManager;

static GLOBAL_DISPLAY: OnceLock<Display> = OnceLock::new();

/// Main display manager that coordinates all user-facing communication
#[derive(Debug)]
pub struct Display {
    styling: StyleManager,
}

impl Display {
    /// Initialize global display system
    pub fn init(color: bool) -> Result<&'static Self, ConfigError> {
        if GLOBAL_DISPLAY.get().is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }

        console::set_colors_enabled(color);
        GLOBAL_DISPLAY
            .set(Display {
                styling: StyleManager::new(color),
            })
            .map_err(|_| ConfigError::AlreadyInitialized)?;

        GLOBAL_DISPLAY.get().ok_or(ConfigError::AlreadyInitialized)
    }

    /// Global display, falling back to plain output when `init` was never called
    pub fn global() -> &'static Self {
        GLOBAL_DISPLAY.get_or_init(|| Display {
            styling: StyleManager::new(false),
        })
    }

    /// Status updates with semantic intent
    pub fn status() -> StatusDisplay<'static> {
        StatusDisplay::new(&Self::global().styling)
    }
}
