//! User interface: theme, HUD widgets, and panes

pub mod hud;
pub mod panes;
pub mod search_box;
pub mod theme;
pub mod toolbars;
pub mod ui_interaction;

pub use hud::HudPlugin;
pub use ui_interaction::UiHoverState;
