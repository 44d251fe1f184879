//! UI module - scene screens, menus, and the in-game HUD.

mod death;
mod game_over;
mod hud;
mod loading;
mod menu;
mod pause;
mod plugin;
mod splash;
mod start_screen;
mod win;

pub use death::{DeathSequence, DeathStage};
pub use hud::{key_label, HudRoot, InteractionPrompt, PromptText, ShowTip, TipText};
pub use menu::MenuButton;
pub use plugin::UiPlugin;

#[cfg(test)]
pub(crate) use plugin::test_support;
