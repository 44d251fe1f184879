//! UI plugin - screens, menus, HUD, and interface elements.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::{death, game_over, hud, loading, menu, pause, splash, start_screen, win};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
        menu::setup_menu_button_systems(app);

        splash::setup_splash_systems(app);
        start_screen::setup_start_screen_systems(app);
        loading::setup_loading_systems(app);
        pause::setup_pause_systems(app);
        death::setup_death_systems(app);
        game_over::setup_game_over_systems(app);
        win::setup_win_systems(app);
    }
}

/// Full-screen root node for a screen.
pub(crate) fn screen_root(background: Color) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
    )
}

/// Black full-screen node drawn above everything else on a screen.
pub(crate) fn screen_overlay(alpha: f32) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::BLACK.with_alpha(alpha)),
        GlobalZIndex(10),
    )
}

/// Plain text line with a bottom margin.
pub(crate) fn screen_text(text: &str, font_size: f32, color: Color, margin: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(margin)),
            ..default()
        },
    )
}

/// Free the cursor for clicking menus.
pub(crate) fn unlock_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// True if any key or mouse button went down this frame.
pub(crate) fn any_input_pressed(
    keyboard: &ButtonInput<KeyCode>,
    mouse: &ButtonInput<MouseButton>,
) -> bool {
    keyboard.get_just_pressed().next().is_some() || mouse.get_just_pressed().next().is_some()
}

#[cfg(test)]
pub(crate) mod test_support {
    use bevy::prelude::*;
    use bevy::state::app::StatesPlugin;

    use crate::core::{CorePlugin, GameScene, SceneLoaderSet};
    use crate::transition::{
        advance_transitions, DeathTimings, FadeTimings, SplashTimings, TransitionConfig,
        TransitionSet,
    };

    /// Config where every screen finishes on its first frame.
    pub fn instant_config() -> TransitionConfig {
        let defaults = TransitionConfig::default();
        TransitionConfig {
            splash_vini: SplashTimings {
                fade: FadeTimings::new(0.0, 0.0, 0.0),
                ..defaults.splash_vini
            },
            splash_game: SplashTimings {
                fade: FadeTimings::new(0.0, 0.0, 0.0),
                ..defaults.splash_game
            },
            menu_fade_out: 0.0,
            menu_wait: 0.0,
            loading: FadeTimings::new(0.0, 0.0, 0.0),
            tip_fade: 0.0,
            tip_display: 0.0,
            death: DeathTimings {
                first_image: 0.0,
                second_image: 0.0,
                bite: 0.0,
            },
        }
    }

    /// Headless app with scene states, the scene loader and transitions.
    pub fn screen_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, CorePlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(instant_config())
            .configure_sets(Update, TransitionSet.before(SceneLoaderSet))
            .add_systems(Update, advance_transitions.in_set(TransitionSet));
        app
    }

    pub fn scene(app: &App) -> GameScene {
        *app.world().resource::<State<GameScene>>().get()
    }

    /// Run frames, recording the scene after each one.
    pub fn run_frames(app: &mut App, frames: usize) -> Vec<GameScene> {
        (0..frames)
            .map(|_| {
                app.update();
                scene(app)
            })
            .collect()
    }
}
