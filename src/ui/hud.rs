//! In-game HUD - interaction prompt, tip popups, and crosshair.

use bevy::prelude::*;

use crate::core::{despawn_all, GameScene};
use crate::transition::{FadeTimings, Transition, TransitionAction, TransitionConfig};

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Text showing the current interaction prompt.
#[derive(Component)]
pub struct PromptText;

/// Text that tips fade in and out on.
#[derive(Component)]
pub struct TipText;

/// What the HUD prompt line should say. Empty means nothing to interact with.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct InteractionPrompt {
    text: String,
}

impl InteractionPrompt {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// `Press "<key>" to <action>`
    pub fn set_interaction(&mut self, key: KeyCode, action: &str) {
        self.text = format!("Press \"{}\" to {}", key_label(key), action);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Short name of a key as printed on the keyboard.
pub fn key_label(key: KeyCode) -> String {
    let name = format!("{key:?}");
    for prefix in ["Key", "Digit"] {
        if let Some(label) = name.strip_prefix(prefix) {
            return label.to_string();
        }
    }
    name
}

/// Fade a tip onto the HUD.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ShowTip {
    pub text: String,
    /// Display time, or the configured default
    pub display: Option<f32>,
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.init_resource::<InteractionPrompt>()
        .add_event::<ShowTip>()
        .add_systems(OnEnter(GameScene::Game), spawn_hud)
        .add_systems(OnExit(GameScene::Game), (despawn_all::<HudRoot>, clear_prompt))
        .add_systems(
            Update,
            (update_prompt_text, show_tips).run_if(in_state(GameScene::Game)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Tip line (top), prompt line (bottom)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(20.0), Val::Px(60.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::default(),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.8).with_alpha(0.0)),
                TipText,
            ));

            parent.spawn((
                Text::default(),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                PromptText,
            ));
        });

    // Crosshair (center of screen)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.4)),
            ));
        });
}

/// Copy the prompt into the HUD when it changes.
fn update_prompt_text(
    prompt: Res<InteractionPrompt>,
    mut text_query: Query<&mut Text, With<PromptText>>,
) {
    if !prompt.is_changed() {
        return;
    }
    for mut text in text_query.iter_mut() {
        text.0 = prompt.text().to_string();
    }
}

/// Start a fade on the tip text for each requested tip.
///
/// A newer tip replaces one still on screen and fades from where it was.
fn show_tips(
    mut commands: Commands,
    mut tips: EventReader<ShowTip>,
    config: Res<TransitionConfig>,
    mut text_query: Query<(Entity, &mut Text), With<TipText>>,
) {
    let Some(tip) = tips.read().last() else {
        return;
    };
    let Ok((entity, mut text)) = text_query.get_single_mut() else {
        return;
    };

    text.0 = tip.text.clone();
    let display = tip.display.unwrap_or(config.tip_display);
    let timings = FadeTimings::new(config.tip_fade, display, config.tip_fade);
    commands
        .entity(entity)
        .insert(Transition::new(timings.then(TransitionAction::None)));
}

fn clear_prompt(mut prompt: ResMut<InteractionPrompt>) {
    prompt.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_formats_key_and_action() {
        let mut prompt = InteractionPrompt::default();
        assert!(prompt.is_empty());

        prompt.set_interaction(KeyCode::KeyE, "Exit");
        assert_eq!(prompt.text(), "Press \"E\" to Exit");

        prompt.set_text("Locked");
        assert_eq!(prompt.text(), "Locked");

        prompt.clear();
        assert!(prompt.is_empty());
    }

    #[test]
    fn key_labels_drop_prefixes() {
        assert_eq!(key_label(KeyCode::KeyF), "F");
        assert_eq!(key_label(KeyCode::Digit1), "1");
        assert_eq!(key_label(KeyCode::Space), "Space");
    }

    #[test]
    fn tip_sets_text_and_starts_fade() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<TransitionConfig>()
            .add_event::<ShowTip>()
            .add_systems(Update, show_tips);
        let tip_text = app
            .world_mut()
            .spawn((Text::default(), TextColor(Color::WHITE.with_alpha(0.0)), TipText))
            .id();

        app.world_mut().send_event(ShowTip {
            text: "Find the Exit!".to_string(),
            display: Some(4.0),
        });
        app.update();

        assert_eq!(app.world().get::<Text>(tip_text).unwrap().0, "Find the Exit!");
        let transition = app.world().get::<Transition>(tip_text).unwrap();
        assert_eq!(transition.phase(), None);
    }

    #[test]
    fn prompt_is_copied_to_hud() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<InteractionPrompt>()
            .add_systems(Update, update_prompt_text);
        let prompt_text = app.world_mut().spawn((Text::default(), PromptText)).id();

        app.world_mut()
            .resource_mut::<InteractionPrompt>()
            .set_interaction(KeyCode::KeyE, "Exit");
        app.update();

        assert_eq!(app.world().get::<Text>(prompt_text).unwrap().0, "Press \"E\" to Exit");
    }
}
