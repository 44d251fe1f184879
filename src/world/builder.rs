//! Level construction from data definitions.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::data::{LevelDefinition, LightDef, TriggerDef, TriggerKind, WallDef};
use super::triggers::{trigger_collider, ExitZone, LethalZone, TipZone};

const FLOOR_DEPTH: f32 = 0.2;
const CEILING_THICKNESS: f32 = 0.2;
const DOOR_SIZE: Vec3 = Vec3::new(1.2, 2.2, 0.1);

/// Marker for all level geometry that should be cleaned up.
#[derive(Component)]
pub struct LevelGeometry;

/// Materials for the house.
struct HouseMaterials {
    floor: Handle<StandardMaterial>,
    wall: Handle<StandardMaterial>,
    ceiling: Handle<StandardMaterial>,
    door: Handle<StandardMaterial>,
}

impl HouseMaterials {
    fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            // Worn floorboards
            floor: materials.add(StandardMaterial {
                base_color: Color::srgb(0.22, 0.17, 0.13),
                perceptual_roughness: 0.8,
                ..default()
            }),
            // Stained plaster
            wall: materials.add(StandardMaterial {
                base_color: Color::srgb(0.33, 0.31, 0.27),
                perceptual_roughness: 0.9,
                ..default()
            }),
            ceiling: materials.add(StandardMaterial {
                base_color: Color::srgb(0.18, 0.17, 0.16),
                perceptual_roughness: 0.95,
                ..default()
            }),
            door: materials.add(StandardMaterial {
                base_color: Color::srgb(0.28, 0.12, 0.08),
                perceptual_roughness: 0.6,
                ..default()
            }),
        }
    }
}

/// Build a level from a level definition. Returns the player spawn point.
pub fn build_level_from_data(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    level: &LevelDefinition,
) -> Vec3 {
    let house = HouseMaterials::new(materials);

    spawn_shell(commands, meshes, &house, level);

    for wall in &level.walls {
        spawn_wall(commands, meshes, &house, wall, level.wall_height);
    }

    for light in &level.lights {
        spawn_light(commands, light);
    }

    for trigger in &level.triggers {
        spawn_trigger(commands, meshes, &house, trigger);
    }

    info!(
        "Built level '{}': {} walls, {} lights, {} triggers",
        level.name,
        level.walls.len(),
        level.lights.len(),
        level.triggers.len()
    );

    level.spawn_point()
}

/// Floor and ceiling covering the whole footprint.
fn spawn_shell(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    house: &HouseMaterials,
    level: &LevelDefinition,
) {
    let (width, depth) = level.floor_size;

    // Top surface at y=0
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(width, FLOOR_DEPTH, depth))),
        MeshMaterial3d(house.floor.clone()),
        Transform::from_xyz(0.0, -FLOOR_DEPTH / 2.0, 0.0),
        Collider::cuboid(width / 2.0, FLOOR_DEPTH / 2.0, depth / 2.0),
        LevelGeometry,
    ));

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(width, CEILING_THICKNESS, depth))),
        MeshMaterial3d(house.ceiling.clone()),
        Transform::from_xyz(0.0, level.wall_height + CEILING_THICKNESS / 2.0, 0.0),
        Collider::cuboid(width / 2.0, CEILING_THICKNESS / 2.0, depth / 2.0),
        LevelGeometry,
    ));
}

fn spawn_wall(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    house: &HouseMaterials,
    wall: &WallDef,
    height: f32,
) {
    let (size_x, size_z) = wall.size;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size_x, height, size_z))),
        MeshMaterial3d(house.wall.clone()),
        Transform::from_xyz(wall.center.0, height / 2.0, wall.center.1),
        Collider::cuboid(size_x / 2.0, height / 2.0, size_z / 2.0),
        LevelGeometry,
    ));
}

fn spawn_light(commands: &mut Commands, light: &LightDef) {
    let (r, g, b) = light.color;
    let (x, y, z) = light.position;
    commands.spawn((
        PointLight {
            color: Color::srgb(r, g, b),
            intensity: light.intensity,
            range: light.range,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(x, y, z),
        LevelGeometry,
    ));
}

/// Spawn an invisible sensor volume; the exit also gets a door to look at.
fn spawn_trigger(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    house: &HouseMaterials,
    trigger: &TriggerDef,
) {
    let center = Vec3::new(trigger.center.0, trigger.center.1, trigger.center.2);
    let half_extents = Vec3::new(trigger.size.0, trigger.size.1, trigger.size.2) / 2.0;

    let zone = commands
        .spawn((
            Transform::from_translation(center),
            trigger_collider(half_extents),
            LevelGeometry,
        ))
        .id();

    match &trigger.kind {
        TriggerKind::Tip {
            hint,
            show_once,
            display,
        } => {
            commands
                .entity(zone)
                .insert(TipZone::new(*hint, *show_once, *display));
        }
        TriggerKind::Exit => {
            commands.entity(zone).insert(ExitZone::default());
            commands.spawn((
                Mesh3d(meshes.add(Cuboid::from_size(DOOR_SIZE))),
                MeshMaterial3d(house.door.clone()),
                Transform::from_xyz(center.x, DOOR_SIZE.y / 2.0, center.z),
                LevelGeometry,
            ));
        }
        TriggerKind::Lethal => {
            commands.entity(zone).insert(LethalZone);
        }
    }
}
