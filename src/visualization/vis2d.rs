use bevy::asset::LoadState;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Arena, BodyColor};
use crate::visualization::render::{boundary_draw, circle_draw, circle_draws};

/// Component tagging each circle mesh with its body index into Scenario.store
#[derive(Component)]
struct BodyIndex(pub usize);

/// Background image sprite, removed again if the image fails to load
#[derive(Component)]
struct Background;

#[derive(Component)]
struct FpsText;

const OUTLINE_COLOR: Color = Color::srgb(0.31, 0.31, 0.31);
const BOUNDARY_COLOR: Color = Color::WHITE;
const FPS_COLOR: Color = Color::srgb(0.0, 0.89, 0.19);
const SOLID_FILL: Color = Color::BLACK;

/// Open a window the size of the arena and run until it is closed.
pub fn run_2d(scenario: Scenario) -> AppExit {
    let width = scenario.arena.width as f32;
    let height = scenario.arena.height as f32;

    App::new()
        .insert_resource(ClearColor(SOLID_FILL))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "colsim: elastic collisions".into(),
                resolution: WindowResolution::new(width, height),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_systems(Startup, (setup_bodies_system, setup_background_system, setup_fps_system))
        .add_systems(
            Update,
            (physics_step_system, sync_transforms_system, draw_outlines_system).chain(),
        )
        .add_systems(Update, (background_fallback_system, fps_text_system))
        .run()
}

/// Arena pixels (origin top-left, y down) to Bevy world (origin center, y up)
fn to_world(x: f32, y: f32, arena: &Arena) -> Vec2 {
    Vec2::new(x - arena.width as f32 * 0.5, arena.height as f32 * 0.5 - y)
}

fn to_bevy_color(c: BodyColor) -> Color {
    Color::srgba_u8(c.r, c.g, c.b, c.a)
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.store.len());

    commands.spawn(Camera2dBundle::default());

    for (i, draw) in circle_draws(&scenario.store).enumerate() {
        let pos = to_world(draw.x as f32, draw.y as f32, &scenario.arena);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(draw.radius as f32))),
                material: materials.add(ColorMaterial::from(to_bevy_color(draw.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn setup_background_system(mut commands: Commands, scenario: Res<Scenario>, asset_server: Res<AssetServer>) {
    let Some(path) = scenario.background.clone() else {
        info!("no background image configured, using solid fill");
        return;
    };

    let top_left = to_world(0.0, 0.0, &scenario.arena);
    let texture: Handle<Image> = asset_server.load(path);

    commands.spawn((
        SpriteBundle {
            texture,
            sprite: Sprite {
                anchor: Anchor::TopLeft,
                ..Default::default()
            },
            transform: Transform::from_xyz(top_left.x, top_left.y, 0.0),
            ..Default::default()
        },
        Background,
    ));
}

fn setup_fps_system(mut commands: Commands) {
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 20.0,
                color: FPS_COLOR,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        FpsText,
    ));
}

/// Why the background should be dropped, if its load state says so.
/// Still loading, loaded and unknown handles all keep the sprite.
fn background_failure(state: Option<LoadState>) -> Option<String> {
    match state {
        Some(LoadState::Failed(err)) => Some(err.to_string()),
        _ => None,
    }
}

/// A missing or broken background degrades to the clear color instead of
/// drawing an empty texture.
fn background_fallback_system(mut commands: Commands, asset_server: Res<AssetServer>, query: Query<(Entity, &Handle<Image>), With<Background>>) {
    for (entity, handle) in &query {
        if let Some(reason) = background_failure(asset_server.get_load_state(handle.id())) {
            warn!("background image failed to load ({reason}), using solid fill");
            commands.entity(entity).despawn();
        }
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    let stats = scenario.step(time.delta_seconds_f64());

    if stats.pair_collisions > 0 || stats.wall_contacts > 0 {
        debug!(
            "frame: {} sub-steps, {} pair checks, {} body collisions, {} wall contacts",
            stats.substeps, stats.pair_checks, stats.pair_collisions, stats.wall_contacts
        );
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let bodies = scenario.store.bodies();

    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(d) = bodies.get(*i).map(circle_draw) {
            let pos = to_world(d.x as f32, d.y as f32, &scenario.arena);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

/// Body outlines and the arena boundary, redrawn every frame
fn draw_outlines_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let arena = &scenario.arena;

    for d in circle_draws(&scenario.store) {
        let pos = to_world(d.x as f32, d.y as f32, arena);
        gizmos.circle_2d(pos, d.radius as f32, OUTLINE_COLOR);
    }

    let b = boundary_draw(arena);
    let (x0, y0) = (b.x as f32, b.y as f32);
    let (x1, y1) = ((b.x + b.width) as f32, (b.y + b.height) as f32);
    let corners = [
        to_world(x0, y0, arena),
        to_world(x1, y0, arena),
        to_world(x1, y1, arena),
        to_world(x0, y1, arena),
    ];
    for k in 0..4 {
        gizmos.line_2d(corners[k], corners[(k + 1) % 4], BOUNDARY_COLOR);
    }
}

fn fps_text_system(diagnostics: Res<DiagnosticsStore>, mut query: Query<&mut Text, With<FpsText>>) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
    else {
        return;
    };

    for mut text in &mut query {
        text.sections[0].value = format!("{fps:.0} FPS");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::io::AssetReaderError;
    use bevy::asset::AssetLoadError;
    use std::path::PathBuf;

    #[test]
    fn missing_background_falls_back() {
        let err = AssetLoadError::from(AssetReaderError::NotFound(PathBuf::from("background.jpg")));
        let reason = background_failure(Some(LoadState::Failed(err.into())));

        let reason = reason.expect("failed load should drop the sprite");
        assert!(reason.contains("background.jpg"), "reason: {reason}");
    }

    #[test]
    fn pending_or_loaded_background_is_kept() {
        assert_eq!(background_failure(None), None);
        assert_eq!(background_failure(Some(LoadState::NotLoaded)), None);
        assert_eq!(background_failure(Some(LoadState::Loading)), None);
        assert_eq!(background_failure(Some(LoadState::Loaded)), None);
    }

    #[test]
    fn arena_top_left_maps_to_window_top_left() {
        let arena = Arena::new(550.0, 400.0).unwrap();
        assert_eq!(to_world(0.0, 0.0, &arena), Vec2::new(-275.0, 200.0));
        assert_eq!(to_world(550.0, 400.0, &arena), Vec2::new(275.0, -200.0));
    }
}
