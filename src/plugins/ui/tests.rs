use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;
use crate::plugins::player::{Player, PlayerState};

use super::bars::{self, HudBar};
use super::hud::{self, HudSnapshot};

#[test]
fn snapshot_mirrors_player_vitals() {
    let mut world = World::new();
    world.init_resource::<HudSnapshot>();
    let t = Tunables::default();
    world.spawn((Player, PlayerState::new(&t.player).with_vitals(2, 7, 40.0)));

    run_system_once(&mut world, hud::publish_hud);

    let hud = *world.resource::<HudSnapshot>();
    assert_eq!(
        hud,
        HudSnapshot {
            health: 2,
            max_health: 3,
            ammo: 7,
            max_ammo: 30,
            stamina: 40.0,
            max_stamina: 100.0,
            dead: false,
        }
    );
    assert!((hud.stamina_fraction() - 0.4).abs() < 1e-6);
}

#[test]
fn snapshot_untouched_without_player() {
    let mut world = World::new();
    world.init_resource::<HudSnapshot>();

    run_system_once(&mut world, hud::publish_hud);

    assert_eq!(*world.resource::<HudSnapshot>(), HudSnapshot::default());
}

#[test]
fn fractions_handle_empty_maximum() {
    assert_eq!(HudSnapshot::default().health_fraction(), 0.0);
    assert_eq!(HudSnapshot::fraction(5.0, 2.0), 1.0);
}

#[test]
fn bars_follow_camera_and_scale_with_fill() {
    let mut world = World::new();
    world.insert_resource(HudSnapshot {
        health: 3,
        max_health: 3,
        ammo: 15,
        max_ammo: 30,
        stamina: 0.0,
        max_stamina: 100.0,
        dead: false,
    });
    world.spawn((MainCamera { responsiveness: 5.0 }, Transform::from_xyz(100.0, 0.0, 999.0)));
    run_system_once(&mut world, bars::spawn_hud_bars);
    run_system_once(&mut world, bars::update_hud_bars);

    let mut fills: Vec<(String, f32)> = world
        .query_filtered::<(&Name, &Transform), With<HudBar>>()
        .iter(&world)
        .map(|(n, tf)| (n.as_str().to_owned(), tf.scale.x))
        .collect();
    fills.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        fills,
        vec![
            ("HudBar(Ammo)".to_owned(), 0.5),
            ("HudBar(Health)".to_owned(), 1.0),
            ("HudBar(Stamina)".to_owned(), 0.0),
        ]
    );

    let health_x = world
        .query_filtered::<(&Name, &Transform), With<HudBar>>()
        .iter(&world)
        .find(|(n, _)| n.as_str() == "HudBar(Health)")
        .map(|(_, tf)| tf.translation.x)
        .unwrap();
    // Full bar: centred half a bar right of the camera-relative left edge.
    assert_eq!(health_x, 100.0 - 540.0 + 90.0);
}
