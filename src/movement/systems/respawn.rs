//! Movement domain: kill zones and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{KillZone, MovementController, Player, RespawnRequest};

pub(crate) fn detect_kill_zones(
    mut collision_events: MessageReader<CollisionStart>,
    mut respawn_requests: MessageWriter<RespawnRequest>,
    player_query: Query<(), With<Player>>,
    kill_zone_query: Query<(), With<KillZone>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, zone_entity) in pairs {
            if player_query.contains(player_entity) && kill_zone_query.contains(zone_entity) {
                respawn_requests.write(RespawnRequest {
                    entity: player_entity,
                });
            }
        }
    }
}

pub(crate) fn apply_respawns(
    mut requests: MessageReader<RespawnRequest>,
    mut query: Query<(
        &mut MovementController,
        &mut Transform,
        &mut LinearVelocity,
        &mut Sprite,
    )>,
) {
    for request in requests.read() {
        let Ok((mut controller, mut transform, mut velocity, mut sprite)) =
            query.get_mut(request.entity)
        else {
            continue;
        };

        let anchor = controller.respawn();
        transform.translation = anchor.position;
        transform.rotation = anchor.rotation;
        velocity.0 = Vec2::ZERO;
        sprite.flip_x = !controller.facing().is_right();

        info!("Respawned {:?} at {:?}", request.entity, anchor.position);
    }
}
