//! Collision detection between the player box and the detector wedge
//!
//! Only the two straight sides of the wedge are tested. The curved side lies
//! on the arena boundary, which a contained player can never reach.

use glam::Vec2;

use super::detector::Detector;
use super::geometry::Segment;
use super::player::PlayerBody;
use super::state::Arena;

/// First intersection between any player edge and any detector edge
pub fn first_contact(player_edges: &[Segment], detector_edges: &[Segment]) -> Option<Vec2> {
    player_edges.iter().find_map(|edge| {
        detector_edges
            .iter()
            .find_map(|detector_edge| edge.intersect(detector_edge))
    })
}

/// Contact point between the player and the detector's current edges, if any
pub fn player_detector_contact(player: &PlayerBody, detector: &Detector, arena: &Arena) -> Option<Vec2> {
    first_contact(&player.edges(), &detector.edges(arena))
}

/// Boolean form of [`player_detector_contact`]
#[inline]
pub fn player_hits_detector(player: &PlayerBody, detector: &Detector, arena: &Arena) -> bool {
    player_detector_contact(player, detector, arena).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::polar_to_cartesian;

    fn player_at(center: Vec2) -> PlayerBody {
        PlayerBody::new(
            center - PLAYER_SIZE / 2.0,
            PLAYER_SIZE,
            PLAYER_BASE_SPEED,
            PLAYER_FRICTION,
        )
    }

    #[test]
    fn test_player_straddling_start_edge_collides() {
        let arena = Arena::default();
        let detector = Detector::default();
        let on_edge = polar_to_cartesian(arena.center, 120.0, detector.start_angle());
        let player = player_at(on_edge);
        assert!(player_hits_detector(&player, &detector, &arena));
    }

    #[test]
    fn test_player_straddling_end_edge_collides() {
        let arena = Arena::default();
        let detector = Detector::default();
        let on_edge = polar_to_cartesian(arena.center, 60.0, detector.end_angle());
        let player = player_at(on_edge);
        let contact = player_detector_contact(&player, &detector, &arena).expect("contact");
        // Contact lies on the box outline
        let [tl, _, br, _] = player.corners();
        assert!(contact.x >= tl.x - 1e-3 && contact.x <= br.x + 1e-3);
        assert!(contact.y >= tl.y - 1e-3 && contact.y <= br.y + 1e-3);
    }

    #[test]
    fn test_spawn_is_clear_of_detector() {
        // Spawn sits above center; the detector starts below it
        let arena = Arena::default();
        let detector = Detector::default();
        let player = PlayerBody::new(PLAYER_SPAWN, PLAYER_SIZE, PLAYER_BASE_SPEED, PLAYER_FRICTION);
        assert!(!player_hits_detector(&player, &detector, &arena));
    }

    #[test]
    fn test_player_inside_wedge_without_touching_edges() {
        // Fully between the two sides: edges do not cross the box
        let arena = Arena::default();
        let detector = Detector::default();
        let mid = polar_to_cartesian(arena.center, 170.0, 90.0_f32.to_radians());
        let mut player = player_at(mid);
        player.size = Vec2::new(4.0, 4.0);
        player.pos = mid - Vec2::new(2.0, 2.0);
        assert!(!player_hits_detector(&player, &detector, &arena));
    }

    #[test]
    fn test_first_contact_empty_inputs() {
        let edge = Segment::new(Vec2::ZERO, Vec2::ONE);
        assert!(first_contact(&[], &[edge]).is_none());
        assert!(first_contact(&[edge], &[]).is_none());
    }
}
