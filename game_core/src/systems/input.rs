use hecs::World;

use crate::components::{Intent, Paddle, PaddleIntent, Side};

/// Store the human player's steering on the left paddle
pub fn apply_player_intent(world: &mut World, input: Intent) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Left {
            intent.dir = input;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_intent_lands_on_the_left_paddle_only() {
        let mut world = World::new();
        let left = create_paddle(&mut world, Side::Left, 210.0);
        let right = create_paddle(&mut world, Side::Right, 210.0);

        apply_player_intent(&mut world, Intent::Up);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, Intent::Up);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, Intent::Idle);
    }

    #[test]
    fn test_intent_is_replaced_every_tick() {
        let mut world = World::new();
        let left = create_paddle(&mut world, Side::Left, 210.0);

        apply_player_intent(&mut world, Intent::Down);
        apply_player_intent(&mut world, Intent::Idle);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, Intent::Idle);
    }
}
