//! Single-exchange resolution.
//!
//! Order is a strict total order per exchange: action priority, then
//! speed, then a coin flip. The coin is only drawn when both tie, so the
//! RNG stream advances identically on replay.

use std::cmp::Ordering;

use crate::actions::{Action, LogEntry};
use crate::characters::Character;
use crate::core::GameRng;
use crate::effects::DEFEND;

/// Who acts first in an exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnOrder {
    PlayerFirst,
    EnemyFirst,
}

/// Decide who acts first.
pub fn turn_order(
    player: &Character,
    player_action: &Action,
    enemy: &Character,
    enemy_action: &Action,
    rng: &mut GameRng,
) -> TurnOrder {
    let order = player_action
        .priority
        .cmp(&enemy_action.priority)
        .then_with(|| player.speed().cmp(&enemy.speed()));

    match order {
        Ordering::Greater => TurnOrder::PlayerFirst,
        Ordering::Less => TurnOrder::EnemyFirst,
        Ordering::Equal if rng.gen_bool(0.5) => TurnOrder::PlayerFirst,
        Ordering::Equal => TurnOrder::EnemyFirst,
    }
}

/// Resolve one exchange and return the log of whatever executed.
///
/// An action only runs while both sides have health left, so a knockout
/// by the first actor cancels the second action. `defend` is cleared from
/// both sides afterwards no matter what happened.
pub fn run_turn(
    player: &mut Character,
    player_action: &Action,
    enemy: &mut Character,
    enemy_action: &Action,
    rng: &mut GameRng,
) -> Vec<LogEntry> {
    let order = turn_order(player, player_action, enemy, enemy_action, rng);
    tracing::debug!(
        ?order,
        player = player.name(),
        player_action = %player_action.name,
        enemy = enemy.name(),
        enemy_action = %enemy_action.name,
        "turn order"
    );

    let mut log = Vec::new();
    match order {
        TurnOrder::PlayerFirst => {
            act_if_standing(player, player_action, enemy, rng, &mut log);
            act_if_standing(enemy, enemy_action, player, rng, &mut log);
        }
        TurnOrder::EnemyFirst => {
            act_if_standing(enemy, enemy_action, player, rng, &mut log);
            act_if_standing(player, player_action, enemy, rng, &mut log);
        }
    }

    player.remove_condition(DEFEND);
    enemy.remove_condition(DEFEND);

    log
}

fn act_if_standing(
    actor: &mut Character,
    action: &Action,
    target: &mut Character,
    rng: &mut GameRng,
    log: &mut Vec<LogEntry>,
) {
    if actor.is_defeated() || target.is_defeated() {
        return;
    }
    log.extend(action.act(actor, target, rng));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::characters::{Attributes, Species};
    use crate::effects::Effect;

    fn character(name: &str, speed: u32) -> Character {
        let species = Arc::new(Species::new(name, Attributes::new(10, 2, 2, speed)));
        Character::at_level(species, None, 3)
    }

    fn tap() -> Action {
        Action::new("tap", [Effect::attack(1, 100)])
    }

    #[test]
    fn test_priority_beats_speed() {
        let slow = character("slow", 1);
        let fast = character("fast", 9);
        let mut rng = GameRng::new(0);

        let order = turn_order(&slow, &tap().with_priority(1), &fast, &tap(), &mut rng);
        assert_eq!(order, TurnOrder::PlayerFirst);

        let order = turn_order(&slow, &tap(), &fast, &tap().with_priority(1), &mut rng);
        assert_eq!(order, TurnOrder::EnemyFirst);
    }

    #[test]
    fn test_speed_breaks_priority_tie() {
        let slow = character("slow", 1);
        let fast = character("fast", 9);
        let mut rng = GameRng::new(0);
        let before = rng.state();

        assert_eq!(turn_order(&fast, &tap(), &slow, &tap(), &mut rng), TurnOrder::PlayerFirst);
        assert_eq!(turn_order(&slow, &tap(), &fast, &tap(), &mut rng), TurnOrder::EnemyFirst);
        assert_eq!(rng.state(), before, "no coin flip without a full tie");
    }

    #[test]
    fn test_coin_flip_is_fair() {
        let a = character("a", 5);
        let b = character("b", 5);
        let mut rng = GameRng::new(1234);

        let trials = 4000;
        let player_first = (0..trials)
            .filter(|_| turn_order(&a, &tap(), &b, &tap(), &mut rng) == TurnOrder::PlayerFirst)
            .count();

        let ratio = player_first as f64 / trials as f64;
        assert!((0.45..0.55).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_log_in_execution_order() {
        let mut slow = character("slow", 1);
        let mut fast = character("fast", 9);
        let mut rng = GameRng::new(0);

        let log = run_turn(&mut slow, &Action::nothing(), &mut fast, &Action::nothing(), &mut rng);
        let lines: Vec<_> = log.iter().map(ToString::to_string).collect();

        assert_eq!(lines, ["fast uses nothing", "slow uses nothing"]);
    }

    #[test]
    fn test_knockout_cancels_second_action() {
        let mut hero = character("hero", 9);
        let mut victim = character("victim", 1);
        let smash = Action::new("smash", [Effect::attack(1000, 100)]);
        let mut rng = GameRng::new(0);

        let log = run_turn(&mut hero, &smash, &mut victim, &smash, &mut rng);

        assert!(victim.is_defeated());
        assert_eq!(hero.health(), hero.max_health());
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].to_string(), "hero uses smash");
    }

    #[test]
    fn test_defeated_side_cannot_start() {
        let mut hero = character("hero", 9);
        let mut victim = character("victim", 1);
        victim.damage(u32::MAX);
        let mut rng = GameRng::new(0);

        let log = run_turn(&mut hero, &tap(), &mut victim, &tap(), &mut rng);
        assert!(log.is_empty());
    }

    #[test]
    fn test_defend_cleared_after_turn() {
        let mut guard = character("guard", 9);
        let mut other = character("other", 1);
        let defend = Action::new("defend", [Effect::Defend]);
        let mut rng = GameRng::new(0);

        let log = run_turn(&mut guard, &defend, &mut other, &tap(), &mut rng);

        assert_eq!(log[1].to_string(), "guard defends");
        assert_eq!(log[3].to_string(), "guard is defending");
        assert!(!guard.has_condition(DEFEND));
        assert!(!other.has_condition(DEFEND));
    }

    #[test]
    fn test_defend_cleared_even_when_nobody_acts() {
        let mut a = character("a", 1);
        let mut b = character("b", 1);
        a.add_condition(DEFEND);
        b.add_condition(DEFEND);
        b.damage(u32::MAX);
        let mut rng = GameRng::new(0);

        run_turn(&mut a, &tap(), &mut b, &tap(), &mut rng);

        assert!(!a.has_condition(DEFEND));
        assert!(!b.has_condition(DEFEND));
    }

    #[test]
    fn test_other_conditions_persist() {
        let mut a = character("a", 9);
        let mut b = character("b", 1);
        let curse = Action::new("curse", [Effect::condition("cursed")]);
        let mut rng = GameRng::new(0);

        run_turn(&mut a, &curse, &mut b, &Action::nothing(), &mut rng);
        assert!(b.has_condition("cursed"));
    }
}
