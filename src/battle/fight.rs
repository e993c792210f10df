//! Full battle loop.
//!
//! `Battle` asks each side's [`DecisionProvider`] for an action every
//! turn and resolves it with [`run_turn`] until someone drops to zero
//! health or the turn limit is hit.

use std::borrow::Cow;

use super::turn::run_turn;
use crate::actions::{Action, ActionCatalog, LogEntry};
use crate::characters::Character;
use crate::core::{BattleConfig, GameRng, QuestError, Result};
use crate::policy::DecisionProvider;

/// One side of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// One side was knocked out.
    Victory { winner: Side, turns: u32 },
    /// Turn limit reached with both standing.
    Stalemate { turns: u32 },
}

impl BattleOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Victory { winner, .. } => Some(*winner),
            Self::Stalemate { .. } => None,
        }
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        match self {
            Self::Victory { turns, .. } | Self::Stalemate { turns } => *turns,
        }
    }
}

/// Progress notifications for whoever is watching the battle.
#[derive(Debug)]
pub enum BattleEvent<'a> {
    /// About to ask both sides for actions.
    TurnStarted {
        turn: u32,
        player: &'a Character,
        enemy: &'a Character,
    },
    /// Exchange resolved.
    TurnResolved { turn: u32, log: &'a [LogEntry] },
}

/// Battle driver bound to a world's action catalog.
#[derive(Clone, Debug)]
pub struct Battle<'w> {
    catalog: &'w ActionCatalog,
    config: BattleConfig,
}

impl<'w> Battle<'w> {
    /// Create a battle driver.
    pub fn new(catalog: &'w ActionCatalog, config: BattleConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Ask `provider` to pick one of `character`'s learned actions.
    ///
    /// A character that knows nothing does [`Action::nothing`].
    pub fn choose_action(
        &self,
        character: &Character,
        provider: &mut impl DecisionProvider,
        rng: &mut GameRng,
    ) -> Result<Cow<'w, Action>> {
        let choices = character.actions();
        if choices.is_empty() {
            return Ok(Cow::Owned(Action::nothing()));
        }

        let index = provider.choose(choices, rng);
        let name = choices.get(index).ok_or(QuestError::ChoiceOutOfRange {
            index,
            len: choices.len(),
        })?;
        self.catalog.resolve(name).map(Cow::Borrowed)
    }

    /// Play a single turn: player picks, enemy picks, exchange resolves.
    pub fn turn(
        &self,
        player: &mut Character,
        enemy: &mut Character,
        player_brain: &mut impl DecisionProvider,
        enemy_brain: &mut impl DecisionProvider,
        rng: &mut GameRng,
    ) -> Result<Vec<LogEntry>> {
        let player_action = self.choose_action(player, player_brain, rng)?;
        let enemy_action = self.choose_action(enemy, enemy_brain, rng)?;
        Ok(run_turn(player, &player_action, enemy, &enemy_action, rng))
    }

    /// Fight until one side is down or the turn limit is reached.
    pub fn fight(
        &self,
        player: &mut Character,
        enemy: &mut Character,
        player_brain: &mut impl DecisionProvider,
        enemy_brain: &mut impl DecisionProvider,
        rng: &mut GameRng,
        mut observer: impl FnMut(BattleEvent<'_>),
    ) -> Result<BattleOutcome> {
        let mut turns = 0;

        while !player.is_defeated() && !enemy.is_defeated() {
            if self.config.max_turns > 0 && turns >= self.config.max_turns {
                tracing::debug!(turns, "battle stalemate");
                return Ok(BattleOutcome::Stalemate { turns });
            }
            turns += 1;

            observer(BattleEvent::TurnStarted {
                turn: turns,
                player: &*player,
                enemy: &*enemy,
            });
            let log = self.turn(player, enemy, player_brain, enemy_brain, rng)?;
            observer(BattleEvent::TurnResolved { turn: turns, log: &log });
        }

        let winner = if enemy.is_defeated() { Side::Player } else { Side::Enemy };
        tracing::debug!(?winner, turns, "battle over");
        Ok(BattleOutcome::Victory { winner, turns })
    }
}
