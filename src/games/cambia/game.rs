//! Cambia game implementation.

use log::debug;

use crate::core::{
    Action, ActionMask, Frame, GameConfig, GameRng, GameState, Player, Result, Slot, ACTION_COUNT,
    HAND_SLOTS, HISTORY_LEN,
};
use crate::nn::BOARD_ROWS;
use crate::rules::{self, GameResult, RulesEngine};
use crate::views::canonical;

/// Cambia rules bound to a configuration.
#[derive(Clone, Debug, Default)]
pub struct CambiaGame {
    config: GameConfig,
}

/// Builder for creating a CambiaGame.
#[derive(Clone, Debug, Default)]
pub struct CambiaGameBuilder {
    config: GameConfig,
}

impl CambiaGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stop_threshold(mut self, threshold: i32) -> Self {
        self.config.stop_threshold = threshold;
        self
    }

    pub fn turn_limit(mut self, limit: u32) -> Self {
        self.config.turn_limit = limit;
        self
    }

    pub fn initial_peeks(mut self, peeks: usize) -> Self {
        self.config.initial_peeks = peeks;
        self
    }

    /// Build the game and initial state.
    pub fn build(self, seed: u64) -> Result<(CambiaGame, GameState)> {
        let game = CambiaGame::new(self.config)?;
        let state = game.init_board(seed);
        Ok((game, state))
    }
}

/// Deal a fresh game: four random cards per player, then the first draw
/// for player one.
fn deal(config: &GameConfig, mut rng: GameRng) -> GameState {
    let mut frame = Frame::EMPTY;

    for player in Player::ALL {
        let hand = &mut frame[player];
        for index in 0..HAND_SLOTS {
            hand[index] = Slot::hidden(rng.gen_card());
        }
    }

    if config.initial_peeks > 0 {
        for player in Player::ALL {
            let mut order: [usize; HAND_SLOTS] = std::array::from_fn(|i| i);
            rng.shuffle(&mut order);
            for &index in order.iter().take(config.initial_peeks) {
                frame[player][index].known[player] = true;
            }
        }
    }

    *frame[Player::One].draw_mut() = Slot::seen_by(rng.gen_card(), Player::One);

    GameState::new(frame, Player::One, rng)
}

impl CambiaGame {
    /// Create a game after validating `config`.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Fresh initial state seeded with `seed`.
    #[must_use]
    pub fn init_board(&self, seed: u64) -> GameState {
        debug!("dealing game with seed {seed}");
        deal(&self.config, GameRng::new(seed))
    }

    /// Board dimensions: (history frames, slot rows).
    #[must_use]
    pub fn board_size(&self) -> (usize, usize) {
        (HISTORY_LEN, BOARD_ROWS)
    }

    /// Number of actions.
    #[must_use]
    pub fn action_size(&self) -> usize {
        ACTION_COUNT
    }

    /// Apply action index `action` to a copy of `state`.
    ///
    /// Indices outside `0..5` fail with `InvalidAction`.
    pub fn next_state(&self, state: &GameState, player: Player, action: usize) -> Result<(GameState, Player)> {
        self.successor(state, player, Action::from_index(action)?)
    }

    /// Game status from `player`'s side: `0` ongoing, `+1` win, `-1` loss.
    #[must_use]
    pub fn game_ended(&self, state: &GameState, player: Player) -> i8 {
        self.is_terminal(state).map_or(0, |result| result.value_for(player))
    }

    /// State as seen from `player`'s seat.
    #[must_use]
    pub fn canonical_form(&self, state: &GameState, player: Player) -> GameState {
        canonical(state, player)
    }

    /// Board/policy pairs equivalent to the input. Cambia has no board
    /// symmetries, so this is the input alone.
    #[must_use]
    pub fn symmetries(&self, state: &GameState, policy: &[f32]) -> Vec<(GameState, Vec<f32>)> {
        vec![(state.clone(), policy.to_vec())]
    }

    /// Stable bytes identifying the logical state, RNG excluded.
    pub fn string_representation(&self, state: &GameState) -> Result<Vec<u8>> {
        state.state_key()
    }

    /// Hash of the logical state, RNG excluded.
    #[must_use]
    pub fn fingerprint(&self, state: &GameState) -> u64 {
        state.fingerprint()
    }

    /// A player's current hand score.
    #[must_use]
    pub fn score(&self, state: &GameState, player: Player) -> i32 {
        rules::score(state, player)
    }
}

impl RulesEngine for CambiaGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn valid_moves(&self, state: &GameState, player: Player) -> ActionMask {
        rules::valid_moves(state, player)
    }

    fn apply_action(&self, state: &mut GameState, player: Player, action: Action) -> Result<Player> {
        let transition = rules::apply(state, player, action)?;
        Ok(transition.next_player)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        rules::game_result(state, &self.config)
    }
}
