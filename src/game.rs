//! Game controller.
//!
//! Owns the board and both players, enforces turn order, dispatches to the
//! legality rules, and applies accepted commands. A command either passes
//! every check and mutates state, or is rejected with nothing changed.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::board::{BoardState, Cell, Orientation, Player, PlayerId, ALL_PLAYERS};
use crate::config::RulesConfig;
use crate::movegen::Action;
use crate::rules::{classify_move, fence_location_in_range, MoveKind};

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "PLAYER_1_WON")]
    PlayerOneWon,
    #[serde(rename = "PLAYER_2_WON")]
    PlayerTwoWon,
}

impl GameStatus {
    /// Returns the terminal status for a win by `player`.
    pub const fn won_by(player: PlayerId) -> GameStatus {
        match player {
            PlayerId::One => GameStatus::PlayerOneWon,
            PlayerId::Two => GameStatus::PlayerTwoWon,
        }
    }

    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::PlayerOneWon => Some(PlayerId::One),
            GameStatus::PlayerTwoWon => Some(PlayerId::Two),
        }
    }

    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::PlayerOneWon => write!(f, "player 1 won"),
            GameStatus::PlayerTwoWon => write!(f, "player 2 won"),
        }
    }
}

/// Reasons a command can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("it is not {0}'s turn")]
    OutOfTurn(PlayerId),

    #[error("game is over: {0}")]
    GameOver(GameStatus),

    #[error("illegal destination {0}")]
    IllegalDestination(Cell),

    #[error("{0} has no fences remaining")]
    NoFencesRemaining(PlayerId),

    #[error("illegal fence location {0}")]
    IllegalFenceLocation(Cell),
}

/// A single two-player game.
#[derive(Debug, Clone)]
pub struct Game {
    board: BoardState,
    players: [Player; 2],
    current: PlayerId,
    status: GameStatus,
    config: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starts a game under the standard rules.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Starts a game with both pawns on their home rows and player one to move.
    pub fn with_config(config: RulesConfig) -> Self {
        let players = ALL_PLAYERS.map(|id| Player::new(id, config.fences_per_player));
        let mut board = BoardState::empty();
        for p in &players {
            board.set_occupant(p.pawn, Some(p.id));
        }
        Game {
            board,
            players,
            current: PlayerId::One,
            status: GameStatus::InProgress,
            config,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    pub fn pawn_position(&self, id: PlayerId) -> Cell {
        self.player(id).pawn
    }

    pub fn fences_remaining(&self, id: PlayerId) -> u8 {
        self.player(id).fences_remaining
    }

    /// Moves `player`'s pawn to `dest`. Returns true iff the move was applied.
    pub fn move_pawn(&mut self, player: PlayerId, dest: Cell) -> bool {
        self.try_move_pawn(player, dest).is_ok()
    }

    /// Places a fence for `player`. Returns true iff the fence was applied.
    pub fn place_fence(&mut self, player: PlayerId, orientation: Orientation, at: Cell) -> bool {
        self.try_place_fence(player, orientation, at).is_ok()
    }

    /// Moves `player`'s pawn to `dest`, reporting how the move was made.
    ///
    /// The turn passes to the opponent on success, even when the move wins.
    pub fn try_move_pawn(&mut self, player: PlayerId, dest: Cell) -> Result<MoveKind, GameError> {
        let result = self.apply_move(player, dest);
        if let Err(e) = &result {
            debug!(%player, %dest, error = %e, "pawn move rejected");
        }
        result
    }

    /// Places a fence marker for `player` at intersection `at`.
    pub fn try_place_fence(
        &mut self,
        player: PlayerId,
        orientation: Orientation,
        at: Cell,
    ) -> Result<(), GameError> {
        let result = self.apply_fence(player, orientation, at);
        if let Err(e) = &result {
            debug!(%player, %orientation, %at, error = %e, "fence placement rejected");
        }
        result
    }

    /// Applies either kind of action for `player`.
    pub fn try_apply(&mut self, player: PlayerId, action: Action) -> Result<(), GameError> {
        match action {
            Action::Move(dest) => self.try_move_pawn(player, dest).map(|_| ()),
            Action::Fence { orientation, at } => self.try_place_fence(player, orientation, at),
        }
    }

    /// Rejects commands after the game has ended or out of turn.
    fn check_turn(&self, player: PlayerId) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }
        if player != self.current {
            return Err(GameError::OutOfTurn(player));
        }
        Ok(())
    }

    fn apply_move(&mut self, player: PlayerId, dest: Cell) -> Result<MoveKind, GameError> {
        self.check_turn(player)?;

        let from = self.players[player.index()].pawn;
        let kind = classify_move(&self.board, player, from, dest)
            .ok_or(GameError::IllegalDestination(dest))?;

        self.board.set_occupant(from, None);
        self.board.set_occupant(dest, Some(player));
        self.players[player.index()].pawn = dest;
        trace!(%player, %from, %dest, ?kind, "pawn moved");

        self.check_winner(player);
        self.current = player.opponent();
        Ok(kind)
    }

    fn apply_fence(
        &mut self,
        player: PlayerId,
        orientation: Orientation,
        at: Cell,
    ) -> Result<(), GameError> {
        self.check_turn(player)?;

        let placer = &mut self.players[player.index()];
        if !placer.has_fences() {
            return Err(GameError::NoFencesRemaining(player));
        }
        if !fence_location_in_range(at) {
            return Err(GameError::IllegalFenceLocation(at));
        }

        self.board.add_fence_marker(at, orientation);
        placer.fences_remaining -= 1;
        trace!(%player, %orientation, %at, remaining = placer.fences_remaining, "fence placed");

        self.current = player.opponent();
        Ok(())
    }

    /// Ends the game if `player`'s pawn is on its goal row.
    fn check_winner(&mut self, player: PlayerId) {
        if self.board.row_contains(player.goal_row(), player) {
            self.status = GameStatus::won_by(player);
            info!(%player, "game won");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(col: i8, row: i8) -> Cell {
        Cell::new(col, row)
    }

    #[test]
    fn new_game_initial_state() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), PlayerId::One);
        assert_eq!(game.pawn_position(PlayerId::One), c(4, 0));
        assert_eq!(game.pawn_position(PlayerId::Two), c(4, 8));
        assert_eq!(game.fences_remaining(PlayerId::One), 10);
        assert_eq!(game.fences_remaining(PlayerId::Two), 10);
        assert_eq!(game.board().occupied_cells().count(), 2);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn custom_fence_inventory() {
        let game = Game::with_config(RulesConfig { fences_per_player: 2 });
        assert_eq!(game.fences_remaining(PlayerId::Two), 2);
        assert_eq!(game.config().fences_per_player, 2);
    }

    #[test]
    fn move_updates_board_and_turn() {
        let mut game = Game::new();
        assert_eq!(game.try_move_pawn(PlayerId::One, c(4, 1)), Ok(MoveKind::Step));
        assert_eq!(game.board().occupant_at(c(4, 0)), None);
        assert_eq!(game.board().occupant_at(c(4, 1)), Some(PlayerId::One));
        assert_eq!(game.current_player(), PlayerId::Two);
    }

    #[test]
    fn out_of_turn_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.try_move_pawn(PlayerId::Two, c(4, 7)),
            Err(GameError::OutOfTurn(PlayerId::Two))
        );
        assert_eq!(
            game.try_place_fence(PlayerId::Two, Orientation::Vertical, c(3, 3)),
            Err(GameError::OutOfTurn(PlayerId::Two))
        );
        assert_eq!(game.current_player(), PlayerId::One);
        assert_eq!(game.pawn_position(PlayerId::Two), c(4, 8));
        assert_eq!(game.fences_remaining(PlayerId::Two), 10);
    }

    #[test]
    fn illegal_destination_rejected() {
        let mut game = Game::new();
        for dest in [c(4, 0), c(4, 2), c(5, 1), c(4, -1), c(9, 0)] {
            assert_eq!(
                game.try_move_pawn(PlayerId::One, dest),
                Err(GameError::IllegalDestination(dest))
            );
        }
        assert_eq!(game.current_player(), PlayerId::One);
        assert_eq!(game.pawn_position(PlayerId::One), c(4, 0));
    }

    #[test]
    fn fence_errors_in_order() {
        let mut game = Game::with_config(RulesConfig { fences_per_player: 0 });
        assert_eq!(
            game.try_place_fence(PlayerId::One, Orientation::Horizontal, c(0, 0)),
            Err(GameError::NoFencesRemaining(PlayerId::One))
        );

        let mut game = Game::new();
        assert_eq!(
            game.try_place_fence(PlayerId::One, Orientation::Horizontal, c(0, 3)),
            Err(GameError::IllegalFenceLocation(c(0, 3)))
        );
        assert_eq!(game.fences_remaining(PlayerId::One), 10);
        assert_eq!(game.board().fences().count(), 0);
    }

    #[test]
    fn fence_placement_records_marker() {
        let mut game = Game::new();
        assert!(game.place_fence(PlayerId::One, Orientation::Horizontal, c(4, 8)));
        assert_eq!(game.fences_remaining(PlayerId::One), 9);
        assert!(game.board().fence_markers_at(c(4, 8)).contains(Orientation::Horizontal));
        assert_eq!(game.current_player(), PlayerId::Two);
        // Player two can no longer step down through the new fence.
        assert!(!game.move_pawn(PlayerId::Two, c(4, 7)));
        assert!(game.move_pawn(PlayerId::Two, c(3, 8)));
    }

    #[test]
    fn duplicate_fence_is_accepted() {
        let mut game = Game::new();
        assert!(game.place_fence(PlayerId::One, Orientation::Vertical, c(2, 2)));
        assert!(game.place_fence(PlayerId::Two, Orientation::Vertical, c(2, 2)));
        assert_eq!(game.fences_remaining(PlayerId::One), 9);
        assert_eq!(game.fences_remaining(PlayerId::Two), 9);
        assert_eq!(game.board().fences().count(), 1);
    }

    #[test]
    fn try_apply_dispatches() {
        let mut game = Game::new();
        game.try_apply(PlayerId::One, Action::Move(c(4, 1))).unwrap();
        game.try_apply(
            PlayerId::Two,
            Action::Fence { orientation: Orientation::Vertical, at: c(5, 5) },
        )
        .unwrap();
        assert_eq!(game.pawn_position(PlayerId::One), c(4, 1));
        assert_eq!(game.fences_remaining(PlayerId::Two), 9);
    }

    #[test]
    fn status_display_and_serde() {
        assert_eq!(GameStatus::PlayerTwoWon.to_string(), "player 2 won");
        assert_eq!(
            serde_json::to_string(&GameStatus::PlayerOneWon).unwrap(),
            "\"PLAYER_1_WON\""
        );
        let s: GameStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(s, GameStatus::InProgress);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GameError::OutOfTurn(PlayerId::Two).to_string(),
            "it is not P2's turn"
        );
        assert_eq!(
            GameError::IllegalFenceLocation(c(0, 9)).to_string(),
            "illegal fence location (0, 9)"
        );
    }
}
