//! Game session: board plus the two registered players

use crate::ai::{MoveSearch, SearchOutcome};
use crate::board::{Board, GameResult};
use crate::config::GameConfig;
use crate::error::{BoardError, SetupError};
use crate::player::{Player, PlayerId, Roster};

/// One game between two players
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: Vec<Player>,
    next_id: u8,
}

impl Game {
    /// Validate the configuration and start from an empty board
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let board = Board::new(config.board_size, config.winning_value)?;
        Ok(Self {
            config,
            board,
            players: Vec::with_capacity(2),
            next_id: 1,
        })
    }

    /// Start a game and register both players in one go
    pub fn with_players(config: GameConfig, symbols: [char; 2]) -> Result<(Self, Roster), SetupError> {
        let mut game = Self::new(config)?;
        for symbol in symbols {
            game.add_player(symbol)?;
        }
        let roster = game.roster()?;
        Ok((game, roster))
    }

    /// Register a player; ids are handed out sequentially from 1
    pub fn add_player(&mut self, symbol: char) -> Result<Player, SetupError> {
        if self.players.iter().any(|p| p.symbol == symbol) {
            return Err(SetupError::DuplicatePlayer(symbol));
        }
        if self.players.len() >= 2 {
            return Err(SetupError::RosterFull);
        }

        let player = Player::new(self.next_id, symbol);
        self.players.push(player);
        self.next_id += 1;
        Ok(player)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn roster(&self) -> Result<Roster, SetupError> {
        match self.players.as_slice() {
            [first, second] => Ok(Roster::new(*first, *second)),
            other => Err(SetupError::IncompleteRoster(other.len())),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Human move; `Occupied` and `OutOfBounds` leave the board untouched
    pub fn place(&mut self, player: PlayerId, row: usize, col: usize) -> Result<(), BoardError> {
        self.board.set(player, row, col)
    }

    /// Let the search move for `player`
    pub fn play_ai(&mut self, ai: &MoveSearch, player: PlayerId) -> SearchOutcome {
        let outcome = ai.search(&self.board, player);
        self.board = outcome.board.clone();
        outcome
    }

    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    /// Plies played so far
    pub fn move_count(&self) -> usize {
        self.board.occupied_count()
    }

    pub fn symbol(&self, id: PlayerId) -> Option<char> {
        self.players.iter().find(|p| p.id == id).map(|p| p.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;

    #[test]
    fn test_invalid_setup() {
        assert_eq!(
            Game::new(GameConfig::new(0, 1)).unwrap_err(),
            SetupError::Board(BoardError::InvalidSize(0))
        );
        assert!(matches!(
            Game::new(GameConfig::new(3, 4)),
            Err(SetupError::Board(BoardError::InvalidWinningValue { .. }))
        ));
    }

    #[test]
    fn test_player_registration() {
        let mut game = Game::new(GameConfig::new(3, 3)).unwrap();
        assert_eq!(game.roster(), Err(SetupError::IncompleteRoster(0)));

        let first = game.add_player('O').unwrap();
        assert_eq!(first.id, PlayerId(1));
        assert_eq!(game.add_player('O'), Err(SetupError::DuplicatePlayer('O')));
        assert_eq!(game.roster(), Err(SetupError::IncompleteRoster(1)));

        let second = game.add_player('X').unwrap();
        assert_eq!(second.id, PlayerId(2));
        assert_eq!(game.add_player('Z'), Err(SetupError::RosterFull));

        let roster = game.roster().unwrap();
        assert_eq!(roster.opponent(first.id), second.id);
        assert_eq!(game.symbol(second.id), Some('X'));
    }

    #[test]
    fn test_place_and_win() {
        let (mut game, roster) = Game::with_players(GameConfig::new(3, 3), ['O', 'X']).unwrap();
        let (a, b) = (roster.first(), roster.second());

        game.place(a, 0, 0).unwrap();
        game.place(b, 1, 0).unwrap();
        game.place(a, 0, 1).unwrap();
        game.place(b, 1, 1).unwrap();
        assert_eq!(game.result(), GameResult::Pending);

        assert_eq!(game.place(a, 1, 1), Err(BoardError::Occupied { row: 1, col: 1 }));
        assert!(matches!(game.place(a, 0, 3), Err(BoardError::OutOfBounds { .. })));
        assert_eq!(game.move_count(), 4);

        game.place(a, 0, 2).unwrap();
        assert_eq!(game.result(), GameResult::Won(a));
    }

    #[test]
    fn test_play_ai_updates_board() {
        let (mut game, roster) = Game::with_players(GameConfig::new(3, 3), ['O', 'X']).unwrap();
        let ai = MoveSearch::new(&AiConfig::default(), 3, roster);

        let outcome = game.play_ai(&ai, roster.first());
        assert_eq!(outcome.chosen, Some((1, 1)));
        assert_eq!(game.board().get(1, 1), Some(roster.first()));

        game.play_ai(&ai, roster.second());
        assert_eq!(game.move_count(), 2);
    }
}
