use thiserror::Error;

use crate::model::entity::{Country, PlayerId, Rank};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    #[error("expected {expected} player lists, got {actual}")]
    PlayerCountMismatch { expected: usize, actual: usize },
    #[error("player {player} listed unknown country {country:?}")]
    UnknownCountry { player: PlayerId, country: Country },
    #[error("player {player} listed {country:?} more than once")]
    DuplicateCountry { player: PlayerId, country: Country },
    #[error("player {player} has no preference for {country:?}")]
    MissingPreference { player: PlayerId, country: Country },
    #[error("player {player} used rank {rank} outside 1..={max}")]
    RankOutOfRange { player: PlayerId, rank: Rank, max: Rank },
    #[error("player {player} used rank {rank} more than once")]
    DuplicateRank { player: PlayerId, rank: Rank },
}

impl DraftError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, DraftError::PlayerCountMismatch { .. })
    }

    pub fn is_data_integrity(&self) -> bool {
        !self.is_configuration()
    }
}
