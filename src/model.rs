pub mod entity {
    use serde::{Deserialize, Serialize};

    pub type GameId = u32;
    pub type PlayerId = u32;
    pub type Rank = u32;
    pub type Country = String;

    /// The seven playable countries, in board order.
    pub const COUNTRIES: [&str; 7] =
        ["England", "France", "Germany", "Italy", "Austria", "Russia", "Turkey"];

    pub fn canonical_countries() -> Vec<Country> {
        COUNTRIES.iter().map(|label| label.to_string()).collect()
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Preference {
        pub country: Country,
        pub rank: Rank,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PlayerList {
        pub player_id: PlayerId,
        pub preferences: Vec<Preference>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DraftRequest {
        pub game_id: GameId,
        pub player_lists: Vec<PlayerList>,
    }
}

pub mod scoring {
    use super::entity::Rank;

    pub type Score = u32;

    /// Maps choice rank to satisfaction score; rank 1 is most preferred.
    pub const SATISFACTION_TABLE: [Score; 7] = [10, 7, 5, 3, 2, 1, 0];

    pub fn score_for_rank(rank: Rank) -> Option<Score> {
        let slot = (rank as usize).checked_sub(1)?;
        SATISFACTION_TABLE.get(slot).copied()
    }

    pub fn max_total(player_count: usize) -> Score {
        SATISFACTION_TABLE[0] * player_count as Score
    }
}

pub mod result {
    use serde::{Deserialize, Serialize};

    use super::entity::{Country, GameId, PlayerId, Rank};
    use super::scoring::{max_total, Score};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Assignment {
        pub player_id: PlayerId,
        pub country: Country,
        pub rank: Rank,
        pub satisfaction_score: Score,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AssignmentResult {
        pub game_id: GameId,
        pub assignments: Vec<Assignment>,
        pub total_satisfaction_score: Score,
        pub total_rank: Rank,
    }

    impl AssignmentResult {
        pub fn average_rank(&self) -> f64 {
            if self.assignments.is_empty() {
                return 0.0;
            }
            f64::from(self.total_rank) / self.assignments.len() as f64
        }

        /// Achieved satisfaction as a fraction of the theoretical maximum
        /// (every player getting their first choice).
        pub fn satisfaction_ratio(&self) -> f64 {
            if self.assignments.is_empty() {
                return 0.0;
            }
            f64::from(self.total_satisfaction_score) / f64::from(max_total(self.assignments.len()))
        }
    }
}
