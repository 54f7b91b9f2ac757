use std::collections::HashMap;

use itertools::Itertools;

use crate::error::DraftError;
use crate::model::entity::{Country, PlayerList, Rank};
use crate::model::scoring::{score_for_rank, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankScore {
    pub rank: Rank,
    pub score: Score,
}

/// Precomputed country -> (rank, score) lookup for every player, so scoring a
/// permutation during the sweep is plain indexing. Rows follow the supplied
/// player order, columns the supplied country order.
#[derive(Debug, Clone, PartialEq)]
pub struct SatisfactionMatrix {
    rows: Vec<Vec<RankScore>>,
}

impl SatisfactionMatrix {
    /// Validates that each player's preferences cover `countries` exactly once
    /// with unique ranks in `1..=C`, and rejects the input otherwise.
    pub fn build(
        player_lists: &[PlayerList],
        countries: &[Country],
    ) -> Result<SatisfactionMatrix, DraftError> {
        let columns: HashMap<&str, usize> = countries
            .iter()
            .enumerate()
            .map(|(column, country)| (country.as_str(), column))
            .collect();

        let mut rows = Vec::with_capacity(player_lists.len());
        for player in player_lists {
            let mut row: Vec<Option<RankScore>> = vec![None; countries.len()];
            for preference in &player.preferences {
                let column = *columns.get(preference.country.as_str()).ok_or_else(|| {
                    DraftError::UnknownCountry {
                        player: player.player_id,
                        country: preference.country.clone(),
                    }
                })?;
                if row[column].is_some() {
                    return Err(DraftError::DuplicateCountry {
                        player: player.player_id,
                        country: preference.country.clone(),
                    });
                }
                let in_range = (preference.rank as usize) <= countries.len();
                let score = score_for_rank(preference.rank).filter(|_| in_range).ok_or(
                    DraftError::RankOutOfRange {
                        player: player.player_id,
                        rank: preference.rank,
                        max: countries.len() as Rank,
                    },
                )?;
                row[column] = Some(RankScore { rank: preference.rank, score });
            }
            if let Some(rank) = player.preferences.iter().map(|p| p.rank).duplicates().next() {
                return Err(DraftError::DuplicateRank { player: player.player_id, rank });
            }
            let row = row
                .into_iter()
                .zip(countries)
                .map(|(entry, country)| {
                    entry.ok_or_else(|| DraftError::MissingPreference {
                        player: player.player_id,
                        country: country.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Ok(SatisfactionMatrix { rows })
    }

    pub fn entry(&self, player: usize, country: usize) -> RankScore {
        self.rows[player][country]
    }
}
