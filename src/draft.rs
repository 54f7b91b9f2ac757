use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::DraftError;
use crate::matrix::SatisfactionMatrix;
use crate::model::entity::{canonical_countries, Country, DraftRequest, GameId, PlayerList};
use crate::model::result::{Assignment, AssignmentResult};
use crate::model::scoring::Score;
use crate::permute::permutations_of;

/// Assigns the canonical country set to the requested players so that total
/// satisfaction is maximal. When several assignments tie for the optimum, one
/// is drawn uniformly at random so no player is favored by enumeration order.
pub fn assign_countries(request: &DraftRequest) -> Result<AssignmentResult, DraftError> {
    let mut rng = SmallRng::from_entropy();
    assign_countries_with_rng(request, &mut rng)
}

/// Same as [`assign_countries`], with a caller-supplied rng for seeded runs.
pub fn assign_countries_with_rng<R: Rng + ?Sized>(
    request: &DraftRequest,
    rng: &mut R,
) -> Result<AssignmentResult, DraftError> {
    draft(request.game_id, &request.player_lists, &canonical_countries(), rng)
}

pub fn draft<R: Rng + ?Sized>(
    game_id: GameId,
    player_lists: &[PlayerList],
    countries: &[Country],
    rng: &mut R,
) -> Result<AssignmentResult, DraftError> {
    if player_lists.is_empty() || player_lists.len() != countries.len() {
        return Err(DraftError::PlayerCountMismatch {
            expected: countries.len(),
            actual: player_lists.len(),
        });
    }
    let matrix = SatisfactionMatrix::build(player_lists, countries)?;

    // Exhaustive sweep. Viable only because the country set stays small and
    // fixed; a configurable-size variant would need bipartite matching instead.
    let columns: Vec<usize> = (0..countries.len()).collect();
    let mut best_total: Option<Score> = None;
    let mut tied: Vec<Vec<usize>> = Vec::new();
    for ordering in permutations_of(&columns) {
        let total: Score = ordering
            .iter()
            .enumerate()
            .map(|(seat, &column)| matrix.entry(seat, column).score)
            .sum();
        match best_total {
            Some(best) if total < best => {}
            Some(best) if total == best => tied.push(ordering),
            _ => {
                best_total = Some(total);
                tied = vec![ordering];
            }
        }
    }

    // Non-empty input means at least one ordering was scored.
    let chosen = tied.choose(rng).expect("tie set is never empty");

    let assignments: Vec<Assignment> = chosen
        .iter()
        .enumerate()
        .map(|(seat, &column)| {
            let held = matrix.entry(seat, column);
            Assignment {
                player_id: player_lists[seat].player_id,
                country: countries[column].clone(),
                rank: held.rank,
                satisfaction_score: held.score,
            }
        })
        .collect();
    let total_satisfaction_score = assignments.iter().map(|a| a.satisfaction_score).sum();
    let total_rank = assignments.iter().map(|a| a.rank).sum();
    debug!(
        "game {game_id}: drew one of {} optimal assignments, total satisfaction {total_satisfaction_score}, total rank {total_rank}",
        tied.len(),
    );

    Ok(AssignmentResult { game_id, assignments, total_satisfaction_score, total_rank })
}
