//! Country draft engine: each of seven players ranks the seven playable
//! countries, and the draft picks the country-to-player assignment with the
//! highest total satisfaction, breaking ties uniformly at random.

pub mod draft;
pub mod error;
pub mod matrix;
pub mod model;
pub mod permute;

pub use draft::{assign_countries, assign_countries_with_rng};
pub use error::DraftError;
pub use model::entity::{DraftRequest, PlayerList, Preference, COUNTRIES};
pub use model::result::{Assignment, AssignmentResult};
pub use model::scoring::SATISFACTION_TABLE;
