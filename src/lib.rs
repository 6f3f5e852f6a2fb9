//! Esports match data from the Leaguepedia cargo tables.
//!
//! [`Leaguepedia`] lists regions, tournaments and games, enriches games with
//! their draft and players, and resolves team and player identities.

pub mod cache;
pub mod champions;
pub mod config;
pub mod error;
pub mod leaguepedia;
pub mod logging;
pub mod reconcile;
pub mod site;
pub mod transmuters;
pub mod types;

pub use champions::{ChampionLookup, ChampionTable};
pub use config::Config;
pub use error::{ParserError, ParserResult};
pub use leaguepedia::{Leaguepedia, TournamentFilter};
pub use types::*;
