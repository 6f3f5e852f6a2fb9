//! Pure mappings from cargo rows to domain objects.

pub mod fields;
pub mod game;
pub mod game_players;
pub mod picks_bans;
pub mod player;
pub mod tournament;

pub use game::{parse_riot_identifier, transmute_game};
pub use game_players::merge_players;
pub use picks_bans::{DraftRecord, transmute_draft_record, transmute_picks_bans};
pub use player::transmute_player_profile;
pub use tournament::transmute_tournament;
