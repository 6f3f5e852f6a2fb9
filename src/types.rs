use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

const WIKI_ROUTE: &str = "https://lol.fandom.com/wiki";

/// Wiki page URL from a page name, spaces become underscores like on the wiki itself.
fn wiki_page_url(page: &str) -> String {
    format!("{}/{}", WIKI_ROUTE, urlencoding::encode(&page.replace(' ', "_")))
}

// ============================================================================
// Enumerations
// ============================================================================

/// Fixed team-in-a-game label, Team1 is always blue side on Leaguepedia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Blue, Side::Red];

    /// Team index used by the `Team1*`/`Team2*` columns.
    pub fn team_number(&self) -> u8 {
        match self {
            Self::Blue => 1,
            Self::Red => 2,
        }
    }

    pub fn from_team_number(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::Blue),
            "2" => Some(Self::Red),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "BLUE",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bottom,
    Support,
}

impl Role {
    /// Roles in the order Leaguepedia lists players in a scoreboard.
    pub const ALL: [Role; 5] = [
        Role::Top,
        Role::Jungle,
        Role::Mid,
        Role::Bottom,
        Role::Support,
    ];

    /// Parses the `Role_Number` column, "1" being top and "5" support.
    pub fn from_role_number(value: &str) -> Option<Self> {
        let index: usize = value.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn from_position(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Jungle => "JUNGLE",
            Self::Mid => "MID",
            Self::Bottom => "BOTTOM",
            Self::Support => "SUPPORT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TournamentLevel {
    Primary,
    Secondary,
    Major,
    Showmatch,
    /// Any level the wiki introduces later, kept verbatim.
    Other(String),
}

impl TournamentLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Major => "Major",
            Self::Showmatch => "Showmatch",
            Self::Other(level) => level,
        }
    }
}

impl FromStr for TournamentLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "major" => Self::Major,
            "showmatch" => Self::Showmatch,
            _ => Self::Other(s.trim().to_string()),
        })
    }
}

impl fmt::Display for TournamentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tournaments
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tournament {
    pub name: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub region: String,
    pub league: String,
    pub league_short: String,
    /// Rulebook URL.
    pub rulebook: Option<String>,
    pub level: TournamentLevel,
    pub is_qualifier: bool,
    pub is_playoffs: bool,
    pub is_official: bool,
    /// Page identifier used to query the games of this tournament.
    pub overview_page: String,
}

impl Tournament {
    pub fn page_url(&self) -> String {
        wiki_page_url(&self.overview_page)
    }
}

// ============================================================================
// Games
// ============================================================================

/// Identifiers used to join a game against the other Leaguepedia tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeaguepediaGameIdentifier {
    pub game_id: String,
    pub match_id: String,
    pub overview_page: String,
    pub match_history_url: Option<String>,
}

/// Identifier of the game on the Riot live game API, parsed from the match history URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiotGameIdentifier {
    pub platform_id: String,
    pub game_id: u64,
    pub game_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameSources {
    pub leaguepedia: LeaguepediaGameIdentifier,
    pub riot: Option<RiotGameIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub sources: GameSources,
    pub tournament: String,
    /// Start of the game, UTC with second precision. Unplayed games have none.
    pub start: Option<DateTime<Utc>>,
    pub game_in_series: u8,
    pub patch: String,
    /// Duration in seconds.
    pub duration: u32,
    pub winner: Side,
    pub vod: Option<String>,
    pub blue: Team,
    pub red: Team,
    /// Filled by the game details enrichment, in draft order.
    pub picks_bans: Option<Vec<PickBanEntry>>,
}

impl Game {
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Blue => &mut self.blue,
            Side::Red => &mut self.red,
        }
    }

    pub fn teams(&self) -> impl Iterator<Item = (Side, &Team)> {
        Side::BOTH.into_iter().map(|side| (side, self.team(side)))
    }

    pub fn page_url(&self) -> String {
        wiki_page_url(&self.sources.leaguepedia.overview_page)
    }

    pub fn duration_formatted(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamEndOfGameStats {
    pub tower_kills: u16,
    pub inhibitor_kills: u16,
    pub dragon_kills: u16,
    pub rift_herald_kills: u16,
    pub baron_kills: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    /// Games won in the series, as displayed on the scoreboard.
    pub series_score: u8,
    pub players: Vec<Player>,
    pub end_of_game_stats: TeamEndOfGameStats,
    pub bans: Vec<Champion>,
}

/// A champion as written by the source and its resolved identifier, `None` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Champion {
    pub name: String,
    pub id: Option<u16>,
}

impl Champion {
    /// Same champion, compared on identifiers when both sides resolved and on names otherwise.
    pub fn is_same(&self, other: &Champion) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.name.trim().eq_ignore_ascii_case(other.name.trim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub champion: Champion,
    pub role: Option<Role>,
    pub identity: LeaguepediaPlayerIdentifier,
}

/// Leaguepedia-specific fields identifying a player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeaguepediaPlayerIdentifier {
    /// In-game name as written on the scoreboard.
    pub game_name: Option<String>,
    /// Player page link, stable across renames.
    pub link: Option<String>,
    /// Current in-game name.
    pub name: Option<String>,
    pub irl_name: Option<String>,
    pub country: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub page_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickBanEntry {
    pub champion: Champion,
    pub is_ban: bool,
    pub side: Side,
}

// ============================================================================
// Players
// ============================================================================

/// Current profile of a player, resolved from their page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerProfile {
    pub game_name: String,
    pub real_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub team: Option<String>,
    pub role: Option<String>,
    pub soloqueue_ids: Option<String>,
    pub stream: Option<String>,
    pub twitter: Option<String>,
    pub image: Option<String>,
    pub page_name: String,
}

impl PlayerProfile {
    pub fn page_url(&self) -> String {
        wiki_page_url(&self.page_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_numbers_and_positions() {
        assert_eq!(Role::from_role_number("1"), Some(Role::Top));
        assert_eq!(Role::from_role_number(" 5 "), Some(Role::Support));
        assert_eq!(Role::from_role_number("0"), None);
        assert_eq!(Role::from_role_number("6"), None);
        assert_eq!(Role::from_role_number(""), None);
        assert_eq!(Role::from_position(3), Some(Role::Bottom));
        assert_eq!(Role::from_position(5), None);
    }

    #[test]
    fn side_team_numbers() {
        assert_eq!(Side::from_team_number("1"), Some(Side::Blue));
        assert_eq!(Side::from_team_number("2"), Some(Side::Red));
        assert_eq!(Side::from_team_number("3"), None);
        assert_eq!(Side::Red.team_number(), 2);
        assert_eq!(Side::Blue.to_string(), "BLUE");
    }

    #[test]
    fn tournament_level_keeps_unknown_values() {
        assert_eq!("primary".parse(), Ok(TournamentLevel::Primary));
        assert_eq!("Showmatch".parse(), Ok(TournamentLevel::Showmatch));
        assert_eq!(
            "Academy".parse(),
            Ok(TournamentLevel::Other("Academy".to_string()))
        );
        assert_eq!(TournamentLevel::Other("Academy".into()).as_str(), "Academy");
    }

    #[test]
    fn champions_compare_on_ids_then_names() {
        let resolved = Champion {
            name: "Kai'Sa".into(),
            id: Some(145),
        };
        let other_spelling = Champion {
            name: "Kaisa".into(),
            id: Some(145),
        };
        let unresolved = Champion {
            name: "kai'sa".into(),
            id: None,
        };

        assert!(resolved.is_same(&other_spelling));
        assert!(resolved.is_same(&unresolved));
        assert!(!other_spelling.is_same(&unresolved));
    }

    #[test]
    fn page_urls_are_encoded() {
        let profile = PlayerProfile {
            game_name: "Faker".into(),
            real_name: None,
            birthday: None,
            team: None,
            role: None,
            soloqueue_ids: None,
            stream: None,
            twitter: None,
            image: None,
            page_name: "Faker".into(),
        };
        assert_eq!(profile.page_url(), "https://lol.fandom.com/wiki/Faker");

        assert_eq!(
            wiki_page_url("LEC/2020 Season/Spring Season"),
            "https://lol.fandom.com/wiki/LEC%2F2020_Season%2FSpring_Season"
        );
    }
}
