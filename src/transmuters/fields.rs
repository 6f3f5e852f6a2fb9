//! Column names of the Leaguepedia cargo tables used by the queries.

pub const TOURNAMENT_FIELDS: [&str; 12] = [
    "Leagues.League_Short",
    "Tournaments.Name",
    "Tournaments.DateStart",
    "Tournaments.Date",
    "Tournaments.Region",
    "Tournaments.League",
    "Tournaments.Rulebook",
    "Tournaments.TournamentLevel",
    "Tournaments.IsQualifier",
    "Tournaments.IsPlayoffs",
    "Tournaments.IsOfficial",
    "Tournaments.OverviewPage",
];

pub const GAME_FIELDS: [&str; 32] = [
    "ScoreboardGames.GameId",
    "ScoreboardGames.MatchId",
    "ScoreboardGames.Tournament",
    "ScoreboardGames.Team1",
    "ScoreboardGames.Team2",
    "ScoreboardGames.Winner",
    "ScoreboardGames.Gamelength_Number",
    "ScoreboardGames.DateTime_UTC",
    "ScoreboardGames.Team1Score",
    "ScoreboardGames.Team2Score",
    "ScoreboardGames.Team1Bans",
    "ScoreboardGames.Team2Bans",
    "ScoreboardGames.Team1Picks",
    "ScoreboardGames.Team2Picks",
    "ScoreboardGames.Team1Players",
    "ScoreboardGames.Team2Players",
    "ScoreboardGames.Team1Dragons",
    "ScoreboardGames.Team2Dragons",
    "ScoreboardGames.Team1Barons",
    "ScoreboardGames.Team2Barons",
    "ScoreboardGames.Team1Towers",
    "ScoreboardGames.Team2Towers",
    "ScoreboardGames.Team1RiftHeralds",
    "ScoreboardGames.Team2RiftHeralds",
    "ScoreboardGames.Team1Inhibitors",
    "ScoreboardGames.Team2Inhibitors",
    "ScoreboardGames.Patch",
    "ScoreboardGames.MatchHistory",
    "ScoreboardGames.VOD",
    "ScoreboardGames.Gamename",
    "ScoreboardGames.N_GameInMatch",
    "ScoreboardGames.OverviewPage",
];

pub const GAME_PLAYER_FIELDS: [&str; 10] = [
    "ScoreboardPlayers.Name=gameName",
    "ScoreboardPlayers.Role_Number=gameRoleNumber",
    "ScoreboardPlayers.Champion",
    "ScoreboardPlayers.Side",
    "ScoreboardPlayers.Link=link",
    "Players.Name=irlName",
    "Players.Country",
    "Players.Birthdate",
    "Players.ID=currentGameName",
    "Players._pageID=pageId",
];

/// Draft slots in the order of a pro play draft (as of June 2020).
pub const DRAFT_ORDER: [&str; 20] = [
    "Team1Ban1",
    "Team2Ban1",
    "Team1Ban2",
    "Team2Ban2",
    "Team1Ban3",
    "Team2Ban3",
    "Team1Pick1",
    "Team2Pick1",
    "Team2Pick2",
    "Team1Pick2",
    "Team1Pick3",
    "Team2Pick3",
    "Team2Ban4",
    "Team1Ban4",
    "Team2Ban5",
    "Team1Ban5",
    "Team2Pick4",
    "Team1Pick4",
    "Team1Pick5",
    "Team2Pick5",
];

/// Columns identifying a draft record besides its slots.
pub const DRAFT_RECORD_FIELDS: [&str; 4] = ["Team1", "Team2", "GameId", "OverviewPage"];

pub const PLAYER_PROFILE_FIELDS: [&str; 11] = [
    "PlayerRedirects.AllName=link",
    "Players.ID=gameName",
    "Players.Image=image",
    "Players.NameFull=realName",
    "Players.Birthdate=birthday",
    "Players.Team=team",
    "Players.Role=role",
    "Players.SoloqueueIds=soloqueueIds",
    "Players.Stream=stream",
    "Players.Twitter=twitter",
    "Players._pageName=pageName",
];

/// Every draft column of the `PicksAndBansS7` table.
pub fn draft_fields() -> Vec<String> {
    DRAFT_RECORD_FIELDS
        .iter()
        .chain(DRAFT_ORDER.iter())
        .map(|column| format!("PicksAndBansS7.{column}"))
        .collect()
}
