use crate::{
    site::Row,
    types::{Tournament, TournamentLevel},
};

/// Transforms a `Tournaments` row joined with `Leagues` into a [`Tournament`].
pub fn transmute_tournament(row: &Row) -> Tournament {
    let level = row
        .get("TournamentLevel")
        .parse()
        .unwrap_or(TournamentLevel::Primary);

    Tournament {
        name: row.get("Name").trim().to_string(),
        start: row.date("DateStart"),
        end: row.date("Date"),
        region: row.get("Region").trim().to_string(),
        league: row.get("League").trim().to_string(),
        league_short: row.get("League Short").trim().to_string(),
        rulebook: row.text("Rulebook"),
        level,
        is_qualifier: row.flag("IsQualifier"),
        is_playoffs: row.flag("IsPlayoffs"),
        is_official: row.flag("IsOfficial"),
        overview_page: row.get("OverviewPage").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn lec_spring() -> Row {
        [
            ("Name", "LEC 2020 Spring"),
            ("DateStart", "2020-01-24"),
            ("Date", "2020-04-19"),
            ("Region", "Europe"),
            ("League", "LoL European Championship"),
            ("League Short", "LEC"),
            ("Rulebook", ""),
            ("TournamentLevel", "Primary"),
            ("IsQualifier", "0"),
            ("IsPlayoffs", "0"),
            ("IsOfficial", "1"),
            ("OverviewPage", "LEC/2020 Season/Spring Season"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn tournament_fields_are_typed() {
        let tournament = transmute_tournament(&lec_spring());

        assert_eq!(tournament.name, "LEC 2020 Spring");
        assert_eq!(tournament.start, NaiveDate::from_ymd_opt(2020, 1, 24));
        assert_eq!(tournament.end, NaiveDate::from_ymd_opt(2020, 4, 19));
        assert_eq!(tournament.league_short, "LEC");
        assert_eq!(tournament.rulebook, None);
        assert_eq!(tournament.level, TournamentLevel::Primary);
        assert!(!tournament.is_qualifier);
        assert!(!tournament.is_playoffs);
        assert!(tournament.is_official);
        assert_eq!(tournament.overview_page, "LEC/2020 Season/Spring Season");
    }

    #[test]
    fn transmuting_twice_gives_equal_tournaments() {
        let row = lec_spring();

        assert_eq!(transmute_tournament(&row), transmute_tournament(&row));
    }
}
