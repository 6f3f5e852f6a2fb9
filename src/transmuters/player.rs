use crate::{site::Row, types::PlayerProfile};

/// Transforms a `Players` row joined with `PlayerRedirects` into a [`PlayerProfile`].
pub fn transmute_player_profile(row: &Row) -> PlayerProfile {
    let page_name = row.get("pageName").trim().to_string();

    PlayerProfile {
        game_name: row.text("gameName").unwrap_or_else(|| page_name.clone()),
        real_name: row.text("realName"),
        birthday: row.date("birthday"),
        team: row.text("team"),
        role: row.text("role"),
        soloqueue_ids: row.text("soloqueueIds"),
        stream: row.text("stream"),
        twitter: row.text("twitter"),
        image: row.text("image"),
        page_name,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::NaiveDate;

    use super::*;

    pub fn profile_row(link: &str, game_name: &str, team: &str) -> Row {
        [
            ("link", link),
            ("gameName", game_name),
            ("image", "Faker 2023 Worlds.png"),
            ("realName", "Lee Sang-hyeok (이상혁)"),
            ("birthday", "1996-05-07"),
            ("team", team),
            ("role", "Mid"),
            ("soloqueueIds", "<b>KR:</b> Hide on bush"),
            ("stream", ""),
            ("twitter", "faker"),
            ("pageName", game_name),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn profile_fields_are_typed() {
        let profile = transmute_player_profile(&profile_row("Faker", "Faker", "T1"));

        assert_eq!(profile.game_name, "Faker");
        assert_eq!(profile.team.as_deref(), Some("T1"));
        assert_eq!(profile.birthday, NaiveDate::from_ymd_opt(1996, 5, 7));
        assert_eq!(profile.stream, None);
        assert_eq!(profile.page_url(), "https://lol.fandom.com/wiki/Faker");
    }

    #[test]
    fn page_name_stands_in_for_a_missing_id() {
        let mut row = profile_row("Faker", "Faker", "T1");
        row.insert("gameName", "");

        assert_eq!(transmute_player_profile(&row).game_name, "Faker");
    }
}
