use std::fmt;

use crate::error::{ParserError, ParserResult};

/// A projected column, rendered `column=alias` when aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub column: String,
    pub alias: Option<String>,
}

impl Field {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            alias: None,
        }
    }

    pub fn aliased(column: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        match value.split_once('=') {
            Some((column, alias)) => Self::aliased(column.trim(), alias.trim()),
            None => Self::new(value.trim()),
        }
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{}={}", self.column, alias),
            None => write!(f, "{}", self.column),
        }
    }
}

/// A literal comparison of the `where` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Eq(String, String),
    Lt(String, String),
    Le(String, String),
    Gt(String, String),
    Ge(String, String),
    /// Exclusive on both bounds.
    Between(String, String, String),
    In(String, Vec<String>),
    Raw(String),
}

impl Condition {
    pub fn eq(column: &str, value: impl fmt::Display) -> Self {
        Self::Eq(column.into(), value.to_string())
    }

    pub fn lt(column: &str, value: impl fmt::Display) -> Self {
        Self::Lt(column.into(), value.to_string())
    }

    pub fn le(column: &str, value: impl fmt::Display) -> Self {
        Self::Le(column.into(), value.to_string())
    }

    pub fn gt(column: &str, value: impl fmt::Display) -> Self {
        Self::Gt(column.into(), value.to_string())
    }

    pub fn ge(column: &str, value: impl fmt::Display) -> Self {
        Self::Ge(column.into(), value.to_string())
    }

    pub fn between(column: &str, low: impl fmt::Display, high: impl fmt::Display) -> Self {
        Self::Between(column.into(), low.to_string(), high.to_string())
    }

    pub fn is_in<T: fmt::Display>(column: &str, values: impl IntoIterator<Item = T>) -> Self {
        Self::In(
            column.into(),
            values.into_iter().map(|v| v.to_string()).collect(),
        )
    }
}

fn quote(literal: &str) -> String {
    format!("'{}'", literal.replace('\'', "''"))
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq(column, value) => write!(f, "{} = {}", column, quote(value)),
            Self::Lt(column, value) => write!(f, "{} < {}", column, quote(value)),
            Self::Le(column, value) => write!(f, "{} <= {}", column, quote(value)),
            Self::Gt(column, value) => write!(f, "{} > {}", column, quote(value)),
            Self::Ge(column, value) => write!(f, "{} >= {}", column, quote(value)),
            Self::Between(column, low, high) => write!(
                f,
                "{column} > {} AND {column} < {}",
                quote(low),
                quote(high)
            ),
            Self::In(column, values) => {
                let values = values
                    .iter()
                    .map(|v| quote(v))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{} IN ({})", column, values)
            }
            Self::Raw(clause) => write!(f, "{}", clause),
        }
    }
}

/// Structural description of a cargo query.
///
/// The row offset is not part of the query, it is owned by the
/// [`QueryGateway`](super::gateway::QueryGateway) issuing the pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CargoQuery {
    pub tables: Vec<String>,
    pub join_on: Vec<String>,
    pub fields: Vec<Field>,
    pub conditions: Vec<Condition>,
    pub order_by: Vec<String>,
    pub group_by: Vec<String>,
    /// Maximum amount of rows returned across all pages.
    pub limit: Option<u32>,
}

impl CargoQuery {
    pub fn new<'a>(tables: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            tables: tables.into_iter().map(str::to_string).collect(),
            ..Default::default()
        }
    }

    pub fn join_on(mut self, join: &str) -> Self {
        self.join_on.push(join.to_string());
        self
    }

    pub fn fields<F: Into<Field>>(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn order_by(mut self, column: &str) -> Self {
        self.order_by.push(column.to_string());
        self
    }

    pub fn group_by(mut self, column: &str) -> Self {
        self.group_by.push(column.to_string());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> ParserResult<()> {
        if self.tables.iter().all(|t| t.trim().is_empty()) {
            return Err(ParserError::InvalidQuery("no table to query"));
        }
        if self.fields.iter().all(|f| f.column.trim().is_empty()) {
            return Err(ParserError::InvalidQuery("no field to project"));
        }
        if !self.join_on.is_empty() && self.tables.len() < 2 {
            return Err(ParserError::InvalidQuery("join requested on a single table"));
        }

        Ok(())
    }

    /// The `where` clause, conditions being joined with `AND`.
    pub fn where_clause(&self) -> String {
        self.conditions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// Parameters of the `cargoquery` action, empty clauses omitted.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let fields = self
            .fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        [
            ("tables", self.tables.join(", ")),
            ("fields", fields),
            ("where", self.where_clause()),
            ("join_on", self.join_on.join(", ")),
            ("order_by", self.order_by.join(", ")),
            ("group_by", self.group_by.join(", ")),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parses_aliases() {
        let field: Field = "ScoreboardPlayers.Name=gameName".into();
        assert_eq!(field.column, "ScoreboardPlayers.Name");
        assert_eq!(field.alias.as_deref(), Some("gameName"));
        assert_eq!(field.to_string(), "ScoreboardPlayers.Name=gameName");

        let plain: Field = "Tournaments.Region".into();
        assert_eq!(plain.alias, None);
        assert_eq!(plain.to_string(), "Tournaments.Region");
    }

    #[test]
    fn conditions_render_natural_operators() {
        assert_eq!(
            Condition::lt("Tournaments.Year", 2020).to_string(),
            "Tournaments.Year < '2020'"
        );
        assert_eq!(
            Condition::ge("Tournaments.Year", 2020).to_string(),
            "Tournaments.Year >= '2020'"
        );
        assert_eq!(
            Condition::between("ScoreboardGames.DateTime_UTC", "2020-01-01", "2020-02-01")
                .to_string(),
            "ScoreboardGames.DateTime_UTC > '2020-01-01' AND ScoreboardGames.DateTime_UTC < '2020-02-01'"
        );
    }

    #[test]
    fn literals_are_escaped() {
        assert_eq!(
            Condition::eq("Teamnames.Short", "o'neil").to_string(),
            "Teamnames.Short = 'o''neil'"
        );
        assert_eq!(
            Condition::is_in("PlayerRedirects.AllName", ["Faker", "Kim 'Bengi'"]).to_string(),
            "PlayerRedirects.AllName IN ('Faker', 'Kim ''Bengi''')"
        );
    }

    #[test]
    fn params_omit_empty_clauses() {
        let query = CargoQuery::new(["Tournaments"])
            .field("Region")
            .group_by("Region");

        assert_eq!(
            query.to_params(),
            vec![
                ("tables", "Tournaments".to_string()),
                ("fields", "Region".to_string()),
                ("group_by", "Region".to_string()),
            ]
        );
    }

    #[test]
    fn params_join_everything() {
        let query = CargoQuery::new(["Tournaments", "Leagues"])
            .join_on("Tournaments.League = Leagues.League")
            .fields(["Leagues.League_Short", "Tournaments.Name"])
            .filter(Condition::eq("Tournaments.Region", "Korea"))
            .filter(Condition::eq("Tournaments.Year", 2020))
            .order_by("Tournaments.Date");

        let params = query.to_params();

        assert!(params.contains(&("tables", "Tournaments, Leagues".to_string())));
        assert!(params.contains(&(
            "fields",
            "Leagues.League_Short, Tournaments.Name".to_string()
        )));
        assert!(params.contains(&(
            "where",
            "Tournaments.Region = 'Korea' AND Tournaments.Year = '2020'".to_string()
        )));
        assert!(params.contains(&(
            "join_on",
            "Tournaments.League = Leagues.League".to_string()
        )));
        assert!(params.contains(&("order_by", "Tournaments.Date".to_string())));
    }

    #[test]
    fn validation_rejects_incomplete_queries() {
        assert!(matches!(
            CargoQuery::new(Vec::<&str>::new()).field("Name").validate(),
            Err(ParserError::InvalidQuery(_))
        ));
        assert!(matches!(
            CargoQuery::new(["Tournaments"]).validate(),
            Err(ParserError::InvalidQuery(_))
        ));
        assert!(matches!(
            CargoQuery::new(["Tournaments"])
                .field("Name")
                .join_on("A.B = C.D")
                .validate(),
            Err(ParserError::InvalidQuery(_))
        ));
        assert!(
            CargoQuery::new(["Tournaments"])
                .field("Name")
                .validate()
                .is_ok()
        );
    }
}
