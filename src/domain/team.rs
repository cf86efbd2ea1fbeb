use std::fmt;

use super::Delivery;

/// Sentinel the dashboard sends to mean "no team filter"
pub const ALL_TEAMS: &str = "All Teams";

/// Shown in place of a team name when the `team` parameter is absent
const UNSPECIFIED: &str = "None";

/// Team selector parsed from the `team` query parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TeamFilter {
    All,
    Team(String),
    /// No `team` parameter at all; selects nothing
    Unspecified,
}

impl TeamFilter {
    /// A team name, or the sentinel for the whole table
    pub fn parse(name: &str) -> Self {
        match name {
            ALL_TEAMS => TeamFilter::All,
            name => TeamFilter::Team(name.to_string()),
        }
    }

    /// Query-parameter form: a missing parameter matches no deliveries
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.map_or(TeamFilter::Unspecified, TeamFilter::parse)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TeamFilter::All => ALL_TEAMS,
            TeamFilter::Team(name) => name,
            TeamFilter::Unspecified => UNSPECIFIED,
        }
    }

    /// Team batted or bowled on this delivery
    pub fn involves(&self, ball: &Delivery) -> bool {
        self.batted(ball) || self.bowled(ball)
    }

    pub fn batted(&self, ball: &Delivery) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Team(name) => ball.batting_team == *name,
            TeamFilter::Unspecified => false,
        }
    }

    pub fn bowled(&self, ball: &Delivery) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Team(name) => ball.bowling_team == *name,
            TeamFilter::Unspecified => false,
        }
    }
}

impl fmt::Display for TeamFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delivery::delivery;

    #[test]
    fn test_parse_sentinel_and_name() {
        assert_eq!(TeamFilter::parse(ALL_TEAMS), TeamFilter::All);
        assert_eq!(
            TeamFilter::parse("Rajasthan Royals"),
            TeamFilter::Team("Rajasthan Royals".to_string())
        );
    }

    #[test]
    fn test_missing_param_selects_nothing() {
        let filter = TeamFilter::from_param(None);
        assert_eq!(filter, TeamFilter::Unspecified);
        assert_eq!(filter.to_string(), "None");

        let ball = delivery("1", "A", "B", "x", "y", 1, None);
        assert!(!filter.involves(&ball) && !filter.batted(&ball) && !filter.bowled(&ball));
        assert_eq!(TeamFilter::from_param(Some(ALL_TEAMS)), TeamFilter::All);
    }

    #[test]
    fn test_batted_and_bowled_sides() {
        let ball = delivery("1", "A", "B", "x", "y", 1, None);
        let a = TeamFilter::Team("A".to_string());
        let b = TeamFilter::Team("B".to_string());
        let c = TeamFilter::Team("C".to_string());

        assert!(a.involves(&ball) && a.batted(&ball) && !a.bowled(&ball));
        assert!(b.involves(&ball) && !b.batted(&ball) && b.bowled(&ball));
        assert!(!c.involves(&ball));
        assert!(TeamFilter::All.batted(&ball) && TeamFilter::All.bowled(&ball));
    }

    #[test]
    fn test_display_uses_sentinel() {
        assert_eq!(TeamFilter::All.to_string(), ALL_TEAMS);
    }
}
