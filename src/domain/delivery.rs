use serde::{Deserialize, Serialize};

/// Dismissals of this kind are not credited to the bowler
pub const RUN_OUT: &str = "run out";

/// Placeholder some exports write for "no extras"
pub const NO_EXTRAS: &str = "None";

/// One row of the ball-by-ball table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub match_id: String,
    pub batting_team: String,
    pub bowling_team: String,
    pub innings: u32,
    pub striker: String,
    pub bowler: String,
    pub runs_off_bat: u32,
    pub wicket_type: Option<String>,
    pub extras_type: Option<String>,
}

impl Delivery {
    pub fn is_wicket(&self) -> bool {
        self.wicket_type.is_some()
    }

    /// A dismissal the bowler gets credit for
    pub fn is_bowler_wicket(&self) -> bool {
        matches!(self.wicket_type.as_deref(), Some(kind) if kind != RUN_OUT)
    }

    pub fn is_four(&self) -> bool {
        self.runs_off_bat == 4
    }

    pub fn is_six(&self) -> bool {
        self.runs_off_bat == 6
    }

    /// Extras category, ignoring the literal "None" placeholder
    pub fn extras_kind(&self) -> Option<&str> {
        self.extras_type
            .as_deref()
            .filter(|kind| *kind != NO_EXTRAS)
    }
}

#[cfg(test)]
pub(crate) fn delivery(
    match_id: &str,
    batting: &str,
    bowling: &str,
    striker: &str,
    bowler: &str,
    runs: u32,
    wicket: Option<&str>,
) -> Delivery {
    Delivery {
        match_id: match_id.to_string(),
        batting_team: batting.to_string(),
        bowling_team: bowling.to_string(),
        innings: 1,
        striker: striker.to_string(),
        bowler: bowler.to_string(),
        runs_off_bat: runs,
        wicket_type: wicket.map(str::to_string),
        extras_type: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_out_is_not_a_bowler_wicket() {
        let run_out = delivery("1", "A", "B", "x", "y", 0, Some(RUN_OUT));
        assert!(run_out.is_wicket());
        assert!(!run_out.is_bowler_wicket());

        let caught = delivery("1", "A", "B", "x", "y", 0, Some("caught"));
        assert!(caught.is_bowler_wicket());

        let dot = delivery("1", "A", "B", "x", "y", 0, None);
        assert!(!dot.is_wicket());
        assert!(!dot.is_bowler_wicket());
    }

    #[test]
    fn test_boundaries() {
        assert!(delivery("1", "A", "B", "x", "y", 4, None).is_four());
        assert!(delivery("1", "A", "B", "x", "y", 6, None).is_six());
        assert!(!delivery("1", "A", "B", "x", "y", 5, None).is_four());
    }

    #[test]
    fn test_extras_kind_ignores_placeholder() {
        let mut ball = delivery("1", "A", "B", "x", "y", 0, None);
        ball.extras_type = Some(NO_EXTRAS.to_string());
        assert_eq!(ball.extras_kind(), None);

        ball.extras_type = Some("wides".to_string());
        assert_eq!(ball.extras_kind(), Some("wides"));
    }
}
