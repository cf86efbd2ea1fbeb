use chrono::{DateTime, Utc};

use super::{Delivery, MatchInfo, TeamFilter};
use crate::error::{CreaseError, Result};

/// Both datasets, loaded once at startup and shared read-only between requests
#[derive(Debug, Clone)]
pub struct DataStore {
    matches: Vec<MatchInfo>,
    deliveries: Vec<Delivery>,
    /// Whether the ball-by-ball file carried an `extras_type` column
    has_extras_type: bool,
    loaded_at: DateTime<Utc>,
}

impl DataStore {
    pub fn new(matches: Vec<MatchInfo>, deliveries: Vec<Delivery>, has_extras_type: bool) -> Self {
        Self {
            matches,
            deliveries,
            has_extras_type,
            loaded_at: Utc::now(),
        }
    }

    pub fn matches(&self) -> &[MatchInfo] {
        &self.matches
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn has_extras_type(&self) -> bool {
        self.has_extras_type
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Deliveries the team batted or bowled in (everything for `All`).
    /// An empty selection is a `NoData` error.
    pub fn require_deliveries(&self, team: &TeamFilter) -> Result<Vec<&Delivery>> {
        let selected: Vec<&Delivery> = self
            .deliveries
            .iter()
            .filter(|ball| team.involves(ball))
            .collect();
        if selected.is_empty() {
            return Err(CreaseError::NoData {
                team: team.to_string(),
            });
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delivery::delivery;

    fn store() -> DataStore {
        DataStore::new(
            Vec::new(),
            vec![
                delivery("1", "A", "B", "a1", "b1", 1, None),
                delivery("1", "B", "A", "b2", "a2", 2, None),
                delivery("2", "C", "D", "c1", "d1", 3, None),
            ],
            false,
        )
    }

    #[test]
    fn test_require_deliveries_covers_both_sides() {
        let store = store();
        let team = TeamFilter::Team("A".to_string());
        assert_eq!(store.require_deliveries(&team).unwrap().len(), 2);
        assert_eq!(store.require_deliveries(&TeamFilter::All).unwrap().len(), 3);
    }

    #[test]
    fn test_require_deliveries_reports_unknown_team() {
        let store = store();
        let err = store
            .require_deliveries(&TeamFilter::Team("Z".to_string()))
            .unwrap_err();
        assert!(err.is_no_data());
        assert_eq!(err.to_string(), "No data found for team: Z");
    }

    #[test]
    fn test_require_deliveries_outlives_filter() {
        let store = store();
        let selected = {
            let team = TeamFilter::Team("B".to_string());
            store.require_deliveries(&team).unwrap()
        };
        let strikers: Vec<&str> = selected.iter().map(|b| b.striker.as_str()).collect();
        assert_eq!(strikers, vec!["a1", "b2"]);
    }

    #[test]
    fn test_require_deliveries_without_team_param() {
        let err = store().require_deliveries(&TeamFilter::Unspecified).unwrap_err();
        assert_eq!(err.to_string(), "No data found for team: None");
    }

    #[test]
    fn test_require_deliveries_on_empty_store() {
        let store = DataStore::new(Vec::new(), Vec::new(), false);
        assert!(store.require_deliveries(&TeamFilter::All).is_err());
    }
}
