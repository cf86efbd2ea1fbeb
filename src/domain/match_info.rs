use serde::{Deserialize, Serialize};

/// One row of the per-match metadata table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    /// Match identifier, joined against `Delivery::match_id`
    pub id: String,
    pub season: Option<String>,
    pub venue: Option<String>,
    pub team1: Option<String>,
    pub team2: Option<String>,
}

impl MatchInfo {
    /// Participants that are present in this row
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.team1
            .as_deref()
            .into_iter()
            .chain(self.team2.as_deref())
    }
}
