use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{DataStore, ALL_TEAMS};

/// Options the dashboard offers in its filter drop-downs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub seasons: Vec<String>,
    pub venues: Vec<String>,
    pub opponents: Vec<String>,
}

fn distinct_teams(store: &DataStore) -> BTreeSet<&str> {
    store.matches().iter().flat_map(|info| info.teams()).collect()
}

/// Every team named in the metadata, sorted, behind the "All Teams" entry
pub fn list_teams(store: &DataStore) -> Vec<String> {
    std::iter::once(ALL_TEAMS)
        .chain(distinct_teams(store))
        .map(str::to_string)
        .collect()
}

pub fn filter_options(store: &DataStore) -> FilterOptions {
    let seasons: BTreeSet<&str> = store
        .matches()
        .iter()
        .filter_map(|info| info.season.as_deref())
        .collect();
    let venues: BTreeSet<&str> = store
        .matches()
        .iter()
        .filter_map(|info| info.venue.as_deref())
        .collect();

    FilterOptions {
        seasons: seasons.into_iter().map(str::to_string).collect(),
        venues: venues.into_iter().map(str::to_string).collect(),
        opponents: distinct_teams(store)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
