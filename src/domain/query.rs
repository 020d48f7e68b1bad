use super::event::SportType;
use super::state::SportEventStatus;

/// The store query shape chosen for a set of optional list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventQuery {
    ByTypeAndStatus(SportType, SportEventStatus),
    ByType(SportType),
    ByStatus(SportEventStatus),
    All,
}

type Candidate = fn(Option<SportType>, Option<SportEventStatus>) -> Option<EventQuery>;

impl EventQuery {
    /// Pick the most specific query shape the supplied filters allow.
    pub fn resolve(sport_type: Option<SportType>, status: Option<SportEventStatus>) -> Self {
        // Most to least specific; the first candidate whose inputs are all present wins.
        let precedence: [Candidate; 4] = [
            |sport_type, status| Some(EventQuery::ByTypeAndStatus(sport_type?, status?)),
            |sport_type, _| sport_type.map(EventQuery::ByType),
            |_, status| status.map(EventQuery::ByStatus),
            |_, _| Some(EventQuery::All),
        ];

        precedence
            .iter()
            .find_map(|candidate| candidate(sport_type, status))
            .unwrap_or(EventQuery::All)
    }

    pub fn sport_type(&self) -> Option<SportType> {
        match self {
            EventQuery::ByTypeAndStatus(t, _) | EventQuery::ByType(t) => Some(*t),
            EventQuery::ByStatus(_) | EventQuery::All => None,
        }
    }

    pub fn status(&self) -> Option<SportEventStatus> {
        match self {
            EventQuery::ByTypeAndStatus(_, s) | EventQuery::ByStatus(s) => Some(*s),
            EventQuery::ByType(_) | EventQuery::All => None,
        }
    }
}
