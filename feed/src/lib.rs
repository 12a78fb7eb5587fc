mod errors;
mod types;

pub use errors::FeedError;
pub use types::{samples_from_states, AircraftSample, AircraftState, FeedResponse};

use ureq::{Agent, AgentBuilder};

const USER_AGENT: &str = concat!("flight-map/", env!("CARGO_PKG_VERSION"));

/// Something that can be polled for the current aircraft states.
///
/// The refresher only talks to this trait, so tests can swap the network for
/// a canned sequence of answers.
pub trait AircraftProvider: Send {
    fn fetch(&mut self) -> Result<Vec<AircraftState>, FeedError>;
}

/// Polls a fixed HTTP endpoint that answers with a JSON state collection.
pub struct HttpFeed {
    agent: Agent,
    url: String,
}

impl HttpFeed {
    /// Creates a feed for `url`. No request is made until [`HttpFeed::fetch`].
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: AgentBuilder::new().user_agent(USER_AGENT).build(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AircraftProvider for HttpFeed {
    fn fetch(&mut self) -> Result<Vec<AircraftState>, FeedError> {
        let body = self.agent.get(&self.url).call()?.into_string()?;
        let response: FeedResponse = serde_json::from_str(&body)?;
        Ok(response.ac)
    }
}
