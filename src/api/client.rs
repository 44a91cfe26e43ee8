use std::time::Duration;

use ureq::Agent;

use crate::prelude::*;

/// Build a default agent.
pub fn new() -> Agent {
    Agent::config_builder().timeout_global(Some(Duration::from_secs(10))).build().into()
}

/// Fetch the page and return its body as text.
///
/// Non-success statuses are errors.
#[instrument(skip(agent))]
pub fn get_text(agent: &Agent, url: &str) -> Result<String> {
    agent
        .get(url)
        .call()
        .with_context(|| format!("failed to request `{url}`"))?
        .body_mut()
        .read_to_string()
        .with_context(|| format!("failed to read the response from `{url}`"))
}
