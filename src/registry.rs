//! Opt-in process-wide installation of the client.
//!
//! Explicit construction ([`Gemini::new`] / [`Gemini::from_config`]) is the
//! primary way to wire the facade into an application. Hosts that want
//! container-style resolution can install the client once and resolve it
//! anywhere in the process instead.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::client::GeminiClient;
use crate::config::GeminiConfig;
use crate::facade::Gemini;

static CLIENT: OnceCell<Arc<GeminiClient>> = OnceCell::new();

/// Install the process-wide client and return a facade over it.
///
/// The first call builds the client from `config` and the selected
/// `transport`; later calls ignore their arguments and return a facade over
/// the originally installed instance. The installation lasts for the
/// lifetime of the process.
pub fn install(config: GeminiConfig, transport: Option<reqwest::Client>) -> Gemini {
    let client = CLIENT.get_or_init(|| Arc::new(GeminiClient::from_config(config, transport)));

    Gemini::new(Arc::clone(client))
}

/// The installed client, if [`install`] has run.
pub fn client() -> Option<Arc<GeminiClient>> {
    CLIENT.get().map(Arc::clone)
}

/// A facade over the installed client, if [`install`] has run.
pub fn gemini() -> Option<Gemini> {
    client().map(Gemini::new)
}
