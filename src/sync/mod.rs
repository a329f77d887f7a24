pub mod poller;
pub mod view;

pub use poller::{spawn_poller, PollerHandle};
pub use view::{PollView, ViewSnapshot};

use std::time::Duration;

/// Dashboard stats refresh cadence.
pub const STATS_POLL_PERIOD: Duration = Duration::from_secs(10);
/// Signal list refresh cadence.
pub const SIGNALS_POLL_PERIOD: Duration = Duration::from_secs(5);
/// Trade list refresh cadence.
pub const TRADES_POLL_PERIOD: Duration = Duration::from_secs(5);
