//! Customer-to-server assignment.
//!
//! Both schedulers consume customers strictly in arrival order, one at a
//! time. The multi-server assignment for customer `i` depends on the server
//! free-times left by customers `0..i`, so the loop cannot be reordered.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Where and when one customer is served.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// 0-based server index.
    pub server_id: u32,
    /// Service start time.
    pub start_time: f64,
    /// Service end time, `start_time + service_time`.
    pub end_time: f64,
}

/// Assigns arriving customers to servers.
pub trait Scheduler {
    /// Assign the next customer in arrival order.
    fn assign(&mut self, arrival_time: f64, service_time: f64) -> Assignment;

    /// Number of servers managed.
    fn servers(&self) -> u32;
}

/// One FCFS server.
///
/// The first customer starts at its arrival; every later customer starts at
/// `max(arrival, previous end)`.
#[derive(Debug, Clone, Default)]
pub struct SingleServerScheduler {
    last_end: Option<f64>,
}

impl SingleServerScheduler {
    /// Create an idle server.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_end: None }
    }
}

impl Scheduler for SingleServerScheduler {
    fn assign(&mut self, arrival_time: f64, service_time: f64) -> Assignment {
        let start_time = self
            .last_end
            .map_or(arrival_time, |end| arrival_time.max(end));
        let end_time = start_time + service_time;
        self.last_end = Some(end_time);
        trace!(arrival_time, start_time, end_time, "single-server assignment");
        Assignment {
            server_id: 0,
            start_time,
            end_time,
        }
    }

    fn servers(&self) -> u32 {
        1
    }
}

/// Time at which each server next becomes free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerState {
    free_times: Vec<f64>,
}

impl ServerState {
    /// `servers` servers, all free at time zero.
    #[must_use]
    pub fn new(servers: u32) -> Self {
        Self {
            free_times: vec![0.0; servers as usize],
        }
    }

    /// Free-time of every server, by index.
    #[must_use]
    pub fn free_times(&self) -> &[f64] {
        &self.free_times
    }

    /// Lowest-index server free at or before `arrival_time`, otherwise the
    /// server that frees up first (lowest index on ties).
    ///
    /// Returns `None` only when there are no servers.
    #[must_use]
    pub fn select(&self, arrival_time: f64) -> Option<usize> {
        self.free_times
            .iter()
            .position(|&free| free <= arrival_time)
            .or_else(|| {
                self.free_times
                    .iter()
                    .enumerate()
                    .fold(None, |best: Option<(usize, f64)>, (i, &free)| match best {
                        Some((_, best_free)) if best_free <= free => best,
                        _ => Some((i, free)),
                    })
                    .map(|(i, _)| i)
            })
    }
}

/// `c` identical servers with earliest-available assignment.
#[derive(Debug, Clone)]
pub struct MultiServerScheduler {
    state: ServerState,
}

impl MultiServerScheduler {
    /// Create `servers` idle servers. Callers validate `servers >= 1`.
    #[must_use]
    pub fn new(servers: u32) -> Self {
        Self {
            state: ServerState::new(servers),
        }
    }

    /// Current server free-times.
    #[must_use]
    pub const fn state(&self) -> &ServerState {
        &self.state
    }
}

impl Scheduler for MultiServerScheduler {
    fn assign(&mut self, arrival_time: f64, service_time: f64) -> Assignment {
        let Some(server) = self.state.select(arrival_time) else {
            // No servers: serve immediately on a virtual server 0.
            return Assignment {
                server_id: 0,
                start_time: arrival_time,
                end_time: arrival_time + service_time,
            };
        };

        let start_time = arrival_time.max(self.state.free_times[server]);
        let end_time = start_time + service_time;
        self.state.free_times[server] = end_time;

        let server_id = server as u32;
        trace!(server_id, arrival_time, start_time, end_time, "multi-server assignment");
        Assignment {
            server_id,
            start_time,
            end_time,
        }
    }

    fn servers(&self) -> u32 {
        self.state.free_times.len() as u32
    }
}
