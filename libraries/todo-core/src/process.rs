/// Process-wide uptime and memory figures, read directly from the runtime
use serde::{Deserialize, Serialize};
use std::time::Instant;
use sysinfo::{Pid, System};

/// Memory snapshot in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MemoryUsage {
    /// Resident set size
    pub rss: u64,
    /// Total virtual memory
    pub virtual_size: u64,
}

impl MemoryUsage {
    /// Read the current process memory usage.
    ///
    /// Returns zeros when the process cannot be inspected.
    pub fn current() -> Self {
        match sysinfo::get_current_pid() {
            Ok(pid) => Self::of_pid(pid),
            Err(e) => {
                tracing::debug!("Failed to resolve current pid: {}", e);
                Self::default()
            }
        }
    }

    /// Memory usage of `pid`, or zeros if it is not running
    pub fn of_pid(pid: Pid) -> Self {
        let mut system = System::new();
        if !system.refresh_process(pid) {
            tracing::debug!("Process {} not found", pid);
            return Self::default();
        }

        system
            .process(pid)
            .map(|process| Self {
                rss: process.memory(),
                virtual_size: process.virtual_memory(),
            })
            .unwrap_or_default()
    }
}

/// Uptime and memory, sampled per request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStats {
    /// Seconds since startup
    pub uptime: f64,
    /// Memory snapshot
    pub memory_usage: MemoryUsage,
}

impl ProcessStats {
    /// Sample stats relative to `started_at`
    pub fn sample(started_at: Instant) -> Self {
        Self {
            uptime: started_at.elapsed().as_secs_f64(),
            memory_usage: MemoryUsage::current(),
        }
    }
}
