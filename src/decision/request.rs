use crate::error::DecisionError;

/// Inputs for one scaling decision. Construction enforces at least one server with at least one
/// task of capacity and a finite timestamp.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DecisionRequest {
    load: u64,
    servers: u32,
    capacity: u32,
    timestamp: f64,
}

impl DecisionRequest {
    pub fn new(load: u64, servers: u32, capacity: u32, timestamp: f64) -> Result<Self, DecisionError> {
        if servers < 1 {
            return Err(DecisionError::InvalidConfiguration(format!(
                "server count must be at least 1 but was {}",
                servers
            )));
        }

        if capacity < 1 {
            return Err(DecisionError::InvalidConfiguration(format!(
                "server capacity must be at least 1 but was {}",
                capacity
            )));
        }

        if !timestamp.is_finite() {
            return Err(DecisionError::InvalidConfiguration(format!(
                "timestamp must be finite but was {}",
                timestamp
            )));
        }

        Ok(Self { load, servers, capacity, timestamp })
    }

    #[inline]
    pub const fn load(&self) -> u64 {
        self.load
    }

    #[inline]
    pub const fn servers(&self) -> u32 {
        self.servers
    }

    #[inline]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub const fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// Tasks the active servers can hold: `servers * capacity`.
    #[inline]
    pub fn total_capacity(&self) -> u64 {
        u64::from(self.servers) * u64::from(self.capacity)
    }

    /// Tasks the cluster could hold with one server fewer: `(servers - 1) * capacity`.
    #[inline]
    pub fn reduced_capacity(&self) -> u64 {
        u64::from(self.servers - 1) * u64::from(self.capacity)
    }
}
