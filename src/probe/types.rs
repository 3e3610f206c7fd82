use crate::error::ProbeError;

/// Outcome of one iteration, written once into slot `index`.
#[derive(Debug)]
pub struct ProbeResult {
    pub index: usize,
    /// Bytes received; empty when the fetch itself failed.
    pub raw_response: Vec<u8>,
    pub duration_ms: u64,
    pub status_code: Option<u16>,
    pub failure: Option<ProbeError>,
}

impl ProbeResult {
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Every slot of a finished run, in iteration order.
#[derive(Debug, Default)]
pub struct ProbeResultSet {
    slots: Vec<ProbeResult>,
    non_success_codes: Vec<u16>,
}

impl ProbeResultSet {
    #[must_use]
    pub const fn new(slots: Vec<ProbeResult>, non_success_codes: Vec<u16>) -> Self {
        Self {
            slots,
            non_success_codes,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProbeResult> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeResult> {
        self.slots.iter()
    }

    /// Durations in iteration order, not sorted.
    #[must_use]
    pub fn durations_ms(&self) -> Vec<u64> {
        self.slots.iter().map(|slot| slot.duration_ms).collect()
    }

    #[must_use]
    pub fn response_sizes(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.raw_response.len()).collect()
    }

    /// Parsed status codes outside `[200, 400)`, in the order tasks reported
    /// them. Runs are concurrent, so this order varies between runs.
    #[must_use]
    pub fn non_success_codes(&self) -> &[u16] {
        &self.non_success_codes
    }
}

/// A finished run plus the shared failure counter's final value.
#[derive(Debug, Default)]
pub struct ProbeRun {
    pub results: ProbeResultSet,
    pub failures: u64,
}
