/// Counter demo store

/// State store for the counter demo
#[derive(Debug, Default)]
pub struct CounterStore {
    count: i64,
}

impl CounterStore {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Current value doubled
    pub fn double_count(&self) -> i64 {
        self.count * 2
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn decrement(&mut self) {
        self.count -= 1;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn set_count(&mut self, value: i64) {
        self.count = value;
    }
}
