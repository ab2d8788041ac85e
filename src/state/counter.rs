#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use storage::{CounterValue, KeyValueStore, StorageError, StorageGateway, keys};

/// Counter widget state. Every mutation is persisted immediately.
///
/// The in-memory count moves even when the write fails, so the widget keeps
/// responding while storage is unavailable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    pub fn load<S: KeyValueStore>(gateway: &StorageGateway<S>) -> Self {
        let CounterValue(count) = gateway.load_or_default(keys::COUNT);
        Self { count }
    }

    pub fn increment<S: KeyValueStore>(&mut self, gateway: &StorageGateway<S>) -> Result<(), StorageError> {
        self.count = self.count.saturating_add(1);
        self.persist(gateway)
    }

    pub fn decrement<S: KeyValueStore>(&mut self, gateway: &StorageGateway<S>) -> Result<(), StorageError> {
        self.count = self.count.saturating_sub(1);
        self.persist(gateway)
    }

    pub fn reset<S: KeyValueStore>(&mut self, gateway: &StorageGateway<S>) -> Result<(), StorageError> {
        self.count = 0;
        self.persist(gateway)
    }

    /// Height of the background fill, in percent.
    pub fn fill_percent(&self) -> u8 {
        // Clamped to 0..=100, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = self.count.clamp(0, 100) as u8;
        percent
    }

    fn persist<S: KeyValueStore>(&self, gateway: &StorageGateway<S>) -> Result<(), StorageError> {
        gateway.save(keys::COUNT, &CounterValue(self.count))
    }
}
