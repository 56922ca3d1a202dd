/// The device registry: boards known to the driver, by index and by serial.
use super::errors::TdcError;
use crate::device::InfoDisplay;

/// One known board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceEntry {
    /// Position in driver enumeration order.
    pub index: usize,
    /// Serial number in `major.minor` form.
    pub serial: f32,
}

/// Boards found at startup. Never changes after [`Registry::init`].
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<DeviceEntry>,
    sorted: Vec<DeviceEntry>,
}

impl Registry {
    /// Query the driver for every board and its serial.
    ///
    /// # Errors
    ///
    /// - `TdcError::DeviceLayer` — the driver could not be queried
    /// - `TdcError::NoDevices` — the driver reported zero or fewer boards
    pub fn init<D: InfoDisplay + ?Sized>(driver: &mut D) -> Result<Self, TdcError> {
        let count = driver.device_count()?;
        tracing::debug!(count, "driver reported device count");
        if count <= 0 {
            return Err(TdcError::NoDevices { count });
        }

        let count = usize::try_from(count).unwrap_or_default();
        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let serial = driver.device_serial(index)?;
            tracing::debug!(index, serial, "registered device");
            entries.push(DeviceEntry { index, serial });
        }
        Ok(Self::from_entries(entries))
    }

    /// Build from entries already in enumeration order.
    #[must_use]
    pub fn from_entries(entries: Vec<DeviceEntry>) -> Self {
        let mut sorted = entries.clone();
        // stable: equal serials keep enumeration order
        sorted.sort_by(|a, b| a.serial.total_cmp(&b.serial));
        Self { entries, sorted }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in enumeration order.
    #[must_use]
    pub fn entries(&self) -> &[DeviceEntry] {
        &self.entries
    }

    /// Entries in ascending serial order.
    #[must_use]
    pub fn sorted(&self) -> &[DeviceEntry] {
        &self.sorted
    }

    #[must_use]
    pub fn serial_of(&self, index: usize) -> Option<f32> {
        self.entries.get(index).map(|e| e.serial)
    }

    /// Index of the board whose serial equals `serial` exactly. If several
    /// boards share it, the last one in enumeration order wins.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn find_serial(&self, serial: f32) -> Option<usize> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.serial == serial)
            .map(|e| e.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DriverError;
    use crate::device::fake::FakeDisplay;

    #[test]
    fn test_non_positive_count_fails_without_serial_queries() {
        for count in [0, -1, -17, i32::MIN] {
            let mut fake = FakeDisplay::with_count(count);
            let result = Registry::init(&mut fake);
            assert!(matches!(result, Err(TdcError::NoDevices { count: c }) if c == count));
            assert_eq!(fake.serial_queries, 0);
        }
    }

    #[test]
    fn test_serial_query_failure_is_init_failure() {
        let mut fake = FakeDisplay::with_count(2);
        let result = Registry::init(&mut fake);
        assert!(matches!(
            result,
            Err(TdcError::DeviceLayer(DriverError::DeviceNotFound { index: 0 }))
        ));
    }

    #[test]
    fn test_entries_keep_enumeration_order() {
        let mut fake = FakeDisplay::with_serials(&[22.5, 21.108, 21.9]);
        let registry = Registry::init(&mut fake).unwrap();
        assert_eq!(registry.count(), 3);
        let indices: Vec<usize> = registry.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_sorted_ascending_by_serial() {
        let mut fake = FakeDisplay::with_serials(&[22.5, 21.108, 21.9]);
        let registry = Registry::init(&mut fake).unwrap();
        let indices: Vec<usize> = registry.sorted().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_serials() {
        let registry = Registry::from_entries(vec![
            DeviceEntry { index: 0, serial: 5.0 },
            DeviceEntry { index: 1, serial: 1.0 },
            DeviceEntry { index: 2, serial: 5.0 },
            DeviceEntry { index: 3, serial: 1.0 },
        ]);
        let indices: Vec<usize> = registry.sorted().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_sorted_lookup_matches_direct_lookup() {
        let serials = [30.001, 21.108, 25.5, 21.2, 29.75];
        let mut fake = FakeDisplay::with_serials(&serials);
        let registry = Registry::init(&mut fake).unwrap();
        for i in 0..registry.count() {
            let sorted_entry = registry.sorted().iter().find(|e| e.index == i).unwrap();
            assert_eq!(Some(sorted_entry.serial), registry.serial_of(i));
            assert_eq!(sorted_entry.serial, serials[i]);
        }
    }

    #[test]
    fn test_find_serial_last_match_wins() {
        let registry = Registry::from_entries(vec![
            DeviceEntry { index: 0, serial: 21.108 },
            DeviceEntry { index: 1, serial: 21.108 },
        ]);
        assert_eq!(registry.find_serial(21.108), Some(1));
        assert_eq!(registry.find_serial(21.109), None);
    }
}
