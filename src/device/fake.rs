/// Recording `InfoDisplay` used by unit tests across the crate.
use std::cell::Cell;
use std::rc::Rc;

use super::driver::{InfoDisplay, Section};
use super::errors::DriverError;

/// One recorded display call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub section: Section,
    pub index: usize,
    pub verbose: bool,
    pub json_only: bool,
}

pub struct FakeDisplay {
    pub count: i32,
    pub serials: Vec<f32>,
    pub calls: Vec<Call>,
    pub serial_queries: usize,
    unavailable: bool,
    failing: Vec<Section>,
    teardowns: Option<Rc<Cell<usize>>>,
}

impl FakeDisplay {
    pub fn with_serials(serials: &[f32]) -> Self {
        Self {
            count: i32::try_from(serials.len()).unwrap(),
            serials: serials.to_vec(),
            calls: Vec::new(),
            serial_queries: 0,
            unavailable: false,
            failing: Vec::new(),
            teardowns: None,
        }
    }

    pub fn with_count(count: i32) -> Self {
        Self {
            count,
            ..Self::with_serials(&[])
        }
    }

    /// A driver whose count query itself fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::with_serials(&[21.108])
        }
    }

    pub fn failing(mut self, sections: &[Section]) -> Self {
        self.failing = sections.to_vec();
        self
    }

    pub fn counting(mut self, teardowns: &Rc<Cell<usize>>) -> Self {
        self.teardowns = Some(Rc::clone(teardowns));
        self
    }

    pub fn sections_called(&self) -> Vec<Section> {
        self.calls.iter().map(|c| c.section).collect()
    }

    fn record(
        &mut self,
        section: Section,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError> {
        self.calls.push(Call {
            section,
            index,
            verbose,
            json_only,
        });
        if self.failing.contains(&section) {
            return Err(DriverError::Failure {
                code: 11,
                context: format!("{} readout", section.label()),
            });
        }
        Ok(())
    }
}

impl InfoDisplay for FakeDisplay {
    fn device_count(&mut self) -> Result<i32, DriverError> {
        if self.unavailable {
            return Err(DriverError::NotInitialized);
        }
        Ok(self.count)
    }

    fn device_serial(&mut self, index: usize) -> Result<f32, DriverError> {
        self.serial_queries += 1;
        self.serials
            .get(index)
            .copied()
            .ok_or(DriverError::DeviceNotFound { index })
    }

    fn display_static_info(&mut self, index: usize, verbose: bool, json_only: bool) -> Result<(), DriverError> {
        self.record(Section::Static, index, verbose, json_only)
    }

    fn display_temperature_info(&mut self, index: usize, verbose: bool, json_only: bool) -> Result<(), DriverError> {
        self.record(Section::Temperature, index, verbose, json_only)
    }

    fn display_fast_info(&mut self, index: usize, verbose: bool, json_only: bool) -> Result<(), DriverError> {
        self.record(Section::Fast, index, verbose, json_only)
    }

    fn display_clock_info(&mut self, index: usize, verbose: bool, json_only: bool) -> Result<(), DriverError> {
        self.record(Section::Clock, index, verbose, json_only)
    }

    fn teardown(&mut self) {
        if let Some(counter) = &self.teardowns {
            counter.set(counter.get() + 1);
        }
    }
}
