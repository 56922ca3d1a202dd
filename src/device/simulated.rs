/// Simulated xHPTDC8 boards.
///
/// Stands in for the vendor driver when no hardware library is linked: every
/// board reports the fixed readings of the vendor's dummy library, and serial
/// numbers count down from `21.108` so that enumeration order and serial
/// order differ when more than one board is configured.
use std::io::Write;

use serde::Serialize;

use super::driver::InfoDisplay;
use super::errors::{DriverError, RawDriverCode, check_driver_code, codes};
use crate::types::{BoardSerial, ClockInfo, FastInfo, StaticInfo, TemperatureInfo};

const DRIVER_REVISION: u32 = 0x0012_0000;
const DRIVER_REVISION_STR: &str = "0.18.0.0";
const DRIVER_BUILD_REVISION: u32 = 0;

const STATIC_INFO_VERSION: u32 = 2;
const TEMPERATURE_INFO_VERSION: u32 = 1;
const FAST_INFO_VERSION: u32 = 1;
const CLOCK_INFO_VERSION: u32 = 1;

const SERIAL_MAJOR: u8 = 21;
const SERIAL_FIRST_MINOR: u32 = 108;
const FIRST_BOARD_ID: i32 = 10;
const CHIP_ID: u16 = 32784;
const TDC_TEMPERATURE_C: f32 = 46.3;

const RULE: &str =
    "-----------------------------------------------------------------------------";

/// `InfoDisplay` over `count` simulated boards, printing to `out`.
pub struct SimulatedBackend<W: Write> {
    count: i32,
    out: W,
    initialized: bool,
}

impl<W: Write> SimulatedBackend<W> {
    /// `count` is reported verbatim by `device_count`, so zero or negative
    /// values simulate a machine without usable boards.
    #[must_use]
    pub fn new(count: i32, out: W) -> Self {
        tracing::debug!(count, "simulated driver initialized");
        Self {
            count,
            out,
            initialized: true,
        }
    }

    /// Hand back the output sink.
    #[cfg(test)]
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    fn boards(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }

    /// Status of a per-device call, as the driver would return it.
    fn device_status(&self, index: usize) -> RawDriverCode {
        if !self.initialized {
            codes::NOT_INITIALIZED
        } else if index >= self.boards() {
            codes::INVALID_ARGUMENTS
        } else {
            codes::OK
        }
    }

    fn board_serial(&self, index: usize) -> BoardSerial {
        let from_last = self.boards().saturating_sub(index + 1);
        let minor = SERIAL_FIRST_MINOR + u32::try_from(from_last).unwrap_or(0);
        BoardSerial::from_parts(SERIAL_MAJOR, minor)
    }

    fn static_info(&self, index: usize, verbose: bool) -> StaticInfo {
        let serial = self.board_serial(index);
        StaticInfo {
            size: verbose.then(size_of_u32::<StaticInfo>),
            version: verbose.then_some(STATIC_INFO_VERSION),
            board_id: FIRST_BOARD_ID + i32::try_from(index).unwrap_or(0),
            driver_revision: DRIVER_REVISION,
            driver_revision_str: DRIVER_REVISION_STR.to_owned(),
            driver_build_revision: DRIVER_BUILD_REVISION,
            firmware_revision: 0,
            board_revision: 0,
            board_configuration: 0,
            subversion_revision: 0,
            chip_id: [CHIP_ID, CHIP_ID],
            board_serial: serial.0,
            board_serial_str: serial.to_string(),
            flash_valid: false,
            calibration_date: "2020-01-01 00:00".to_owned(),
        }
    }

    fn write_block<T: Serialize>(
        &mut self,
        title: &str,
        index: usize,
        value: &T,
        json_only: bool,
    ) -> Result<(), DriverError> {
        if !json_only {
            writeln!(self.out, "{RULE}")?;
            writeln!(
                self.out,
                "{title} of TDC {index} (serial {})",
                self.board_serial(index)
            )?;
            writeln!(self.out, "{RULE}")?;
        }
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

fn size_of_u32<T>() -> u32 {
    u32::try_from(std::mem::size_of::<T>()).unwrap_or(u32::MAX)
}

impl<W: Write> InfoDisplay for SimulatedBackend<W> {
    fn device_count(&mut self) -> Result<i32, DriverError> {
        check_driver_code(
            if self.initialized { codes::OK } else { codes::NOT_INITIALIZED },
            "xhptdc8_count_devices",
        )?;
        Ok(self.count)
    }

    fn device_serial(&mut self, index: usize) -> Result<f32, DriverError> {
        if index >= self.boards() {
            return Err(DriverError::DeviceNotFound { index });
        }
        check_driver_code(self.device_status(index), "xhptdc8_get_static_info")?;
        Ok(self.board_serial(index).as_f32())
    }

    fn display_static_info(
        &mut self,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError> {
        check_driver_code(self.device_status(index), "xhptdc8_get_static_info")?;
        let info = self.static_info(index, verbose);
        self.write_block("Static Information", index, &info, json_only)
    }

    fn display_temperature_info(
        &mut self,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError> {
        check_driver_code(self.device_status(index), "xhptdc8_get_temperature_info")?;
        let info = TemperatureInfo {
            size: verbose.then(size_of_u32::<TemperatureInfo>),
            version: verbose.then_some(TEMPERATURE_INFO_VERSION),
            tdc: [TDC_TEMPERATURE_C, TDC_TEMPERATURE_C],
        };
        self.write_block("Temperature Information", index, &info, json_only)
    }

    fn display_fast_info(
        &mut self,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError> {
        check_driver_code(self.device_status(index), "xhptdc8_get_fast_info")?;
        let info = FastInfo {
            size: verbose.then(size_of_u32::<FastInfo>),
            version: verbose.then_some(FAST_INFO_VERSION),
            alerts: 0,
            fpga_rpm: 0,
            pcie_pwr_mgmt: 0,
            pcie_link_width: 1,
            pcie_max_payload: 0,
            state: "CREATED".to_owned(),
        };
        self.write_block("Fast Information", index, &info, json_only)
    }

    fn display_clock_info(
        &mut self,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError> {
        check_driver_code(self.device_status(index), "xhptdc8_get_clock_info")?;
        let info = ClockInfo {
            size: verbose.then(size_of_u32::<ClockInfo>),
            version: verbose.then_some(CLOCK_INFO_VERSION),
            cdce_locked: false,
            cdce_version: 0,
            use_ext_clock: false,
            fpga_locked: false,
        };
        self.write_block("Clock Information", index, &info, json_only)
    }

    fn teardown(&mut self) {
        self.initialized = false;
        let _ = self.out.flush();
    }
}
