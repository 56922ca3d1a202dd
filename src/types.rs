/// Serializable info blocks printed by the display layer.
///
/// Field names follow the driver's C structures so the JSON output can be
/// compared against the vendor tools. `size` and `version` are only filled in
/// verbose mode.
use serde::{Deserialize, Serialize};

/// Board information that does not change during run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Board id as set by the manager.
    pub board_id: i32,
    /// Driver version, same encoding as the vendor `driver_revision` word.
    pub driver_revision: u32,
    pub driver_revision_str: String,
    pub driver_build_revision: u32,
    pub firmware_revision: u32,
    pub board_revision: u32,
    pub board_configuration: u32,
    pub subversion_revision: u32,
    /// Ids of the two TDC chips.
    pub chip_id: [u16; 2],
    /// Raw 8.24 serial word.
    pub board_serial: u32,
    /// Serial in `major.minor` form, e.g. `21.108`.
    pub board_serial_str: String,
    pub flash_valid: bool,
    pub calibration_date: String,
}

/// Temperatures of the TDC chips in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub tdc: [f32; 2],
}

/// Dynamic information that can be read within a few microseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Alert bit mask (temperature, power).
    pub alerts: u32,
    pub fpga_rpm: u32,
    pub pcie_pwr_mgmt: u32,
    pub pcie_link_width: u32,
    pub pcie_max_payload: u32,
    /// Device state name, e.g. `CREATED`.
    pub state: String,
}

/// Clocking configuration and lock status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    pub cdce_locked: bool,
    pub cdce_version: u32,
    pub use_ext_clock: bool,
    pub fpga_locked: bool,
}

/// A board serial number packed as 8.24: the upper byte is the major part,
/// the lower 24 bits the running number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSerial(pub u32);

impl BoardSerial {
    #[must_use]
    pub fn from_parts(major: u8, minor: u32) -> Self {
        Self((u32::from(major) << 24) | (minor & 0x00FF_FFFF))
    }

    #[must_use]
    pub fn major(self) -> u32 {
        self.0 >> 24
    }

    #[must_use]
    pub fn minor(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// The serial as the 32-bit float users type on the command line.
    ///
    /// Goes through the decimal text so that `21.108` typed by a user and
    /// `21.108` reported by the driver round to the same `f32`.
    #[must_use]
    pub fn as_f32(self) -> f32 {
        // "{u32}.{u32}" always parses
        self.to_string().parse().unwrap_or(f32::NAN)
    }
}

impl std::fmt::Display for BoardSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:03}", self.major(), self.minor())
    }
}
