/// The information-display collaborator: enumeration plus per-section display calls.
use super::errors::DriverError;

/// One category of informational display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Clocking configuration and PLL lock status.
    Clock,
    /// Dynamic information that is cheap to read (alerts, `PCIe` link, state).
    Fast,
    /// Board information that does not change at run time.
    Static,
    /// On-board temperature sensors.
    Temperature,
}

impl Section {
    /// Short name used in status and error lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Fast => "fast",
            Self::Static => "static",
            Self::Temperature => "temp",
        }
    }
}

/// Access to the TDC boards and the driver's info display functions.
///
/// Every display call prints one info block for the device at `index`.
/// `verbose` adds the structure size and version, `json_only` suppresses the
/// human-readable header around the JSON body.
pub trait InfoDisplay {
    /// Number of boards reported by the driver. Zero or negative means the
    /// device layer is unusable.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the driver cannot be queried at all.
    fn device_count(&mut self) -> Result<i32, DriverError>;

    /// Serial number of the board at `index`, in `major.minor` form.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if `index` is not a known board.
    fn device_serial(&mut self, index: usize) -> Result<f32, DriverError>;

    /// Print the static info block.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the driver call fails.
    fn display_static_info(
        &mut self,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError>;

    /// Print the temperature info block.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the driver call fails.
    fn display_temperature_info(
        &mut self,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError>;

    /// Print the fast info block.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the driver call fails.
    fn display_fast_info(
        &mut self,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError>;

    /// Print the clock info block.
    ///
    /// # Errors
    ///
    /// Returns `DriverError` if the driver call fails.
    fn display_clock_info(
        &mut self,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError>;

    /// Release everything the driver holds. Called once, by [`super::Session`].
    fn teardown(&mut self);

    /// Route a [`Section`] to its display call.
    ///
    /// # Errors
    ///
    /// Returns whatever the routed display call returns.
    fn display(
        &mut self,
        section: Section,
        index: usize,
        verbose: bool,
        json_only: bool,
    ) -> Result<(), DriverError> {
        match section {
            Section::Clock => self.display_clock_info(index, verbose, json_only),
            Section::Fast => self.display_fast_info(index, verbose, json_only),
            Section::Static => self.display_static_info(index, verbose, json_only),
            Section::Temperature => self.display_temperature_info(index, verbose, json_only),
        }
    }
}
