/// Output formatting: banners, the device table, status and error lines.
///
/// Everything goes to the writer handed in (stdout in the binary), errors
/// included. Write failures are ignored; there is nowhere left to report them.
use std::io::Write;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_BORDERS_ONLY};

use crate::device::{DriverError, Section};
use crate::registry::{Registry, TdcError};

const RULE: &str =
    "-----------------------------------------------------------------------------";

// --- Banners ---

/// Write the application banner.
pub fn write_about<W: Write>(out: &mut W) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "               xHPTDC8 Information Utility Application");
    let _ = writeln!(out, "{RULE}");
}

/// Write the closing banner.
pub fn write_footer<W: Write>(out: &mut W) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "                          End of Application");
    let _ = writeln!(out, "{RULE}");
}

// --- Device list ---

/// Write the serial-sorted registry as a numbered table (numbering from 1).
pub fn write_device_serials<W: Write>(registry: &Registry, out: &mut W) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["#", "INDEX", "SERIAL"]);
    for (n, entry) in registry.sorted().iter().enumerate() {
        table.add_row([
            Cell::new(n + 1).set_alignment(CellAlignment::Right),
            Cell::new(entry.index).set_alignment(CellAlignment::Right),
            Cell::new(format_serial(entry.serial)),
        ]);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Installed Devices Serials for {} TDC(s):",
        registry.count()
    );
    let _ = writeln!(out, "{table}");
    let _ = writeln!(out);
}

/// Serial in `major.minor` form with three decimals, as printed on the board.
#[must_use]
pub fn format_serial(serial: f32) -> String {
    format!("{serial:.3}")
}

/// Write the heading printed before the static info of every board.
pub fn write_all_static_heading<W: Write>(out: &mut W) {
    let _ = writeln!(out);
    let _ = writeln!(out, "Static Information of all TDC(s):");
}

// --- Status and errors ---

/// Write the note shown when `-tdc` was not given.
pub fn write_no_selection<W: Write>(out: &mut W) {
    let _ = writeln!(out, "Info: No device selected.");
}

/// Write a run-ending error.
pub fn write_error<W: Write>(err: &TdcError, out: &mut W) {
    let _ = writeln!(out, "Error: {err}");
}

/// Write a failed section display. Processing continues after this.
pub fn write_section_error<W: Write>(section: Section, err: &DriverError, out: &mut W) {
    let _ = writeln!(
        out,
        "Error displaying {} info: {} {err}",
        section.label(),
        err.code()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::devices::DeviceEntry;

    fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_device_serials_sorted_and_numbered() {
        let registry = Registry::from_entries(vec![
            DeviceEntry { index: 0, serial: 22.004 },
            DeviceEntry { index: 1, serial: 21.108 },
        ]);
        let text = render(|out| write_device_serials(&registry, out));
        assert!(text.contains("Installed Devices Serials for 2 TDC(s):"));
        let first = text.find("21.108").unwrap();
        let second = text.find("22.004").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_section_error_line() {
        let err = DriverError::InvalidArguments {
            context: "xhptdc8_get_clock_info".to_owned(),
        };
        let text = render(|out| write_section_error(Section::Clock, &err, out));
        assert_eq!(
            text,
            "Error displaying clock info: 17 invalid arguments: xhptdc8_get_clock_info\n"
        );
    }

    #[test]
    fn test_error_line() {
        let err = TdcError::SerialNotFound {
            token: "21.109".to_owned(),
        };
        let text = render(|out| write_error(&err, out));
        assert_eq!(text, "Error: Serial number entered <21.109> is not found.\n");
    }
}
