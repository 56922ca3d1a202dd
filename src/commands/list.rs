/// Listing utilities: every board, regardless of the selection.
use std::io::Write;

use super::info::DisplayReport;
use crate::cli::output::{write_all_static_heading, write_device_serials, write_section_error};
use crate::device::{InfoDisplay, Section};
use crate::registry::Registry;

/// Print the serial-sorted device table.
pub fn list_serials<W: Write>(registry: &Registry, out: &mut W) {
    write_device_serials(registry, out);
}

/// Print the static info of every board, headers on, verbose off.
///
/// A board that fails is reported and the listing continues.
pub fn list_static_infos<D, W>(driver: &mut D, registry: &Registry, out: &mut W) -> DisplayReport
where
    D: InfoDisplay + ?Sized,
    W: Write,
{
    write_all_static_heading(out);

    let mut report = DisplayReport::default();
    for entry in registry.entries() {
        report.attempted.push(Section::Static);
        if let Err(err) = driver.display_static_info(entry.index, false, false) {
            tracing::warn!(index = entry.index, code = err.code(), "static info failed");
            write_section_error(Section::Static, &err, out);
            report.failures.push((Section::Static, err));
        }
    }
    let _ = writeln!(out);
    report
}
