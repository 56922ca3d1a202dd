/// Run flow: build the registry, resolve the selection, list and display.
pub mod info;
pub mod list;

use std::io::Write;

use crate::cli::Cli;
use crate::cli::output::{write_error, write_no_selection};
use crate::device::InfoDisplay;
use crate::registry::{Registry, Selection, TdcError, resolve};
use info::{DisplayReport, display_info};
use list::{list_serials, list_static_infos};

/// Run one invocation against `driver` and return the process exit code.
///
/// - 0: everything requested was shown
/// - 1: at least one section failed to display
/// - 2: no usable boards
/// - 4: the `-tdc` value did not resolve
///
/// Teardown of the driver is left to the caller's [`crate::device::Session`].
pub fn run<D, W>(cli: &Cli, driver: &mut D, out: &mut W) -> i32
where
    D: InfoDisplay + ?Sized,
    W: Write,
{
    match execute(cli, driver, out) {
        Ok(report) => {
            tracing::debug!(
                attempted = report.attempted.len(),
                failed = report.failures.len(),
                "run finished"
            );
            i32::from(!report.is_ok())
        }
        Err(err) => {
            tracing::debug!(error = %err, "run aborted");
            write_error(&err, out);
            err.exit_code()
        }
    }
}

fn execute<D, W>(cli: &Cli, driver: &mut D, out: &mut W) -> Result<DisplayReport, TdcError>
where
    D: InfoDisplay + ?Sized,
    W: Write,
{
    let registry = Registry::init(driver)?;
    let selection = resolve(&registry, cli.selector())?;
    if let Selection::Device(index) = selection {
        tracing::debug!(index, serial = ?registry.serial_of(index), "device selected");
    }

    let mut report = DisplayReport::default();
    let show_serials = (selection == Selection::None || cli.list) && !cli.json_only;
    if selection == Selection::None {
        write_no_selection(out);
    }
    if show_serials {
        list_serials(&registry, out);
    }
    if cli.list {
        report.merge(list_static_infos(driver, &registry, out));
    }

    report.merge(display_info(driver, selection, cli.info_request(), out));
    Ok(report)
}
