/// Display dispatcher: show the requested info sections of the selected board.
use std::io::Write;

use crate::cli::output::write_section_error;
use crate::device::{DriverError, InfoDisplay, Section};
use crate::registry::Selection;

/// Which sections to show and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InfoRequest {
    pub static_info: bool,
    pub temp: bool,
    pub temperature: bool,
    pub fast: bool,
    pub clock: bool,
    /// Turns on every section flag.
    pub all: bool,
    /// Include structure size and version.
    pub verbose: bool,
    /// Bare JSON, no headers.
    pub json_only: bool,
}

impl InfoRequest {
    /// The request with `all` applied to the five section flags.
    #[must_use]
    pub fn expanded(self) -> Self {
        if !self.all {
            return self;
        }
        Self {
            static_info: true,
            temp: true,
            temperature: true,
            fast: true,
            clock: true,
            ..self
        }
    }

    /// Sections to display, in display order. `-temp` and `-temperature`
    /// name the same section; with no section flag set, static info is shown.
    #[must_use]
    pub fn sections(self) -> Vec<Section> {
        let request = self.expanded();
        let mut sections = Vec::with_capacity(4);
        if request.clock {
            sections.push(Section::Clock);
        }
        if request.fast {
            sections.push(Section::Fast);
        }
        if request.static_info {
            sections.push(Section::Static);
        }
        if request.temp || request.temperature {
            sections.push(Section::Temperature);
        }
        if sections.is_empty() {
            sections.push(Section::Static);
        }
        sections
    }
}

/// What a dispatch attempted and what failed.
#[derive(Debug, Default)]
pub struct DisplayReport {
    pub attempted: Vec<Section>,
    pub failures: Vec<(Section, DriverError)>,
}

impl DisplayReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merge(&mut self, other: DisplayReport) {
        self.attempted.extend(other.attempted);
        self.failures.extend(other.failures);
    }
}

/// Show every requested section of the selected board.
///
/// A failing section is reported on `out` and the remaining sections still
/// run. With no board selected nothing is printed and the driver is not
/// called.
pub fn display_info<D, W>(
    driver: &mut D,
    selection: Selection,
    request: InfoRequest,
    out: &mut W,
) -> DisplayReport
where
    D: InfoDisplay + ?Sized,
    W: Write,
{
    let mut report = DisplayReport::default();
    let Selection::Device(index) = selection else {
        return report;
    };

    for section in request.sections() {
        report.attempted.push(section);
        if let Err(err) = driver.display(section, index, request.verbose, request.json_only) {
            tracing::warn!(section = section.label(), index, code = err.code(), "section display failed");
            write_section_error(section, &err, out);
            report.failures.push((section, err));
        }
    }
    report
}
