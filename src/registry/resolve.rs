/// Selector resolution: turn the `-tdc` value into a board index.
///
/// Resolution rules:
///
/// 1. **Empty**: no board selected. Not an error.
/// 2. **Contains `.`**: a serial number. Matched against the registry by exact
///    `f32` equality, so `21.108` only finds a board whose reported serial
///    rounds to the same 32-bit float. Typing more digits than an `f32`
///    carries still matches; a typo in the last digit does not.
/// 3. **Otherwise**: a board index, `0 <= index < count`.
use super::devices::Registry;
use super::errors::TdcError;

/// Outcome of resolving the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No `-tdc` value was given.
    None,
    /// Index of the selected board in enumeration order.
    Device(usize),
}

/// Resolve a user-provided selector against the registry.
///
/// # Errors
///
/// - `TdcError::InvalidSelector` — the selector is not a number, or overflows `f32`
/// - `TdcError::SerialNotFound` — no board has that serial
/// - `TdcError::IndexOutOfBounds` — the index is negative or `>= count`
pub fn resolve(registry: &Registry, selector: &str) -> Result<Selection, TdcError> {
    if selector.is_empty() {
        return Ok(Selection::None);
    }

    let value: f32 = selector
        .parse()
        .map_err(|e: std::num::ParseFloatError| TdcError::InvalidSelector {
            token: selector.to_owned(),
            reason: e.to_string(),
        })?;
    if value.is_infinite() && !is_infinity_literal(selector) {
        return Err(TdcError::InvalidSelector {
            token: selector.to_owned(),
            reason: "value out of range".to_owned(),
        });
    }

    let selection = if selector.contains('.') {
        resolve_serial(registry, selector, value)?
    } else {
        resolve_index(registry, selector, value)?
    };
    tracing::debug!(selector, ?selection, "resolved device selector");
    Ok(selection)
}

/// `inf`, `infinity` and signed forms parse to infinity on purpose; anything
/// else that does has overflowed `f32`.
fn is_infinity_literal(selector: &str) -> bool {
    let unsigned = selector.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn resolve_serial(registry: &Registry, selector: &str, serial: f32) -> Result<Selection, TdcError> {
    registry
        .find_serial(serial)
        .map(Selection::Device)
        .ok_or_else(|| TdcError::SerialNotFound {
            token: selector.to_owned(),
        })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn resolve_index(registry: &Registry, selector: &str, value: f32) -> Result<Selection, TdcError> {
    let index = value.trunc();
    if !index.is_finite() || index < 0.0 || index >= registry.count() as f32 {
        return Err(TdcError::IndexOutOfBounds {
            token: selector.to_owned(),
        });
    }
    Ok(Selection::Device(index as usize))
}
