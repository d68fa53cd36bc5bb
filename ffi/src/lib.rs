//! C boundary for the decision model. The contract has no handle parameter,
//! so every export operates on one process-wide model that lives for the
//! lifetime of the process; an exclusive lock serializes access to it.

use std::ffi::{c_char, c_double, c_int, CStr};
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use saw_model::{DecisionModel, Kind, Weight};

static MODEL: Lazy<Mutex<DecisionModel>> = Lazy::new(Default::default);

fn lock() -> MutexGuard<'static, DecisionModel> {
    // The registries are plain data; a panic elsewhere cannot leave them in a
    // torn state, so recover from poisoning instead of propagating it.
    MODEL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register a criterion. Any `kind` other than `"benefit"` is treated as a
/// cost criterion; a NaN or negative `weight` rejects the registration.
///
/// # Safety
/// `name` and `kind` must be valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn add_criterion(name: *const c_char, weight: c_double, kind: *const c_char) {
    if name.is_null() || kind.is_null() {
        tracing::error!("add_criterion called with a null pointer");
        return;
    }
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();
    let kind = Kind::parse_lossy(&CStr::from_ptr(kind).to_string_lossy());
    let Some(weight) = Weight::new(weight) else {
        tracing::error!(%name, weight, "rejecting criterion with invalid weight");
        return;
    };
    lock().add_criterion(name, weight, kind);
}

/// Register an alternative with `len` raw values, one per criterion. The
/// values are copied; a count mismatch rejects the registration.
///
/// # Safety
/// `name` must be a valid NUL-terminated string and `values` must point to
/// `len` readable doubles.
#[no_mangle]
pub unsafe extern "C" fn add_alternative(name: *const c_char, values: *const c_double, len: c_int) {
    if name.is_null() || values.is_null() || len < 0 {
        tracing::error!("add_alternative called with a null pointer or negative length");
        return;
    }
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();
    let values = std::slice::from_raw_parts(values, len as usize).to_vec();
    if let Err(err) = lock().add_alternative(name, values) {
        tracing::error!(%err, "rejecting alternative");
    }
}

/// Returns the 0-based index of the best alternative in registration order,
/// or -1 when no alternatives are registered.
#[no_mangle]
pub extern "C" fn calculate_best_alternative() -> c_int {
    match lock().calculate_best_alternative() {
        Ok(Some(index)) => index as c_int,
        Ok(None) => -1,
        Err(err) => {
            tracing::error!(%err, "scoring failed");
            -1
        }
    }
}

#[cfg(test)]
mod test {
    use std::ffi::CString;

    // A single test drives the whole surface: the exports share the
    // process-wide model, so separate tests would race on its state.
    #[test]
    fn round_trip_through_the_c_surface() {
        let price = CString::new("price").unwrap();
        let quality = CString::new("quality").unwrap();
        let cost = CString::new("cost").unwrap();
        let benefit = CString::new("benefit").unwrap();
        let a = CString::new("a").unwrap();
        let b = CString::new("b").unwrap();

        assert_eq!(super::calculate_best_alternative(), -1);

        unsafe {
            super::add_criterion(price.as_ptr(), 5.0, cost.as_ptr());
            super::add_criterion(quality.as_ptr(), 4.0, benefit.as_ptr());

            // Rejected: one value for two criteria, nothing stored.
            super::add_alternative(a.as_ptr(), [4.0].as_ptr(), 1);
            assert_eq!(super::calculate_best_alternative(), -1);

            super::add_alternative(a.as_ptr(), [4.0, 2.0].as_ptr(), 2);
            super::add_alternative(b.as_ptr(), [2.0, 4.0].as_ptr(), 2);
        }

        assert_eq!(super::calculate_best_alternative(), 1);
        // Stable across repeated calls with no intervening registration.
        assert_eq!(super::calculate_best_alternative(), 1);
    }
}
