//! Debug macro for conditional logging.

/// Debug macro that prints in test builds or with the `debug-emit` feature,
/// otherwise is a no-op.
///
/// The `cfg` checks are evaluated in the crate that invokes the macro, so a
/// crate using it declares its own `debug-emit` feature.
///
/// # Examples
///
/// ```ignore
/// debug!("emit {} {:?}", mnemonic, operands);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(any(test, feature = "debug-emit"))]
        {
            extern crate std;
            std::eprintln!($($arg)*);
        }
        #[cfg(not(any(test, feature = "debug-emit")))]
        {
            // No-op in non-debug builds
            let _ = core::format_args!($($arg)*);
        }
    };
}
