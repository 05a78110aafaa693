//! Small crate-wide convenience macros.
//!
//! The console macros forward to `web_sys::console` in the browser.  On
//! native targets (unit tests) the arguments are still type-checked but
//! nothing is emitted, since calling an imported JS function outside wasm
//! aborts the test.

/// `console.log` with `format!` arguments.
///
/// ```rust,ignore
/// wheel_log!("landed on {} ({})", index, label);
/// ```
#[macro_export]
macro_rules! wheel_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($arg)*);
    }};
}

/// `console.warn` with `format!` arguments.
#[macro_export]
macro_rules! wheel_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($arg)*);
    }};
}

/// `console.error` with `format!` arguments.
#[macro_export]
macro_rules! wheel_error {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($arg)*);
    }};
}
