//! Browser console logging
//!
//! On `wasm32` these forward to `web_sys::console`. Native builds (unit and
//! integration tests) compile the arguments but emit nothing, since the
//! imported JS functions do not exist outside the browser.

#[doc(hidden)]
pub fn __log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[doc(hidden)]
pub fn __warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// `console.log` with `format!` arguments
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::console::__log(&format!($($arg)*))
    };
}

/// `console.warn` with `format!` arguments
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::console::__warn(&format!($($arg)*))
    };
}
