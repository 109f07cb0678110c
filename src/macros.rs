//! Logging macros for ergonomic message formatting and tag literals.
//!
//! # Examples
//!
//! ```
//! use telemetry_core::prelude::*;
//! use telemetry_core::{info, tags};
//!
//! let telemetry = Telemetry::with_config(Config::default());
//!
//! // Basic logging
//! info!(telemetry, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(telemetry, "Server listening on port {}", port);
//!
//! // With tags
//! info!(telemetry, tags = tags! { "user" => "john" }, "User {} logged in", 42);
//! ```

/// Build an `Option<Tags>` from `key => value` pairs.
///
/// Keys and values may be anything implementing `Display`.
///
/// ```
/// use telemetry_core::tags;
///
/// let tags = tags! { "user" => "john", "attempt" => 3 }.unwrap();
/// assert_eq!(tags["attempt"], "3");
/// ```
#[macro_export]
macro_rules! tags {
    () => {
        ::std::option::Option::Some($crate::Tags::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut tags = $crate::Tags::new();
        $(
            tags.insert(
                ::std::string::ToString::to_string(&$key),
                ::std::string::ToString::to_string(&$value),
            );
        )+
        ::std::option::Option::Some(tags)
    }};
}

/// Log a message with automatic formatting.
///
/// Works with anything implementing [`Log`](crate::Log), including the
/// [`Telemetry`](crate::Telemetry) facade.
///
/// ```
/// # use telemetry_core::prelude::*;
/// # let logger = Logger::default();
/// use telemetry_core::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, tags = $tags:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Log as _;
        $logger.log($level, &format!($($arg)+), $tags)
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Log as _;
        $logger.log($level, &format!($($arg)+), ::std::option::Option::None)
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use telemetry_core::prelude::*;
/// # let logger = Logger::default();
/// use telemetry_core::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use telemetry_core::prelude::*;
/// # let logger = Logger::default();
/// use telemetry_core::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
