//! Call-site capturing macros. Each expands to one `Handler::log` call with `file!()`,
//! `module_path!()` and `line!()` filled in.

/// Logs through a handler at the given level.
///
/// ```
/// use logpipe::{Handler, Level, MemorySink};
///
/// let sink = MemorySink::new();
/// let handler = Handler::builder().sink(sink.clone()).build();
///
/// logpipe::log!(handler, Level::Info, "listening on {}", 8080);
/// logpipe::log!(handler, Level::Warning, metadata = "retries=3"; "slow upstream");
///
/// assert_eq!(sink.lines().len(), 2);
/// ```
#[macro_export]
macro_rules! log {
    ($handler:expr, $level:expr, metadata = $metadata:expr; $($arg:tt)+) => {
        $handler.log(
            &$crate::LogEvent::new($level, &::std::format!($($arg)+))
                .metadata(::std::option::Option::Some($metadata))
                .location(::std::file!(), ::std::module_path!(), ::std::line!()),
        )
    };
    ($handler:expr, $level:expr, $($arg:tt)+) => {
        $handler.log(
            &$crate::LogEvent::new($level, &::std::format!($($arg)+))
                .location(::std::file!(), ::std::module_path!(), ::std::line!()),
        )
    };
}

#[macro_export]
macro_rules! trace {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::Level::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! notice {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::Level::Notice, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::Level::Critical, $($arg)+)
    };
}
