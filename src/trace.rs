//! Scan instrumentation hooks.
//!
//! Matching sits on automation hot paths, so instrumentation must cost
//! nothing unless asked for: with the `tracing` feature these macros forward
//! to `tracing`, without it they vanish at compile time and call sites stay
//! free of `cfg` clutter.

/// Open an info-level span covering one search call.
#[cfg(feature = "tracing")]
macro_rules! scan_span {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info_span!($name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! scan_span {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $crate::trace::DisabledSpan
    };
}

/// Record the outcome of a search call.
#[cfg(feature = "tracing")]
macro_rules! scan_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! scan_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        // Discard after evaluation so field expressions stay warning-free.
        let _ = ($($value,)+);
    };
}

pub(crate) use scan_event;
pub(crate) use scan_span;

/// Stand-in guard when tracing is compiled out; `entered()` keeps the
/// `let _span = scan_span!(...).entered();` shape valid in both builds.
#[cfg(not(feature = "tracing"))]
pub struct DisabledSpan;

#[cfg(not(feature = "tracing"))]
impl DisabledSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
