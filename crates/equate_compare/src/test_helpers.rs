//! Shared fixtures for comparer and registry tests. Only compiled in test
//! builds.

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use crate::{EqualityComparer, ObjectEq};

/// Install a `RUST_LOG`-filtered subscriber once per test process.
pub(crate) fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Fieldless enumeration fixture.
#[derive(Clone, Copy, Debug)]
#[repr(u8)]
pub(crate) enum Color {
    Red,
    Green,
    Blue,
}

crate::enumeration_element!(Color as u8);

/// Object fixture without an override: equal only to itself.
#[derive(Debug)]
pub(crate) struct Handle(pub(crate) u32);

impl ObjectEq for Handle {}

crate::object_element!(Handle);

/// Object fixture with an override: equal by `id`.
#[derive(Debug)]
pub(crate) struct Ticket {
    pub(crate) id: u32,
    pub(crate) seat: u32,
}

impl ObjectEq for Ticket {
    fn object_eq(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Ticket>()
            .is_some_and(|other| other.id == self.id)
    }
}

crate::object_element!(Ticket);

/// Wraps a comparer and counts `equals` calls.
pub(crate) struct Counting<C> {
    pub(crate) inner: C,
    calls: AtomicUsize,
}

impl<C> Counting<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<T, C: EqualityComparer<T>> EqualityComparer<T> for Counting<C> {
    fn equals(&self, x: &T, y: &T) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.equals(x, y)
    }
}

thread_local! {
    static PROBE_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Object fixture that counts `object_eq` calls on the current thread.
#[derive(Debug)]
pub(crate) struct Probe(pub(crate) u32);

impl Probe {
    /// Reset and return the call count on this thread.
    pub(crate) fn take_calls() -> usize {
        PROBE_CALLS.with(|calls| calls.replace(0))
    }
}

impl ObjectEq for Probe {
    fn object_eq(&self, other: &dyn Any) -> bool {
        PROBE_CALLS.with(|calls| calls.set(calls.get() + 1));
        other
            .downcast_ref::<Probe>()
            .is_some_and(|other| other.0 == self.0)
    }
}

crate::object_element!(Probe);

/// Zero-sized object fixture without an override.
#[derive(Debug)]
pub(crate) struct Marker;

impl ObjectEq for Marker {}

crate::object_element!(Marker);
