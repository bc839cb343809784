//! Optional instrumentation of field multiplications.

/// Emit a `TRACE` event for a multiplication forwarded to the collaborator `$multiplier`.
///
/// Only type names and byte order are recorded, never operand values.
#[cfg(feature = "trace-multiplication")]
macro_rules! trace_multiplication {
    ($multiplier:ty) => {
        ::tracing::event!(
            ::tracing::Level::TRACE,
            multiplier = ::core::any::type_name::<$multiplier>(),
            order = ?<$multiplier as $crate::Multiplier>::OPERAND_ORDER,
            "forwarding field multiplication"
        )
    };
}

#[cfg(not(feature = "trace-multiplication"))]
macro_rules! trace_multiplication {
    ($multiplier:ty) => {};
}

pub(crate) use trace_multiplication;
