//! Module supporting type-level programming
//!
//! Only the sealing trait is needed here; the pin modes in [`crate::gpio`]
//! are type-level enums whose variant set must stay closed.

mod private {
    /// Super trait used to mark traits with an exhaustive set of
    /// implementations
    pub trait Sealed {}
}

pub(crate) use private::Sealed;
