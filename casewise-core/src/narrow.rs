//! Runtime type narrowing of dispatcher inputs.

use std::any::{Any, type_name};

/// Access to the runtime type of a dispatcher input.
///
/// Implemented for every sized `'static` type and for the `dyn Any` trait
/// objects, so a dispatcher can be declared over a concrete type or over an
/// open domain such as `dyn Any + Send + Sync`.
///
/// Narrowing is exact: `Box<String>` is not narrowed to `String`.
///
/// The same holds for boxed trait objects. A `&Box<dyn Any + Send + Sync>`
/// coerces to `&(dyn Any + Send + Sync)` with the `Box` as the value, so every
/// type test fails and only a catch-all accepts it. Dereference first:
///
/// ```rust
/// use casewise_core::narrow;
/// use std::any::Any;
///
/// let boxed: Box<dyn Any + Send + Sync> = Box::new(String::from("x"));
///
/// assert!(narrow::<dyn Any + Send + Sync, String>(&*boxed).is_some());
/// assert!(narrow::<dyn Any + Send + Sync, String>(&boxed).is_none());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a dispatcher input",
    label = "missing `AsAny` implementation",
    note = "Inputs must be `'static`; use `dyn Any + Send + Sync` for an open input domain."
)]
pub trait AsAny {
    /// Returns the input as a `dyn Any` for type tests and downcasts.
    fn as_any(&self) -> &dyn Any;

    /// Returns the declared type name of the input.
    fn declared_type(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn declared_type(&self) -> &'static str {
        type_name::<T>()
    }
}

impl AsAny for dyn Any {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn declared_type(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl AsAny for dyn Any + Send {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn declared_type(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl AsAny for dyn Any + Send + Sync {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn declared_type(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Narrows `input` to `P` if that is its runtime type.
#[inline]
pub fn narrow<I, P>(input: &I) -> Option<&P>
where
    I: AsAny + ?Sized,
    P: Any,
{
    input.as_any().downcast_ref::<P>()
}
