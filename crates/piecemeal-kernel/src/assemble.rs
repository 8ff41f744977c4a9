//! The multi-part coordinator.
//!
//! [`assemble`] sequences the factories for every part of a compound value,
//! strictly in declaration order. The first factory to fail aborts the whole
//! build: its error converts into the caller's union type and propagates via
//! `?`, so the abort is structural — there is no status flag to forget to
//! check, and factories after the failing one are never invoked.
//!
//! On total success the caller does not get the compound value. It gets a
//! [`Compound`]: one more deferred constructor holding every part's builder
//! plus the final constructor. Only materializing the `Compound` runs any
//! constructor at all, so a partially-built aggregate is unobservable by
//! construction.

use crate::builder::{BuilderList, Construct};
use crate::factory::Factory;
use piecemeal_args::Invoke;

/// An ordered tuple of part factories sharing a failure union `Error`.
///
/// Each part's own error type must convert [`Into`] the union. Validation
/// is sequential and short-circuiting: parts after the first failure are
/// never attempted, so their side effects never happen.
pub trait PartList<Error> {
    /// Tuple of each part's deferred constructor, in declaration order.
    type Builders: BuilderList;

    /// Validate every part front to back, stopping at the first failure.
    fn validate_all(self) -> Result<Self::Builders, Error>;
}

impl<Error> PartList<Error> for () {
    type Builders = ();

    fn validate_all(self) -> Result<Self::Builders, Error> {
        Ok(())
    }
}

macro_rules! impl_part_list {
    ($($part:ident),+) => {
        impl<Error, $($part),+> PartList<Error> for ($($part,)+)
        where
            $(
                $part: Factory,
                $part::Error: Into<Error>,
            )+
        {
            type Builders = ($($part::Builder,)+);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Result<Self::Builders, Error> {
                let ($($part,)+) = self;
                // Tuple expressions evaluate left to right, so `?` here is
                // the short-circuit: a failing part converts into the union
                // and returns before any later factory runs.
                Ok(($($part.validate().map_err(Into::into)?,)+))
            }
        }
    };
}

impl_part_list!(P0);
impl_part_list!(P0, P1);
impl_part_list!(P0, P1, P2);
impl_part_list!(P0, P1, P2, P3);
impl_part_list!(P0, P1, P2, P3, P4);
impl_part_list!(P0, P1, P2, P3, P4, P5);
impl_part_list!(P0, P1, P2, P3, P4, P5, P6);
impl_part_list!(P0, P1, P2, P3, P4, P5, P6, P7);
impl_part_list!(P0, P1, P2, P3, P4, P5, P6, P7, P8);
impl_part_list!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9);
impl_part_list!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10);
impl_part_list!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);

/// The deferred constructor for a whole compound value.
///
/// Holds the final constructor and the already-validated builder for every
/// part. Materializing it materializes each part in declaration order and
/// applies the final constructor to the results — the only point at which
/// the aggregate, or any of its parts, comes into existence.
///
/// A `Compound` is itself a [`Construct`], so an assembly can serve as one
/// part of a larger assembly.
#[derive(Debug)]
pub struct Compound<Ctor, Builders> {
    ctor: Ctor,
    builders: Builders,
}

impl<Ctor, Builders> Construct for Compound<Ctor, Builders>
where
    Builders: BuilderList,
    Ctor: Invoke<Builders::Outputs>,
{
    type Output = Ctor::Output;

    fn materialize(self) -> Self::Output {
        self.ctor.invoke(self.builders.materialize_all())
    }
}

/// Validate every part and, if all succeed, defer the compound construction.
///
/// `ctor` receives the materialized part values, in declaration order, when
/// the returned [`Compound`] is materialized. With zero parts (`parts = ()`)
/// assembly always succeeds and `ctor` is called with no arguments.
///
/// ```
/// use piecemeal_kernel::toy::{Widget, WidgetError};
/// use piecemeal_kernel::{Construct, always, assemble};
///
/// struct Gadget {
///     widget: Widget,
///     pair: (i32, i32),
/// }
///
/// let assembly = assemble::<WidgetError, _, _>(
///     |widget: Widget, pair: (i32, i32)| Gadget { widget, pair },
///     (
///         Widget::factory("abc".to_string(), 42),
///         always(|a: i32, b: i32| (a, b), (5, 6)),
///     ),
/// );
/// let gadget = assembly.unwrap().materialize();
/// assert_eq!(gadget.widget.text(), "abc");
/// assert_eq!(gadget.pair, (5, 6));
/// ```
pub fn assemble<Error, Ctor, Parts>(
    ctor: Ctor,
    parts: Parts,
) -> Result<Compound<Ctor, Parts::Builders>, Error>
where
    Parts: PartList<Error>,
    Ctor: Invoke<<Parts::Builders as BuilderList>::Outputs>,
{
    Ok(Compound {
        ctor,
        builders: parts.validate_all()?,
    })
}
