//! Deferred constructors.
//!
//! A [`Thunk`] is a constructor call that has been fully bound — callback
//! plus argument bundle — but not yet made. It is the value form of
//! "validated, buildable, not built".
//!
//! [`Construct`] is the seam the rest of the kernel works against: anything
//! that can be materialized exactly once into a final value. Materializing
//! consumes the constructor; dropping one unmaterialized runs nothing.

use piecemeal_args::{Bundle, Invoke, pack};

/// A deferred constructor: one call to [`materialize`](Construct::materialize)
/// produces the final value.
///
/// `self` is taken by value, so a constructor cannot run twice — the second
/// call is a use-after-move and does not compile. Discarding a `Construct`
/// without materializing it is an ordinary drop; the wrapped construction
/// callback never runs.
pub trait Construct {
    /// The value this constructor produces.
    type Output;

    /// Run the bound constructor call, consuming `self`.
    fn materialize(self) -> Self::Output;
}

/// A construction callback paired with exactly one argument [`Bundle`].
///
/// Created by a factory once validation has succeeded; from that point the
/// thunk is a guarantee that materializing will yield a value satisfying the
/// target type's invariants.
#[derive(Debug)]
pub struct Thunk<Ctor, Args> {
    ctor: Ctor,
    args: Bundle<Args>,
}

impl<Ctor, Args> Thunk<Ctor, Args> {
    /// Bind a construction callback to an already-packed bundle.
    pub fn new(ctor: Ctor, args: Bundle<Args>) -> Self {
        Self { ctor, args }
    }
}

/// Bind a construction callback to an argument tuple.
///
/// Shorthand for `Thunk::new(ctor, pack(args))`.
///
/// ```
/// use piecemeal_kernel::{Construct, thunk};
///
/// let t = thunk(|a: i32, b: i32| a + b, (2, 5));
/// assert_eq!(t.materialize(), 7);
/// ```
pub fn thunk<Ctor, Args>(ctor: Ctor, args: Args) -> Thunk<Ctor, Args>
where
    Ctor: Invoke<Args>,
{
    Thunk::new(ctor, pack(args))
}

impl<Ctor, Args> Construct for Thunk<Ctor, Args>
where
    Ctor: Invoke<Args>,
{
    type Output = Ctor::Output;

    fn materialize(self) -> Self::Output {
        self.args.unpack(self.ctor)
    }
}

/// An ordered tuple of deferred constructors.
///
/// Materializing the list materializes each element in positional order and
/// yields the tuple of outputs. This is the coordinator's base case: once
/// every part has validated, its builders are spent left to right and the
/// results handed to the final constructor.
pub trait BuilderList {
    /// Tuple of each builder's output, in the same positions.
    type Outputs;

    /// Materialize every builder, first to last.
    fn materialize_all(self) -> Self::Outputs;
}

impl BuilderList for () {
    type Outputs = ();

    fn materialize_all(self) -> Self::Outputs {}
}

macro_rules! impl_builder_list {
    ($($b:ident),+) => {
        impl<$($b),+> BuilderList for ($($b,)+)
        where
            $($b: Construct),+
        {
            type Outputs = ($($b::Output,)+);

            #[allow(non_snake_case)]
            fn materialize_all(self) -> Self::Outputs {
                let ($($b,)+) = self;
                ($($b.materialize(),)+)
            }
        }
    };
}

impl_builder_list!(B0);
impl_builder_list!(B0, B1);
impl_builder_list!(B0, B1, B2);
impl_builder_list!(B0, B1, B2, B3);
impl_builder_list!(B0, B1, B2, B3, B4);
impl_builder_list!(B0, B1, B2, B3, B4, B5);
impl_builder_list!(B0, B1, B2, B3, B4, B5, B6);
impl_builder_list!(B0, B1, B2, B3, B4, B5, B6, B7);
impl_builder_list!(B0, B1, B2, B3, B4, B5, B6, B7, B8);
impl_builder_list!(B0, B1, B2, B3, B4, B5, B6, B7, B8, B9);
impl_builder_list!(B0, B1, B2, B3, B4, B5, B6, B7, B8, B9, B10);
impl_builder_list!(B0, B1, B2, B3, B4, B5, B6, B7, B8, B9, B10, B11);
