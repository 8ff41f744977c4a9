//! Tuple application.
//!
//! [`Invoke`] lets generic code treat "a callable plus a tuple of its
//! arguments" uniformly: `f.invoke((a, b, c))` is `f(a, b, c)`. It is the
//! seam between an argument bundle and the call it was packed for.
//!
//! Implementations exist for every `FnOnce` over tuples up to arity 12,
//! mirroring the standard library's tuple-trait ceiling.

/// Application of a callable to an argument tuple.
///
/// `Args` is the tuple of parameters in call order. Taking `self` by value
/// means single-use callables (capturing closures, fn pointers, hand-rolled
/// callables) all work, and the callable is consumed by the call.
pub trait Invoke<Args> {
    /// What the call produces.
    type Output;

    /// Apply `self` to the arguments, element by element, in tuple order.
    fn invoke(self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg),*> Invoke<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            fn invoke(self, args: ($($arg,)*)) -> Ret {
                let ($($arg,)*) = args;
                self($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A0);
impl_invoke!(A0, A1);
impl_invoke!(A0, A1, A2);
impl_invoke!(A0, A1, A2, A3);
impl_invoke!(A0, A1, A2, A3, A4);
impl_invoke!(A0, A1, A2, A3, A4, A5);
impl_invoke!(A0, A1, A2, A3, A4, A5, A6);
impl_invoke!(A0, A1, A2, A3, A4, A5, A6, A7);
impl_invoke!(A0, A1, A2, A3, A4, A5, A6, A7, A8);
impl_invoke!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_invoke!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_invoke!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
