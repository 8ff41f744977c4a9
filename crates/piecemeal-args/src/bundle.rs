//! Ordered, single-use argument bundles.
//!
//! A [`Bundle`] is the value form of "the arguments to a constructor call we
//! have not made yet". Insertion order is significant — it matches the
//! parameter order of the call the bundle is destined for — and the bundle
//! is immutable once formed.
//!
//! Ownership category is preserved per element: pack an owned `String` and
//! it is moved out at unpack time; pack a `&str` and the callee sees the
//! borrow. Nothing is cloned on either side of the fence.

use crate::invoke::Invoke;

/// An ordered, opaque package of arguments for exactly one call.
///
/// The contents are inaccessible except through [`Bundle::unpack`], which
/// consumes the bundle. There is deliberately no way to observe, mutate, or
/// partially extract the elements.
#[derive(Debug)]
pub struct Bundle<Args> {
    args: Args,
}

/// Capture an argument tuple as a [`Bundle`].
///
/// ```
/// use piecemeal_args::pack;
///
/// let bundle = pack(("label".to_string(), 3));
/// let out = bundle.unpack(|name: String, count: i32| format!("{name}x{count}"));
/// assert_eq!(out, "labelx3");
/// ```
pub fn pack<Args>(args: Args) -> Bundle<Args> {
    Bundle { args }
}

impl<Args> Bundle<Args> {
    /// Spend the bundle on `func`, forwarding each element in insertion
    /// order, and return whatever the call returns.
    ///
    /// Owned elements are moved into the call; reference elements are passed
    /// through. The bundle is gone afterwards either way.
    pub fn unpack<Func>(self, func: Func) -> Func::Output
    where
        Func: Invoke<Args>,
    {
        func.invoke(self.args)
    }
}
