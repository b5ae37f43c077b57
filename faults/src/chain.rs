use crate::{context::Declared, error::Error};
use alloc::vec::Vec;
use core::{error::Error as StdError, mem, ptr};

fn addr<T: ?Sized>(value: &T) -> usize {
    (value as *const T).cast::<()>() as usize
}

/// Pre-order, depth-first walk over an error and everything it wraps.
///
/// An [`Error`] has two parents, its head (the declaration) and its tail (the cause), which are
/// visited in this order. Any other error is followed through [`source`](StdError::source). A
/// node reachable through more than one path is yielded once.
///
/// Nodes are told apart by address and type, so an error wrapping another one as its first field
/// is still followed into.
#[derive(Debug)]
pub struct Chain<'a> {
    stack: Vec<&'a (dyn StdError + 'static)>,
    seen: Vec<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    pub fn new(err: &'a (dyn StdError + 'static)) -> Self {
        let mut stack = Vec::with_capacity(4);
        stack.push(err);

        Self {
            stack,
            seen: Vec::new(),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // a wrapper shares its address with its first field, the vtable tells them apart.
            // zero sized errors of one type share a dangling address and are never skipped
            if mem::size_of_val(node) != 0 {
                if self.seen.iter().any(|&seen| ptr::eq(seen, node)) {
                    continue;
                }

                self.seen.push(node);
            }

            match node.downcast_ref::<Error>() {
                Some(err) => {
                    self.stack.extend(err.tail());
                    self.stack.push(err.head().as_error());
                }
                None => self.stack.extend(node.source()),
            }

            return Some(node);
        }

        None
    }
}

/// Whether `target` is `err` itself or is found anywhere in its chain.
///
/// Declarations are matched by identity, not by their text: two distinct `static`s with the same
/// template never match each other.
///
/// ```
/// use faults::{matches, Context};
///
/// static ERR_A: Context = Context::new("unable to do something");
/// static ERR_B: Context = Context::new("unable to do something");
///
/// let err = ERR_A.with(std::io::Error::other("just error"));
/// assert!(matches(&err, &ERR_A));
/// assert!(!matches(&err, &ERR_B));
/// assert!(matches(&ERR_B, &ERR_B));
/// ```
pub fn matches(err: &(dyn StdError + 'static), target: &dyn Declared) -> bool {
    let target = addr(target);
    Chain::new(err).any(|node| addr(node) == target)
}

/// First error of type `T` in the chain of `err`.
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    Chain::new(err).find_map(|node| node.downcast_ref::<T>())
}
