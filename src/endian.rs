//! Byte-order profile for the binary codec.
//!
//! The original format switches a process-wide flag to select "Pocket"
//! little-endian encoding. That's awkward for two independent decodes on
//! different threads wanting different endianness at once, so here every
//! [`crate::io::Reader`]/[`crate::io::Writer`] carries its own [`Endian`],
//! captured once at construction. The scoped `little_endian_nbt` call is
//! kept only as sugar at the outermost public functions, backed by a
//! thread-local stack instead of a single global.

use std::cell::RefCell;

/// Byte order used for every primitive read/write in one codec call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Network byte order. The default for the Java Edition format.
    #[default]
    Big,
    /// The "Pocket" / Bedrock Edition variant.
    Little,
}

thread_local! {
    static ENDIAN_STACK: RefCell<Vec<Endian>> = const { RefCell::new(Vec::new()) };
}

/// The endian that a freshly-constructed `Reader`/`Writer` should default to,
/// i.e. the top of the thread-local scope stack, or `Endian::Big` if no
/// scope is active.
pub fn current_endian() -> Endian {
    ENDIAN_STACK.with(|stack| stack.borrow().last().copied().unwrap_or_default())
}

struct EndianGuard;

impl Drop for EndianGuard {
    fn drop(&mut self) {
        ENDIAN_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Run `f` with the ambient endian profile set to [`Endian::Little`] for the
/// duration of the call.
///
/// Any `load`/`save` (or other codec entry point) invoked inside `f` picks up
/// `Endian::Little` when it constructs its `Reader`/`Writer`; once that
/// `Reader`/`Writer` exists it keeps using the endian it captured even if a
/// nested scope changes the ambient setting again, and even if `f` panics —
/// the guard restores the prior setting on every exit path via `Drop`.
pub fn little_endian_nbt<R>(f: impl FnOnce() -> R) -> R {
    ENDIAN_STACK.with(|stack| stack.borrow_mut().push(Endian::Little));
    let _guard = EndianGuard;
    f()
}
