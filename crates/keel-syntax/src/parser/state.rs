//! Transient parse-mode flags.
//!
//! Flags are pushed around the descent into a sub-construct and restored when
//! it returns; they never outlive the call that set them.

use bitflags::bitflags;

use super::core::Parser;

bitflags! {
    /// Mode flags consulted by the contextual keyword classifier and the disambiguator.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub(crate) struct ParseState: u8 {
        /// Body of an `async` method, local function or lambda: `await` is an operator.
        const IN_ASYNC = 1 << 0;
        /// Top-level statements: `await` is an operator as well.
        const IN_TOP_LEVEL = 1 << 1;
        /// Inside a query expression body: clause keywords are recognized.
        const IN_QUERY = 1 << 2;
        /// Inside a pattern: `and`/`or`/`not` may be combinators.
        const IN_PATTERN = 1 << 3;
        /// Parsing a documentation cref: generic arguments use `{}`.
        const IN_CREF = 1 << 4;
    }
}

impl ParseState {
    pub fn allows_await(self) -> bool {
        self.intersects(ParseState::IN_ASYNC | ParseState::IN_TOP_LEVEL)
    }
}

impl Parser<'_, '_> {
    /// Run `f` with `set` flags added and `clear` flags removed, restoring the previous state after.
    pub(super) fn with_state<T>(
        &mut self,
        set: ParseState,
        clear: ParseState,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.state;
        self.state.insert(set);
        self.state.remove(clear);
        let result = f(self);
        self.state = saved;
        result
    }

    /// Body of a function-like construct: `await` follows the `async` modifier.
    pub(super) fn with_body_state<T>(&mut self, is_async: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let (set, clear) = if is_async {
            (ParseState::IN_ASYNC, ParseState::IN_TOP_LEVEL | ParseState::IN_QUERY)
        } else {
            (
                ParseState::empty(),
                ParseState::IN_ASYNC | ParseState::IN_TOP_LEVEL | ParseState::IN_QUERY,
            )
        };
        self.with_state(set, clear, f)
    }

    pub(super) fn in_state(&self, flag: ParseState) -> bool {
        self.state.contains(flag)
    }
}
