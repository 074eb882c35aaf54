//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::{DEBUG_FUEL, Parser};
use super::cst::SyntaxKind;

impl Parser<'_, '_> {
    /// Every peek spends fuel; consuming a token refills it.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let fuel = self.debug_fuel.get();
        assert!(fuel != 0, "no token consumed after {DEBUG_FUEL} lookaheads");
        self.debug_fuel.set(fuel - 1);
    }

    /// Statement productions are entered on their keyword.
    #[inline]
    pub(super) fn assert_current(&mut self, keyword: SyntaxKind) {
        let found = self.current();
        assert_eq!(
            found, keyword,
            "production for {keyword:?} entered at {found:?}"
        );
    }
}
