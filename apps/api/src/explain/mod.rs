// Text explainer: dictionary-based simplification of user-submitted text.
// Everything here is synchronous and side-effect free; handlers call it inline.

pub mod handlers;
pub mod rules;
pub mod simplifier;
