/*! Names of the `tracing` spans, events and fields emitted by the library. Subscribers
(such as the JSON logger of the command line tool) match on these constants. */

// log record fields:
pub const EVENT_FIELD: &str = "event";
pub const FORMULA_FIELD: &str = "formula";
pub const PLACEHOLDER_FIELD: &str = "placeholder";
pub const TERM_FIELD: &str = "term";
pub const VARIABLE_FIELD: &str = "variable";

// log span types:
/// Inside a top-level propositional skeleton traversal.
pub const SKELETON: &str = "@skeleton";

// log event types:
/// A new placeholder was minted for a maximal atomic subformula.
pub const MINT: &str = "@mint";

/// An existing placeholder was reused for a repeated subformula.
pub const REUSE: &str = "@reuse";

/// A substitution was refused because the replacement term mentions a forbidden variable.
pub const CAPTURE: &str = "@capture";
