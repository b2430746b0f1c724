//! Grammar tooltip compilation.
//!
//! The structural strategy: a PEG grammar (`tooltip.pest`) recognizes whole
//! line shapes, and the builder lowers the parse tree into typed output.
//!
//! ```text
//! line ── parse (parse.rs)
//!           - pest grammar over the trimmed line
//!           - ordered choice across seven clause families
//!                  │
//!                  v
//!           parse tree ── build (builder.rs)
//!           - dispatch on the clause family
//!           - spread progressions over unlocked tiers
//!           - assemble abilities / auras / tier attributes
//!                  │
//!                  v
//!              Fragment
//! ```
//!
//! Anything the grammar cannot shape is a
//! [`StructuralParseFailure`](crate::CompileError::StructuralParseFailure);
//! there is no fallback inside this path. Unlike the heuristic path, which
//! writes literal values into each ability, this one routes progression
//! numbers onto per-tier attributes and has the action values read them
//! back, so the two strategies produce deliberately different graphs for
//! the same line.

#[path = "grammar/builder.rs"]
mod builder;
#[path = "grammar/parse.rs"]
mod parse;

#[cfg(test)]
#[path = "grammar/tests.rs"]
mod tests;

use crate::{CompileError, Fragment, LineContext, TooltipCompiler};

/// The grammar strategy behind the common compiler interface: a line may
/// yield abilities, auras, per-tier attributes, or any mix of the three.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrammarCompiler;

impl TooltipCompiler for GrammarCompiler {
    fn name(&self) -> &'static str {
        "grammar"
    }

    fn compile_line(&self, line: &str, cx: &LineContext<'_>) -> Result<Fragment, CompileError> {
        let top = parse::parse_line(line)?;
        builder::build(line, top, cx)
    }
}
