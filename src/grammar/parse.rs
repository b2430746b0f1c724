use pest::Parser;
use pest_derive::Parser as PestParser;

use crate::CompileError;

/// The compiled grammar. `Rule` names mirror the `.pest` source; the builder
/// matches on them to lower the parse tree.
#[derive(PestParser)]
#[grammar = "src/grammar/tooltip.pest"]
pub(super) struct TooltipParser;

/// Run the grammar over one line. Returns the `tooltip` pair on success.
pub(super) fn parse_line(line: &str) -> Result<pest::iterators::Pair<'_, Rule>, CompileError> {
    let mut pairs = TooltipParser::parse(Rule::tooltip, line.trim())
        .map_err(|e| structural(line, &e))?;
    pairs.next().ok_or_else(|| CompileError::StructuralParseFailure {
        line: line.to_string(),
        reason: "empty parse".to_string(),
    })
}

fn structural(line: &str, e: &pest::error::Error<Rule>) -> CompileError {
    CompileError::StructuralParseFailure {
        line: line.to_string(),
        reason: e.variant.message().into_owned(),
    }
}
