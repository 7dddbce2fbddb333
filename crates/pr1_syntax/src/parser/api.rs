/// Public parsing entry points.

/// Parse a token stream into a [`ParseOutcome`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: Vec<Token>) -> ParseOutcome {
    Parser::new(tokens).parse()
}

/// Like [`parse`], but also records every successful terminal match into
/// [`ParseOutcome::matches`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_trace(tokens: Vec<Token>) -> ParseOutcome {
    Parser::with_match_trace(tokens).parse()
}
