use apollo_parser::Lexer;
use apollo_parser::TokenKind;
use std::borrow::Cow;

const IMPLEMENTS_KEYWORD: &str = "implements";

/// Names that open a new top-level definition and so close an `implements`
/// clause that has no body.
const DEFINITION_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "fragment",
    "input",
    "interface",
    "mutation",
    "query",
    "scalar",
    "schema",
    "subscription",
    "type",
    "union",
];

#[derive(Clone, Copy, Debug, PartialEq)]
enum Clause {
    AfterName,
    ExpectingName,
    Outside,
}

/// Rewrite legacy `implements A B` clauses into `implements A & B`.
///
/// A clause is only opened by an `implements` that directly follows
/// `type <Name>` or `interface <Name>`. It ends at the first token that is
/// not a name, `&` or ignored, or at a definition keyword. Text the lexer
/// rejects is returned as-is so the parser reports the error.
pub(crate) fn normalize_legacy_implements(sdl: &str) -> Cow<'_, str> {
    let mut separator_indices = vec![];
    let mut clause = Clause::Outside;
    // The last two significant tokens, as `Some(name)` when they were names.
    let mut previous: [Option<&str>; 2] = [None, None];

    for token in Lexer::new(sdl) {
        let Ok(token) = token else {
            return Cow::Borrowed(sdl);
        };

        let name = match token.kind() {
            TokenKind::Comma | TokenKind::Comment | TokenKind::Whitespace => continue,

            TokenKind::Name => {
                let name = token.data();
                clause = match clause {
                    _ if clause != Clause::Outside && DEFINITION_KEYWORDS.contains(&name) =>
                        Clause::Outside,
                    Clause::AfterName => {
                        separator_indices.push(token.index());
                        Clause::AfterName
                    },
                    Clause::ExpectingName => Clause::AfterName,
                    Clause::Outside
                        if name == IMPLEMENTS_KEYWORD
                        && matches!(previous[0], Some("type" | "interface"))
                        && previous[1].is_some() => Clause::ExpectingName,
                    Clause::Outside => Clause::Outside,
                };
                Some(name)
            },

            TokenKind::Amp => {
                if clause != Clause::Outside {
                    clause = Clause::ExpectingName;
                }
                None
            },

            _ => {
                clause = Clause::Outside;
                None
            },
        };
        previous = [previous[1], name];
    }

    if separator_indices.is_empty() {
        return Cow::Borrowed(sdl);
    }

    log::trace!(
        "Inserted {} `&` separator(s) into legacy `implements` clauses.",
        separator_indices.len(),
    );
    let mut normalized = String::with_capacity(sdl.len() + separator_indices.len() * 2);
    let mut copied_up_to = 0;
    for idx in separator_indices {
        normalized.push_str(&sdl[copied_up_to..idx]);
        normalized.push_str("& ");
        copied_up_to = idx;
    }
    normalized.push_str(&sdl[copied_up_to..]);
    Cow::Owned(normalized)
}
