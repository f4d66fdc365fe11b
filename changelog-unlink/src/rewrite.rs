//! Heading rewrite rule.
//!
//! Turns `## [<label>](<url>) (<parenthetical>)` into `## <label> (<parenthetical>)`
//! anywhere in the text. Everything else passes through untouched.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Linked version heading.
///
/// The label stops at the first `]` and the URL at the first `)`, so labels
/// containing `]` and URLs containing `)` are left alone. Neither class excludes
/// newlines and matching is not anchored to line starts.
static LINKED_HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"## \[",
        r"([^\]]+)",     // label
        r"\]\(",
        r"[^)]+",        // url (dropped)
        r"\) ",
        r"(\([^)]+\))",  // parenthetical, parentheses included
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid heading regex: {err}"),
    }
});

const REPLACEMENT: &str = "## ${1} ${2}";

/// Result of applying the rewrite rule to one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    /// The rewritten text; borrowed when nothing matched.
    pub content: Cow<'a, str>,
    /// Number of linked headings that were rewritten.
    pub headings: usize,
}

impl Rewrite<'_> {
    /// Whether the rewritten text differs from `original`.
    #[must_use]
    pub fn differs_from(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Strip links from every linked version heading in `content`.
#[must_use]
pub fn strip_heading_links(content: &str) -> Rewrite<'_> {
    let headings = LINKED_HEADING_PATTERN.find_iter(content).count();
    if headings == 0 {
        return Rewrite {
            content: Cow::Borrowed(content),
            headings,
        };
    }

    Rewrite {
        content: LINKED_HEADING_PATTERN.replace_all(content, REPLACEMENT),
        headings,
    }
}
