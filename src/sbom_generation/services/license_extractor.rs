use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Result of scanning a license expression for identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseExtraction {
    /// False when an operator is missing its operand
    pub valid: bool,
    /// License identifiers, with any or-later `+` suffix removed
    pub licenses: BTreeSet<String>,
    /// Exception identifiers named through `WITH`
    pub exceptions: BTreeSet<String>,
}

fn operator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\s+(and|or|with|AND|OR|WITH)").expect("operator pattern is a valid regex")
    })
}

/// LicenseExtractor service collecting identifiers from a license expression
///
/// Unlike [`LicenseParser`](super::LicenseParser) this does not build a tree.
/// Anything between two operators is one identifier, so multi-word names
/// such as `My Custom License` are accepted as-is.
pub struct LicenseExtractor;

impl LicenseExtractor {
    pub fn extract(expression: &str) -> LicenseExtraction {
        let mut result = LicenseExtraction {
            valid: true,
            ..LicenseExtraction::default()
        };

        let mut needs_license = false;
        let mut next_exception = false;

        for token in Self::tokenize(expression) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            if matches!(token, "and" | "or" | "with" | "AND" | "OR" | "WITH") {
                let operator = token.to_ascii_lowercase();
                if needs_license || next_exception {
                    result.valid = false;
                }
                next_exception = operator == "with";
                needs_license = !next_exception;
            } else if next_exception {
                result.exceptions.insert(token.to_string());
                next_exception = false;
            } else {
                let license = token.strip_suffix('+').unwrap_or(token);
                result.licenses.insert(license.to_string());
                needs_license = false;
            }
        }

        if needs_license || next_exception {
            result.valid = false;
        }

        result
    }

    /// Splits on operators, keeping each operator as its own token
    fn tokenize(expression: &str) -> Vec<String> {
        let flattened = expression.replace(['(', ')'], " ");

        let mut tokens = Vec::new();
        let mut last = 0;
        for captures in operator_pattern().captures_iter(&flattened) {
            let (Some(whole), Some(operator)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            tokens.push(flattened[last..whole.start()].to_string());
            tokens.push(operator.as_str().to_string());
            last = whole.end();
        }
        tokens.push(flattened[last..].to_string());

        tokens
    }
}
