use crate::sbom_generation::domain::license::WITH_SEPARATOR;
use crate::sbom_generation::domain::{License, LicenseInput, Polarity};

/// Lexical token of a license expression
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    And,
    Or,
    With,
    Ident(String),
}

impl Token {
    fn classify(word: &str) -> Self {
        match word {
            "(" => Token::Open,
            ")" => Token::Close,
            "AND" | "and" => Token::And,
            "OR" | "or" => Token::Or,
            "WITH" | "with" => Token::With,
            _ => Token::Ident(word.to_string()),
        }
    }
}

/// Operator as held on the shunting-yard stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackOp {
    Open,
    Binary(Polarity),
}

/// Entry of the postfix output queue
#[derive(Debug, Clone, PartialEq, Eq)]
enum Postfix {
    Ident(String),
    Binary(Polarity),
}

/// LicenseParser service converting license expressions into license trees
///
/// `AND` binds tighter than `OR`; both are left-associative. `WITH` is not
/// a tree operator: it glues the following identifier onto the previous
/// one, producing a compound leaf such as `GPL-2.0+ WITH Bison-exception-2.2`.
///
/// The parser never fails loudly. Malformed expressions (stray or trailing
/// operators, unbalanced parentheses, an unmatched `WITH`, `WITH` applied to
/// a parenthesized group, adjacent identifiers) produce `None`.
pub struct LicenseParser;

impl LicenseParser {
    /// Parses a license input (expression, list or tuple of expressions)
    pub fn parse(input: &LicenseInput) -> Option<License> {
        let expression = input.to_expression()?;
        Self::parse_expression(&expression)
    }

    /// Parses a flat license expression string
    pub fn parse_expression(expression: &str) -> Option<License> {
        let tokens = Self::tokenize(expression);
        if tokens.is_empty() {
            return None;
        }

        let postfix = Self::to_postfix(tokens)?;
        Self::evaluate(postfix)
    }

    fn tokenize(expression: &str) -> Vec<Token> {
        expression
            .replace('(', " ( ")
            .replace(')', " ) ")
            .split_whitespace()
            .map(Token::classify)
            .collect()
    }

    fn to_postfix(tokens: Vec<Token>) -> Option<Vec<Postfix>> {
        let mut output: Vec<Postfix> = Vec::new();
        let mut operators: Vec<StackOp> = Vec::new();
        let mut pending_with = false;

        for token in tokens {
            if pending_with {
                // only an identifier may follow WITH
                let Token::Ident(exception) = token else {
                    return None;
                };
                match output.last_mut() {
                    Some(Postfix::Ident(license)) => {
                        license.push_str(WITH_SEPARATOR);
                        license.push_str(&exception);
                    }
                    _ => return None,
                }
                pending_with = false;
                continue;
            }

            match token {
                Token::With => pending_with = true,
                Token::Ident(id) => output.push(Postfix::Ident(id)),
                Token::Open => operators.push(StackOp::Open),
                Token::Close => loop {
                    match operators.pop() {
                        Some(StackOp::Open) => break,
                        Some(StackOp::Binary(polarity)) => output.push(Postfix::Binary(polarity)),
                        None => return None,
                    }
                },
                Token::And => {
                    while let Some(&StackOp::Binary(Polarity::All)) = operators.last() {
                        operators.pop();
                        output.push(Postfix::Binary(Polarity::All));
                    }
                    operators.push(StackOp::Binary(Polarity::All));
                }
                Token::Or => {
                    while let Some(&StackOp::Binary(polarity)) = operators.last() {
                        operators.pop();
                        output.push(Postfix::Binary(polarity));
                    }
                    operators.push(StackOp::Binary(Polarity::Any));
                }
            }
        }

        if pending_with {
            return None;
        }

        while let Some(op) = operators.pop() {
            match op {
                StackOp::Open => return None,
                StackOp::Binary(polarity) => output.push(Postfix::Binary(polarity)),
            }
        }

        Some(output)
    }

    fn evaluate(postfix: Vec<Postfix>) -> Option<License> {
        let mut operands: Vec<License> = Vec::new();

        for entry in postfix {
            match entry {
                Postfix::Ident(id) => operands.push(License::Leaf(id)),
                Postfix::Binary(polarity) => {
                    let right = operands.pop()?;
                    let left = operands.pop()?;
                    operands.push(License::join(polarity, left, right));
                }
            }
        }

        let result = operands.pop()?;
        if operands.is_empty() {
            Some(result)
        } else {
            None
        }
    }
}
