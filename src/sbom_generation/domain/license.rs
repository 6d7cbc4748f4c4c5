use std::collections::BTreeSet;
use std::fmt;

/// Separator placed between a license identifier and its exception.
pub const WITH_SEPARATOR: &str = " WITH ";

/// Polarity of a license set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Conjunctive - all licenses apply
    All,
    /// Disjunctive - any one license applies
    Any,
}

impl Polarity {
    /// Operator keyword used when rendering a set of this polarity
    pub fn operator(self) -> &'static str {
        match self {
            Polarity::All => "AND",
            Polarity::Any => "OR",
        }
    }
}

/// Parsed license expression tree
///
/// A `Leaf` carries a single identifier verbatim, including an optional
/// `+` (or-later) suffix and an optional ` WITH <exception>` clause.
/// Sets always hold at least two children and never directly contain a set
/// of their own polarity; use [`License::join`] to build them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum License {
    Leaf(String),
    All(Vec<License>),
    Any(Vec<License>),
}

impl License {
    pub fn leaf(id: impl Into<String>) -> Self {
        License::Leaf(id.into())
    }

    /// Combines two operands into a set of the given polarity.
    ///
    /// Operands that already are sets of the same polarity are spliced in
    /// rather than nested, preserving child order.
    pub fn join(polarity: Polarity, left: License, right: License) -> Self {
        let mut children = Vec::new();
        for operand in [left, right] {
            match operand {
                License::All(inner) if polarity == Polarity::All => children.extend(inner),
                License::Any(inner) if polarity == Polarity::Any => children.extend(inner),
                other => children.push(other),
            }
        }

        match polarity {
            Polarity::All => License::All(children),
            Polarity::Any => License::Any(children),
        }
    }

    pub fn polarity(&self) -> Option<Polarity> {
        match self {
            License::Leaf(_) => None,
            License::All(_) => Some(Polarity::All),
            License::Any(_) => Some(Polarity::Any),
        }
    }

    /// Children of a set; empty for a leaf
    pub fn children(&self) -> &[License] {
        match self {
            License::Leaf(_) => &[],
            License::All(children) | License::Any(children) => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, License::Leaf(_))
    }

    /// Identifiers of every leaf, without or-later suffix or exception
    pub fn license_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        self.visit_leaves(&mut |leaf| {
            ids.insert(leaf.license_id().to_string());
        });
        ids
    }

    /// Exception identifiers attached through `WITH` clauses
    pub fn exception_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        self.visit_leaves(&mut |leaf| {
            if let Some(exception) = leaf.exception {
                ids.insert(exception.to_string());
            }
        });
        ids
    }

    fn visit_leaves<'a>(&'a self, visitor: &mut dyn FnMut(LeafParts<'a>)) {
        match self {
            License::Leaf(text) => visitor(LeafParts::split(text)),
            License::All(children) | License::Any(children) => {
                for child in children {
                    child.visit_leaves(visitor);
                }
            }
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "{}", self)
        } else {
            write!(f, "({})", self)
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            License::Leaf(text) => f.write_str(text),
            License::All(children) | License::Any(children) => {
                let operator = self.polarity().map(Polarity::operator).unwrap_or("");
                for (idx, child) in children.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " {} ", operator)?;
                    }
                    child.fmt_nested(f)?;
                }
                Ok(())
            }
        }
    }
}

/// Components of a leaf identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafParts<'a> {
    /// License identifier without the or-later suffix
    pub id: &'a str,
    pub or_later: bool,
    pub exception: Option<&'a str>,
}

impl<'a> LeafParts<'a> {
    pub fn split(text: &'a str) -> Self {
        let (license, exception) = match text.split_once(WITH_SEPARATOR) {
            Some((license, exception)) => (license, Some(exception)),
            None => (text, None),
        };

        let (id, or_later) = match license.strip_suffix('+') {
            Some(id) => (id, true),
            None => (license, false),
        };

        Self {
            id,
            or_later,
            exception,
        }
    }

    pub fn license_id(&self) -> &'a str {
        self.id
    }
}

/// Raw license input accepted by the parser
///
/// A list of expressions is an implicit disjunction; a tuple of
/// expressions is an implicit conjunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseInput {
    Expression(String),
    AnyOf(Vec<LicenseInput>),
    AllOf(Vec<LicenseInput>),
}

impl LicenseInput {
    pub fn expression(text: impl Into<String>) -> Self {
        LicenseInput::Expression(text.into())
    }

    /// Builds the implicit disjunction used for a package's license list
    pub fn any_of<I, S>(expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LicenseInput::AnyOf(
            expressions
                .into_iter()
                .map(|e| LicenseInput::Expression(e.into()))
                .collect(),
        )
    }

    pub fn all_of<I, S>(expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LicenseInput::AllOf(
            expressions
                .into_iter()
                .map(|e| LicenseInput::Expression(e.into()))
                .collect(),
        )
    }

    /// Flattens the input into a single expression string.
    ///
    /// Each container element is wrapped in parentheses and joined with the
    /// container's implicit operator; the whole result is parenthesized.
    /// Returns `None` only when the whole input is empty; an empty element
    /// stays in place as `()`, which no parse accepts.
    pub fn to_expression(&self) -> Option<String> {
        match self {
            LicenseInput::Expression(text) if text.trim().is_empty() => None,
            LicenseInput::AnyOf(elements) | LicenseInput::AllOf(elements)
                if elements.is_empty() =>
            {
                None
            }
            _ => Some(self.render()),
        }
    }

    fn render(&self) -> String {
        let (elements, operator) = match self {
            LicenseInput::Expression(text) => return text.clone(),
            LicenseInput::AnyOf(elements) => (elements, " OR "),
            LicenseInput::AllOf(elements) => (elements, " AND "),
        };

        let parts: Vec<String> = elements
            .iter()
            .map(|element| format!("({})", element.render()))
            .collect();
        format!("({})", parts.join(operator))
    }
}

impl From<&str> for LicenseInput {
    fn from(text: &str) -> Self {
        LicenseInput::Expression(text.to_string())
    }
}

impl From<String> for LicenseInput {
    fn from(text: String) -> Self {
        LicenseInput::Expression(text)
    }
}
