//! Propositional expression trees.
//!
//! [`Expr`] is an immutable, exclusively-owned tree over seven variants:
//! the two constants, named variables, and the connectives NOT, AND, OR and
//! IMPLIES. Equality is structural.
//!
//! Constructors build exactly the node they are asked for. Any reduction is
//! the job of the [simplifier][crate::simplify].
//!
//! # Examples
//!
//! ```
//! use boolexpr_rs::expr::Expr;
//!
//! let x = Expr::var("x");
//! let y = Expr::var("y");
//! let f = Expr::implies(x.clone() & y, !x);
//!
//! assert_eq!(f.size(), 6);
//! assert_eq!(f.depth(), 2);
//! assert_eq!(f.to_string(), "((x ∧ y) → ¬x)");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::env::Env;
use crate::error::EvalResult;

/// A propositional formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Constant true.
    True,
    /// Constant false.
    False,
    /// Variable, bound by an [`Env`].
    Var(String),
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// Implication: antecedent, consequent.
    Implies(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn constant(value: bool) -> Self {
        if value {
            Expr::True
        } else {
            Expr::False
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(antecedent: Self, consequent: Self) -> Self {
        Expr::Implies(Box::new(antecedent), Box::new(consequent))
    }
}

impl Expr {
    /// Returns the value of a constant node, `None` for anything else.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Expr::True => Some(true),
            Expr::False => Some(false),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.as_bool().is_some()
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Expr> {
        let (first, second) = match self {
            Expr::True | Expr::False | Expr::Var(_) => (None, None),
            Expr::Not(a) => (Some(a.as_ref()), None),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) => (Some(l.as_ref()), Some(r.as_ref())),
        };
        first.into_iter().chain(second)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;
        while let Some(expr) = stack.pop() {
            count += 1;
            stack.extend(expr.children());
        }
        count
    }

    /// Length of the longest root-to-leaf path (0 for leaves).
    pub fn depth(&self) -> usize {
        let mut stack = vec![(self, 0)];
        let mut max = 0;
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(expr.children().map(|child| (child, depth + 1)));
        }
        max
    }

    /// Names of all variables reachable from this node.
    pub fn vars(&self) -> BTreeSet<&str> {
        let mut stack = vec![self];
        let mut vars = BTreeSet::new();
        while let Some(expr) = stack.pop() {
            if let Expr::Var(name) = expr {
                vars.insert(name.as_str());
            }
            stack.extend(expr.children());
        }
        vars
    }

    /// See [`eval`][crate::eval::eval].
    pub fn eval(&self, env: &Env) -> EvalResult<bool> {
        crate::eval::eval(self, env)
    }

    /// See [`simplify`][crate::simplify::simplify].
    pub fn simplify(&self) -> Expr {
        crate::simplify::simplify(self)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::constant(value)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::True => write!(f, "true"),
            Expr::False => write!(f, "false"),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(a) => write!(f, "¬{}", a),
            Expr::And(l, r) => write!(f, "({} ∧ {})", l, r),
            Expr::Or(l, r) => write!(f, "({} ∨ {})", l, r),
            Expr::Implies(a, c) => write!(f, "({} → {})", a, c),
        }
    }
}
