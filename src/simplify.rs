//! Constant-folding simplification.
//!
//! [`simplify`] rewrites an expression in a single bottom-up pass. Every node
//! sees its children already simplified, and then at most one [`Rule`] from a
//! fixed table is applied to it. Rules only ever replace a node by one of its
//! operands, by a constant, or (for `x → false`) by `¬x`, so:
//!
//! - the result evaluates like the input under every covering environment;
//! - the result has no more nodes than the input;
//! - no variable name is introduced.
//!
//! Every pattern that has a constant operand is covered by some rule. The
//! output of a pass is therefore either a lone constant or an expression with
//! no constant operand anywhere, and simplifying it again changes nothing.
//! Double negations are left as they are.
//!
//! # Examples
//!
//! ```
//! use boolexpr_rs::expr::Expr;
//! use boolexpr_rs::simplify::simplify;
//!
//! let f = Expr::or(Expr::False, Expr::and(Expr::True, Expr::var("y")));
//! assert_eq!(simplify(&f), Expr::var("y"));
//!
//! let g = Expr::implies(Expr::var("x"), Expr::False);
//! assert_eq!(simplify(&g), Expr::not(Expr::var("x")));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::arena::{ExprArena, Layer};
use crate::expr::Expr;

/// A rewrite rule of the simplifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rule {
    /// `¬true ⇒ false`
    NotTrue,
    /// `¬false ⇒ true`
    NotFalse,
    /// `true ∧ x ⇒ x`, `x ∧ true ⇒ x`
    AndTrue,
    /// `false ∧ x ⇒ false`, `x ∧ false ⇒ false`
    AndFalse,
    /// `true ∨ x ⇒ true`, `x ∨ true ⇒ true`
    OrTrue,
    /// `false ∨ x ⇒ x`, `x ∨ false ⇒ x`
    OrFalse,
    /// `false → x ⇒ true`
    ImpliesFalseAntecedent,
    /// `x → true ⇒ true`
    ImpliesTrueConsequent,
    /// `true → x ⇒ x`
    ImpliesTrueAntecedent,
    /// `x → false ⇒ ¬x`
    ImpliesFalseConsequent,
}

impl Rule {
    pub const ALL: [Rule; 10] = [
        Rule::NotTrue,
        Rule::NotFalse,
        Rule::AndTrue,
        Rule::AndFalse,
        Rule::OrTrue,
        Rule::OrFalse,
        Rule::ImpliesFalseAntecedent,
        Rule::ImpliesTrueConsequent,
        Rule::ImpliesTrueAntecedent,
        Rule::ImpliesFalseConsequent,
    ];
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = match self {
            Rule::NotTrue => "¬true ⇒ false",
            Rule::NotFalse => "¬false ⇒ true",
            Rule::AndTrue => "true ∧ x ⇒ x",
            Rule::AndFalse => "false ∧ x ⇒ false",
            Rule::OrTrue => "true ∨ x ⇒ true",
            Rule::OrFalse => "false ∨ x ⇒ x",
            Rule::ImpliesFalseAntecedent => "false → x ⇒ true",
            Rule::ImpliesTrueConsequent => "x → true ⇒ true",
            Rule::ImpliesTrueAntecedent => "true → x ⇒ x",
            Rule::ImpliesFalseConsequent => "x → false ⇒ ¬x",
        };
        write!(f, "{}", pattern)
    }
}

/// Applies the first matching rule to a node whose children are already simplified.
///
/// Returns the rewritten node and the rule that fired, if any. Nodes that
/// match no rule are rebuilt unchanged.
pub fn rewrite<V: Into<String>>(node: Layer<V, Expr>) -> (Expr, Option<Rule>) {
    let (expr, rule) = match node {
        Layer::Not(Expr::True) => (Expr::False, Rule::NotTrue),
        Layer::Not(Expr::False) => (Expr::True, Rule::NotFalse),

        Layer::And(Expr::True, x) | Layer::And(x, Expr::True) => (x, Rule::AndTrue),
        Layer::And(Expr::False, _) | Layer::And(_, Expr::False) => (Expr::False, Rule::AndFalse),

        Layer::Or(Expr::True, _) | Layer::Or(_, Expr::True) => (Expr::True, Rule::OrTrue),
        Layer::Or(Expr::False, x) | Layer::Or(x, Expr::False) => (x, Rule::OrFalse),

        Layer::Implies(Expr::False, _) => (Expr::True, Rule::ImpliesFalseAntecedent),
        Layer::Implies(_, Expr::True) => (Expr::True, Rule::ImpliesTrueConsequent),
        Layer::Implies(Expr::True, x) => (x, Rule::ImpliesTrueAntecedent),
        Layer::Implies(x, Expr::False) => (Expr::not(x), Rule::ImpliesFalseConsequent),

        node => return (node.fold(), None),
    };
    (expr, Some(rule))
}

/// Simplifies `expr` in one bottom-up pass of constant folding.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_traced(expr).0
}

/// Like [`simplify`], also returning the rules that fired.
///
/// Rules are listed in the order the pass applied them; a rule fired on a node
/// always comes after every rule fired inside that node.
pub fn simplify_traced(expr: &Expr) -> (Expr, Vec<Rule>) {
    let mut fired = Vec::new();
    let result = ExprArena::from_expr(expr).collapse(|node| {
        let (rewritten, rule) = rewrite(node);
        if let Some(rule) = rule {
            trace!("rewrite: {} => {}", rule, rewritten);
            fired.push(rule);
        }
        rewritten
    });
    debug!(
        "simplify(size = {}) -> size = {}, {} rewrites",
        expr.size(),
        result.size(),
        fired.len()
    );
    (result, fired)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn x() -> Expr {
        Expr::var("x")
    }

    fn y() -> Expr {
        Expr::var("y")
    }

    #[test]
    fn test_not_constants() {
        assert_eq!(simplify(&Expr::not(Expr::True)), Expr::False);
        assert_eq!(simplify(&Expr::not(Expr::False)), Expr::True);
        assert_eq!(simplify(&Expr::not(x())), Expr::not(x()));
    }

    #[test]
    fn test_and_rules() {
        assert_eq!(simplify(&Expr::and(Expr::True, x())), x());
        assert_eq!(simplify(&Expr::and(x(), Expr::True)), x());
        assert_eq!(simplify(&Expr::and(Expr::False, x())), Expr::False);
        assert_eq!(simplify(&Expr::and(x(), Expr::False)), Expr::False);
        assert_eq!(simplify(&Expr::and(x(), y())), Expr::and(x(), y()));
    }

    #[test]
    fn test_or_rules() {
        assert_eq!(simplify(&Expr::or(Expr::True, x())), Expr::True);
        assert_eq!(simplify(&Expr::or(x(), Expr::True)), Expr::True);
        assert_eq!(simplify(&Expr::or(Expr::False, x())), x());
        assert_eq!(simplify(&Expr::or(x(), Expr::False)), x());
        assert_eq!(simplify(&Expr::or(x(), y())), Expr::or(x(), y()));
    }

    #[test]
    fn test_implies_rules() {
        assert_eq!(simplify(&Expr::implies(Expr::False, x())), Expr::True);
        assert_eq!(simplify(&Expr::implies(x(), Expr::True)), Expr::True);
        assert_eq!(simplify(&Expr::implies(Expr::True, x())), x());
        assert_eq!(simplify(&Expr::implies(x(), Expr::False)), Expr::not(x()));
        assert_eq!(simplify(&Expr::implies(x(), y())), Expr::implies(x(), y()));
    }

    #[test]
    fn test_overlapping_constants_take_first_rule() {
        let (expr, rules) = simplify_traced(&Expr::implies(Expr::True, Expr::False));
        assert_eq!(expr, Expr::False);
        assert_eq!(rules, vec![Rule::ImpliesTrueAntecedent]);

        let (expr, rules) = simplify_traced(&Expr::implies(Expr::False, Expr::False));
        assert_eq!(expr, Expr::True);
        assert_eq!(rules, vec![Rule::ImpliesFalseAntecedent]);

        let (expr, rules) = simplify_traced(&Expr::and(Expr::True, Expr::False));
        assert_eq!(expr, Expr::False);
        assert_eq!(rules, vec![Rule::AndTrue]);
    }

    #[test]
    fn test_nested_folding() {
        let f = Expr::or(Expr::False, Expr::and(Expr::True, y()));
        assert_eq!(simplify(&f), y());

        let g = Expr::and(Expr::True, Expr::and(Expr::True, x()));
        assert_eq!(simplify(&g), x());

        let h = Expr::not(Expr::and(Expr::not(Expr::False), Expr::implies(x(), Expr::True)));
        assert_eq!(simplify(&h), Expr::False);
    }

    #[test]
    fn test_children_folded_before_parent() {
        // The inner rewrite exposes a constant that the parent then folds.
        let f = Expr::implies(Expr::or(x(), Expr::True), Expr::not(y()));
        let (expr, rules) = simplify_traced(&f);
        assert_eq!(expr, Expr::not(y()));
        assert_eq!(rules, vec![Rule::OrTrue, Rule::ImpliesTrueAntecedent]);
    }

    #[test]
    fn test_double_negation_kept() {
        let f = Expr::not(Expr::not(x()));
        assert_eq!(simplify(&f), f);
    }

    #[test]
    fn test_implies_false_under_not() {
        let f = Expr::not(Expr::implies(x(), Expr::False));
        assert_eq!(simplify(&f), Expr::not(Expr::not(x())));
    }

    #[test]
    fn test_no_rewrites_on_reduced_input() {
        let f = Expr::implies(Expr::and(x(), Expr::not(y())), Expr::or(y(), x()));
        let (expr, rules) = simplify_traced(&f);
        assert_eq!(expr, f);
        assert!(rules.is_empty());
    }

    #[test]
    fn test_lone_constants() {
        assert_eq!(simplify(&Expr::True), Expr::True);
        assert_eq!(simplify(&Expr::False), Expr::False);
    }

    #[test]
    fn test_rewrite_unmatched_node() {
        let (expr, rule) = rewrite::<&str>(Layer::Or(x(), y()));
        assert_eq!(expr, Expr::or(x(), y()));
        assert_eq!(rule, None);

        let (expr, rule) = rewrite::<&str>(Layer::Var("v"));
        assert_eq!(expr, Expr::var("v"));
        assert_eq!(rule, None);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::ImpliesFalseConsequent.to_string(), "x → false ⇒ ¬x");
        for rule in Rule::ALL {
            assert!(!rule.to_string().is_empty());
        }
    }

    #[test]
    fn test_method_matches_function() {
        let f = Expr::and(Expr::var("a"), Expr::or(Expr::False, Expr::var("b")));
        assert_eq!(f.simplify(), simplify(&f));
        assert_eq!(f.simplify(), Expr::and(Expr::var("a"), Expr::var("b")));
    }
}
