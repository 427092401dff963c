//! Flattened expression trees and bottom-up folds.
//!
//! An [`ExprArena`] stores the nodes of an [`Expr`] breadth-first, root at
//! index 0. Children always live at larger indices than their parent, so
//! walking the arena backwards visits every child before its parent. That is
//! all [`ExprArena::collapse`] needs to fold a tree without recursion.
//!
//! Each node is a [`Layer`]: one level of an expression whose child slots are
//! abstract. In the arena the slots are [`Idx`] handles; during a fold they
//! hold the already-folded results of the children.

use std::collections::VecDeque;

use crate::expr::Expr;

// See: https://recursion.wtf/posts/rust_schemes/

/// Position of a node in an [`ExprArena`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Idx(usize);

impl Idx {
    pub const ROOT: Idx = Idx(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// One level of an expression: variable payload `V`, child slots `A`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layer<V, A = Idx> {
    True,
    False,
    Var(V),
    Not(A),
    And(A, A),
    Or(A, A),
    Implies(A, A),
}

impl<V, A> Layer<V, A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Layer<V, B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Layer::True => Layer::True,
            Layer::False => Layer::False,
            Layer::Var(v) => Layer::Var(v),
            Layer::Not(a) => Layer::Not(f(a)),
            Layer::And(a, b) => {
                let a = f(a);
                Layer::And(a, f(b))
            }
            Layer::Or(a, b) => {
                let a = f(a);
                Layer::Or(a, f(b))
            }
            Layer::Implies(a, b) => {
                let a = f(a);
                Layer::Implies(a, f(b))
            }
        }
    }

    #[inline(always)]
    pub fn fmap_ref<B, F>(&self, mut f: F) -> Layer<&V, B>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Layer::True => Layer::True,
            Layer::False => Layer::False,
            Layer::Var(v) => Layer::Var(v),
            Layer::Not(a) => Layer::Not(f(a)),
            Layer::And(a, b) => {
                let a = f(a);
                Layer::And(a, f(b))
            }
            Layer::Or(a, b) => {
                let a = f(a);
                Layer::Or(a, f(b))
            }
            Layer::Implies(a, b) => {
                let a = f(a);
                Layer::Implies(a, f(b))
            }
        }
    }

    /// Child slots, left to right.
    pub fn slots(&self) -> impl Iterator<Item = &A> {
        let (first, second) = match self {
            Layer::True | Layer::False | Layer::Var(_) => (None, None),
            Layer::Not(a) => (Some(a), None),
            Layer::And(a, b) | Layer::Or(a, b) | Layer::Implies(a, b) => (Some(a), Some(b)),
        };
        first.into_iter().chain(second)
    }
}

impl<'a> Layer<&'a str, &'a Expr> {
    /// Peels off the top level of an expression.
    pub fn unfold(expr: &'a Expr) -> Self {
        match expr {
            Expr::True => Layer::True,
            Expr::False => Layer::False,
            Expr::Var(name) => Layer::Var(name.as_str()),
            Expr::Not(a) => Layer::Not(a.as_ref()),
            Expr::And(a, b) => Layer::And(a.as_ref(), b.as_ref()),
            Expr::Or(a, b) => Layer::Or(a.as_ref(), b.as_ref()),
            Expr::Implies(a, b) => Layer::Implies(a.as_ref(), b.as_ref()),
        }
    }
}

impl<V: Into<String>> Layer<V, Expr> {
    /// Builds the expression node described by this layer.
    pub fn fold(self) -> Expr {
        match self {
            Layer::True => Expr::True,
            Layer::False => Expr::False,
            Layer::Var(name) => Expr::var(name),
            Layer::Not(a) => Expr::not(a),
            Layer::And(a, b) => Expr::and(a, b),
            Layer::Or(a, b) => Expr::or(a, b),
            Layer::Implies(a, b) => Expr::implies(a, b),
        }
    }
}

/// Breadth-first flattening of an [`Expr`], borrowing its variable names.
#[derive(Debug, Clone)]
pub struct ExprArena<'a> {
    /// Topology sorted nodes, by construction.
    nodes: Vec<Layer<&'a str>>,
}

impl<'a> ExprArena<'a> {
    pub fn from_expr(expr: &'a Expr) -> Self {
        let mut frontier: VecDeque<&'a Expr> = VecDeque::from([expr]);
        let mut nodes: Vec<Layer<&'a str>> = Vec::new();

        while let Some(seed) = frontier.pop_front() {
            let node = Layer::unfold(seed).fmap(|child| {
                frontier.push_back(child);
                Idx(nodes.len() + frontier.len())
            });
            nodes.push(node);
        }

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: an arena holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, idx: Idx) -> &Layer<&'a str> {
        &self.nodes[idx.0]
    }

    pub fn root(&self) -> &Layer<&'a str> {
        self.get(Idx::ROOT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Idx, &Layer<&'a str>)> {
        self.nodes.iter().enumerate().map(|(i, node)| (Idx(i), node))
    }

    /// Folds the tree bottom-up.
    ///
    /// `collapse` is called exactly once per node, with every child slot
    /// already replaced by that child's result.
    pub fn collapse<R, F>(&self, mut collapse: F) -> R
    where
        F: FnMut(Layer<&'a str, R>) -> R,
    {
        let mut results: Vec<Option<R>> = std::iter::repeat_with(|| None).take(self.nodes.len()).collect();

        for (i, node) in self.nodes.iter().enumerate().rev() {
            let node = node.fmap_ref(|idx| {
                results[idx.0]
                    .take()
                    .expect("children are folded before their parent")
            });
            let node = match node {
                Layer::True => Layer::True,
                Layer::False => Layer::False,
                Layer::Var(name) => Layer::Var(*name),
                Layer::Not(a) => Layer::Not(a),
                Layer::And(a, b) => Layer::And(a, b),
                Layer::Or(a, b) => Layer::Or(a, b),
                Layer::Implies(a, b) => Layer::Implies(a, b),
            };
            results[i] = Some(collapse(node));
        }

        results
            .into_iter()
            .next()
            .flatten()
            .expect("the root is folded last")
    }

    /// Rebuilds an owned copy of the original expression.
    pub fn to_expr(&self) -> Expr {
        self.collapse(|node| node.fold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_layout_is_breadth_first() {
        let f = Expr::and(Expr::not(Expr::var("x")), Expr::var("y"));
        let arena = ExprArena::from_expr(&f);
        assert_eq!(arena.len(), 4);
        assert_eq!(arena.get(Idx(0)), &Layer::And(Idx(1), Idx(2)));
        assert_eq!(arena.get(Idx(1)), &Layer::Not(Idx(3)));
        assert_eq!(arena.get(Idx(2)), &Layer::Var("y"));
        assert_eq!(arena.get(Idx(3)), &Layer::Var("x"));
    }

    #[test]
    fn test_children_after_parent() {
        let f = Expr::implies(
            Expr::or(Expr::var("a"), Expr::not(Expr::False)),
            Expr::and(Expr::True, Expr::not(Expr::not(Expr::var("b")))),
        );
        let arena = ExprArena::from_expr(&f);
        assert_eq!(arena.len(), f.size());
        for (idx, node) in arena.iter() {
            for child in node.slots() {
                assert!(*child > idx, "{:?} must come after {:?}", child, idx);
            }
        }
    }

    #[test]
    fn test_to_expr_roundtrip() {
        let f = Expr::or(
            Expr::implies(Expr::var("p"), Expr::False),
            Expr::and(Expr::var("q"), Expr::not(Expr::True)),
        );
        let arena = ExprArena::from_expr(&f);
        assert_eq!(arena.to_expr(), f);
    }

    #[test]
    fn test_collapse_counts_nodes() {
        let f = Expr::and(Expr::var("x"), Expr::or(Expr::var("y"), Expr::var("z")));
        let arena = ExprArena::from_expr(&f);
        let count: usize = arena.collapse(|node| match node {
            Layer::True | Layer::False | Layer::Var(_) => 1,
            Layer::Not(a) => 1 + a,
            Layer::And(a, b) | Layer::Or(a, b) | Layer::Implies(a, b) => 1 + a + b,
        });
        assert_eq!(count, 5);
    }

    #[test]
    fn test_collapse_visits_each_node_once() {
        let f = Expr::not(Expr::and(Expr::var("x"), Expr::var("x")));
        let arena = ExprArena::from_expr(&f);
        let mut visits = 0;
        arena.collapse(|_| visits += 1);
        assert_eq!(visits, 4);
    }

    #[test]
    fn test_single_leaf() {
        let f = Expr::var("only");
        let arena = ExprArena::from_expr(&f);
        assert_eq!(arena.len(), 1);
        assert!(!arena.is_empty());
        assert_eq!(arena.root(), &Layer::Var("only"));
        assert_eq!(arena.to_expr(), f);
    }
}
