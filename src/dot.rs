//! Expression tree to DOT (Graphviz) conversion.
//!
//! The generated DOT output follows these conventions:
//! - **Operator nodes** (¬, ∧, ∨, →) are rendered as circles
//! - **Variables** are rendered as ellipses, **constants** as squares
//! - **Edges**:
//!   - Solid lines go to the left operand (or the antecedent, or the only operand of ¬)
//!   - Dashed lines go to the right operand (or the consequent)
//! - Nodes at the same depth share a rank, root at the top
//!
//! Node ids are positions in the breadth-first [`ExprArena`], so the root is `0`.
//!
//! # Examples
//!
//! ```
//! use boolexpr_rs::expr::Expr;
//!
//! let f = Expr::implies(Expr::var("x"), Expr::False);
//! let dot = f.to_dot().unwrap();
//! assert!(dot.starts_with("graph {"));
//! // Render with: dot -Tpng output.dot -o output.png
//! ```

use std::collections::BTreeMap;

use crate::arena::{ExprArena, Idx, Layer};
use crate::expr::Expr;

/// Configuration options for DOT output generation.
///
/// # Examples
///
/// ```
/// use boolexpr_rs::dot::DotConfig;
/// use boolexpr_rs::expr::Expr;
///
/// let config = DotConfig {
///     operator_shape: "diamond",
///     use_unicode: false,
///     ..DotConfig::default()
/// };
///
/// let f = Expr::var("x") & Expr::var("y");
/// let dot = f.to_dot_with_config(&config).unwrap();
/// assert!(dot.contains("label=\"and\""));
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for operator nodes (default: "circle")
    pub operator_shape: &'static str,
    /// Shape for variable nodes (default: "ellipse")
    pub variable_shape: &'static str,
    /// Shape for constant nodes (default: "square")
    pub constant_shape: &'static str,
    /// Style for edges to the left operand (default: "solid")
    pub left_edge_style: &'static str,
    /// Style for edges to the right operand (default: "dashed")
    pub right_edge_style: &'static str,
    /// Whether to label operators with logic symbols instead of words (default: true)
    pub use_unicode: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            operator_shape: "circle",
            variable_shape: "ellipse",
            constant_shape: "square",
            left_edge_style: "solid",
            right_edge_style: "dashed",
            use_unicode: true,
        }
    }
}

impl Expr {
    /// Converts the expression tree to DOT (Graphviz) format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the expression tree to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let arena = ExprArena::from_expr(self);

        // Parents precede children in the arena, so depths fill in one forward sweep.
        let mut depths = vec![0usize; arena.len()];
        let mut ranks = BTreeMap::<usize, Vec<Idx>>::new();
        for (idx, node) in arena.iter() {
            let depth = depths[idx.index()];
            ranks.entry(depth).or_default().push(idx);
            for child in node.slots() {
                depths[child.index()] = depth + 1;
            }
        }

        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [shape={}];", config.operator_shape)?;

        for rank in ranks.values() {
            writeln!(dot, "{{ rank=same")?;
            for &idx in rank.iter() {
                let node = arena.get(idx);
                match node {
                    Layer::True | Layer::False => {
                        let label = if matches!(node, Layer::True) { "1" } else { "0" };
                        writeln!(dot, "{} [label=\"{}\", shape={}];", idx.index(), label, config.constant_shape)?;
                    }
                    Layer::Var(name) => {
                        writeln!(
                            dot,
                            "{} [label=\"{}\", shape={}];",
                            idx.index(),
                            escape(name),
                            config.variable_shape
                        )?;
                    }
                    _ => {
                        writeln!(dot, "{} [label=\"{}\"];", idx.index(), operator_label(node, config))?;
                    }
                }
            }
            writeln!(dot, "}}")?;
        }

        // Left operand solid, right operand dashed
        for (idx, node) in arena.iter() {
            let mut slots = node.slots();
            if let Some(left) = slots.next() {
                writeln!(dot, "{} -- {} [style={}];", idx.index(), left.index(), config.left_edge_style)?;
            }
            if let Some(right) = slots.next() {
                writeln!(dot, "{} -- {} [style={}];", idx.index(), right.index(), config.right_edge_style)?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

fn operator_label(node: &Layer<&str>, config: &DotConfig) -> &'static str {
    match (node, config.use_unicode) {
        (Layer::Not(_), true) => "¬",
        (Layer::Not(_), false) => "not",
        (Layer::And(..), true) => "∧",
        (Layer::And(..), false) => "and",
        (Layer::Or(..), true) => "∨",
        (Layer::Or(..), false) => "or",
        (Layer::Implies(..), true) => "→",
        (Layer::Implies(..), false) => "implies",
        (Layer::True | Layer::False | Layer::Var(_), _) => "",
    }
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
