//! # boolexpr-rs: propositional expressions in Rust
//!
//! **`boolexpr-rs`** is a small symbolic toolkit for propositional logic.
//! It represents formulas as immutable expression trees, evaluates them under a variable assignment,
//! and rewrites them into smaller equivalent trees by constant folding.
//!
//! ## The contract
//!
//! The evaluator and the simplifier are bound by one law:
//! for every expression `e` and every environment `env` that binds all variables of `e`,
//!
//! ```text
//! eval(simplify(e), env) == eval(e, env)
//! ```
//!
//! and `simplify(e)` never has more nodes than `e`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolexpr_rs::env::Env;
//! use boolexpr_rs::error::EvalError;
//! use boolexpr_rs::expr::Expr;
//!
//! // 1. Build a formula: (true ∧ x) → false
//! let f = Expr::implies(Expr::and(Expr::True, Expr::var("x")), Expr::False);
//!
//! // 2. Simplify it: the pass folds `true ∧ x` to `x`, then `x → false` to `¬x`
//! let g = f.simplify();
//! assert_eq!(g, Expr::not(Expr::var("x")));
//! assert!(g.size() <= f.size());
//!
//! // 3. Evaluate both under the same environment
//! let env = Env::from([("x", true)]);
//! assert_eq!(f.eval(&env), Ok(false));
//! assert_eq!(g.eval(&env), Ok(false));
//!
//! // 4. Missing bindings are reported, never guessed
//! assert_eq!(g.eval(&Env::new()), Err(EvalError::UnboundVariable("x".to_string())));
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: The [`Expr`][crate::expr::Expr] tree and its structural queries.
//! - **[`env`]**: Variable assignments and their enumeration.
//! - **[`eval`]**: The evaluator.
//! - **[`simplify`]**: The single-pass constant-folding simplifier.
//! - **[`arena`]**: Breadth-first flattening and the bottom-up fold both of the above are built on.
//! - **[`dot`]**: Utilities for visualizing expression trees using Graphviz.

pub mod arena;
pub mod dot;
pub mod env;
pub mod error;
pub mod eval;
pub mod expr;
pub mod simplify;
