//! Evaluation of expressions under an environment.

use log::debug;

use crate::arena::{ExprArena, Layer};
use crate::env::Env;
use crate::error::{EvalError, EvalResult};
use crate::expr::Expr;

/// Evaluates `expr` with variables looked up in `env`.
///
/// Both operands of every binary connective are evaluated, so the call fails
/// with [`EvalError::UnboundVariable`] exactly when `env` does not cover
/// `expr`, even if the other operand already decides the result. When several
/// variables are unbound, operands are checked left to right.
///
/// # Examples
///
/// ```
/// use boolexpr_rs::env::Env;
/// use boolexpr_rs::error::EvalError;
/// use boolexpr_rs::eval::eval;
/// use boolexpr_rs::expr::Expr;
///
/// let f = Expr::implies(Expr::var("a"), Expr::False);
/// let env = Env::from([("a", true), ("b", false), ("c", true)]);
/// assert_eq!(eval(&f, &env), Ok(false));
///
/// let g = Expr::var("z");
/// assert_eq!(eval(&g, &Env::new()), Err(EvalError::UnboundVariable("z".to_string())));
/// ```
pub fn eval(expr: &Expr, env: &Env) -> EvalResult<bool> {
    debug!("eval(size = {}, env = {:?})", expr.size(), env);
    ExprArena::from_expr(expr).collapse(|node| eval_node(node, env))
}

fn eval_node(node: Layer<&str, EvalResult<bool>>, env: &Env) -> EvalResult<bool> {
    let value = match node {
        Layer::True => true,
        Layer::False => false,
        Layer::Var(name) => env
            .get(name)
            .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))?,
        Layer::Not(a) => !a?,
        Layer::And(l, r) => {
            let (l, r) = (l?, r?);
            l && r
        }
        Layer::Or(l, r) => {
            let (l, r) = (l?, r?);
            l || r
        }
        Layer::Implies(a, c) => {
            let (a, c) = (a?, c?);
            !a || c
        }
    };
    Ok(value)
}
