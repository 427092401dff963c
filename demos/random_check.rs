//! Checks the simplifier laws on random expressions.
//!
//! For each generated expression, the simplified form must have no more nodes
//! and must evaluate the same under every assignment of the expression's
//! variables.
//!
//! ```bash
//! cargo run --example random-check -- --count 1000 --depth 8
//! ```

use std::collections::BTreeMap;

use clap::Parser;
use color_eyre::eyre::bail;
use log::{debug, info};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use boolexpr_rs::env::Env;
use boolexpr_rs::expr::Expr;
use boolexpr_rs::simplify::{simplify_traced, Rule};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of random expressions to check.
    #[arg(long, value_name = "INT", default_value = "100")]
    count: usize,

    /// Maximum depth of each expression.
    #[arg(long, value_name = "INT", default_value = "6")]
    depth: usize,

    /// Number of distinct variable names.
    #[arg(long, value_name = "INT", default_value = "4")]
    vars: usize,

    /// Random seed.
    #[arg(long, value_name = "INT", default_value = "42")]
    seed: u64,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,

    /// Print the DOT graph of the last expression and its simplified form.
    #[arg(long)]
    dot: bool,
}

fn random_expr(rng: &mut ChaCha8Rng, depth: usize, names: &[String]) -> Expr {
    if depth == 0 || rng.random_bool(0.2) {
        return match rng.random_range(0..6) {
            0 => Expr::True,
            1 => Expr::False,
            _ => Expr::var(names[rng.random_range(0..names.len())].as_str()),
        };
    }
    match rng.random_range(0..4) {
        0 => Expr::not(random_expr(rng, depth - 1, names)),
        1 => Expr::and(random_expr(rng, depth - 1, names), random_expr(rng, depth - 1, names)),
        2 => Expr::or(random_expr(rng, depth - 1, names), random_expr(rng, depth - 1, names)),
        _ => Expr::implies(random_expr(rng, depth - 1, names), random_expr(rng, depth - 1, names)),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    info!("args = {:?}", args);

    if args.vars == 0 || args.vars >= 64 {
        bail!("--vars must be between 1 and 63, got {}", args.vars);
    }

    let time_total = std::time::Instant::now();

    let names: Vec<String> = (1..=args.vars).map(|i| format!("x{}", i)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut nodes_before = 0;
    let mut nodes_after = 0;
    let mut unchanged = 0;
    let mut rule_counts = BTreeMap::<Rule, usize>::new();
    let mut last = None;

    for i in 0..args.count {
        let expr = random_expr(&mut rng, args.depth, &names);
        let (simplified, rules) = simplify_traced(&expr);
        debug!("#{}: {} => {}", i, expr, simplified);

        if simplified.size() > expr.size() {
            bail!("simplify grew {} into {}", expr, simplified);
        }
        for env in Env::assignments(expr.vars()) {
            let before = expr.eval(&env)?;
            let after = simplified.eval(&env)?;
            if before != after {
                bail!("simplify changed {} into {} under {:?}", expr, simplified, env);
            }
        }

        nodes_before += expr.size();
        nodes_after += simplified.size();
        if rules.is_empty() {
            unchanged += 1;
        }
        for rule in rules {
            *rule_counts.entry(rule).or_default() += 1;
        }
        last = Some((expr, simplified));
    }

    println!("Checked {} expressions (depth <= {}, {} variables)", args.count, args.depth, args.vars);
    println!("Nodes: {} before, {} after", nodes_before, nodes_after);
    println!("Unchanged by simplification: {}", unchanged);
    for rule in Rule::ALL {
        println!("  {:>6}  {}", rule_counts.get(&rule).copied().unwrap_or(0), rule);
    }

    if args.dot {
        if let Some((expr, simplified)) = last {
            println!("{}", expr.to_dot()?);
            println!("{}", simplified.to_dot()?);
        }
    }

    println!("All done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
