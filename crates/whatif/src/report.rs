//! Plain-text rendering of analysis results
//!
//! The core returns rows and groups; everything about columns, widths, and
//! labels lives here, at the edge of the program.

use whatif_core::{
    DEFAULT_PERCENTILES, DataTableRow, GoalSeekResult, GoalSeekSpec, ScenarioGroup,
    summarize_output,
};

/// Print one line per scenario point: sweep values first, then outputs.
pub fn print_data_table(rows: &[DataTableRow]) {
    let Some(first) = rows.first() else {
        println!("(no rows)");
        return;
    };

    for (name, _) in first.scenario.iter() {
        print!("{name:>16}");
    }
    for (name, _) in &first.outputs {
        print!("{name:>16}");
    }
    println!();

    for row in rows {
        for (_, value) in row.scenario.iter() {
            print!("{value:>16.2}");
        }
        for (_, value) in &row.outputs {
            print!("{value:>16.2}");
        }
        println!();
    }
}

/// Print per-scenario summary statistics for each requested output.
pub fn print_simulation_summary(groups: &[ScenarioGroup], outputs: &[String]) {
    for group in groups {
        let label = if group.scenario.is_empty() {
            "base".to_string()
        } else {
            group
                .scenario
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "scenario {} ({label}), {} replications",
            group.scenario_index, group.replications
        );

        for name in outputs {
            if let Some(stats) = summarize_output(group, name, &DEFAULT_PERCENTILES) {
                let p = |q: f64| stats.percentile(q).unwrap_or(f64::NAN);
                println!(
                    "  {name:>16}  mean {:>12.2}  std {:>10.2}  p5 {:>12.2}  p50 {:>12.2}  p95 {:>12.2}",
                    stats.mean,
                    stats.std_dev,
                    p(0.05),
                    p(0.50),
                    p(0.95),
                );
            }
        }
    }
}

/// Print the outcome of a goal-seek run.
pub fn print_goal_seek(spec: &GoalSeekSpec, result: &GoalSeekResult) {
    match result.solution {
        Some(value) => println!(
            "{} = {value:.6} drives {} to {} ({:?} after {} iterations)",
            spec.input, spec.output, spec.target, result.termination, result.iterations
        ),
        None => println!(
            "no solution for {} = {} with {} in [{}, {}] ({:?})",
            spec.output, spec.target, spec.input, spec.lower, spec.upper, result.termination
        ),
    }
}
