//! A+B Matcher
//!
//! This example runs the `A+B` automaton over a handful of inputs.
//!
//! Key concepts:
//! - States as types, transitions checked at compile time
//! - Rejection as an ordinary transition into an absorbing sink
//! - Recorded history and coverage exploration
//! - Pausing a run with a checkpoint and resuming it
//!
//! Run with: cargo run --example a_plus_b

use stepwise::analysis::explore;
use stepwise::checkpoint::Checkpoint;
use stepwise::core::{Accepting, Automaton, Family};
use stepwise::driver::{RunConfig, Runner, Session};
use stepwise::matchers::a_plus_b::{is_match, APlusB};

fn main() {
    println!("=== A+B Matcher Example ===\n");

    println!("Matching inputs:");
    for input in ["AB", "AAAAAB", "AAACAAB", "AAAAABB", "", "A", "B"] {
        let verdict = if is_match(input) { "match" } else { "no match" };
        println!("  {:<10} -> {}", format!("{input:?}"), verdict);
    }

    println!("\nStep-by-step run of \"AAB\":");
    let runner = Runner::new(RunConfig::builder().record_history(true).build());
    let result = runner.run(APlusB::initial(), "AAB".chars());
    if let Some(history) = result.history() {
        for transition in history.transitions() {
            println!(
                "  {:<8} --{:?}--> {}",
                transition.from, transition.input, transition.to
            );
        }
    }
    println!(
        "  halted in {} (accepting: {})",
        result.state(),
        result.has_tag::<Accepting>()
    );

    println!("\nEarly stop once absorbed:");
    let result = Runner::default().run(APlusB::initial(), "CAAAAAAAAB".chars());
    println!(
        "  consumed {} symbols, skipped {}, halted in {}",
        result.consumed(),
        result.skipped(),
        result.state()
    );

    println!("\nCoverage over alphabet {{A, B, C}}:");
    let exploration = explore::<APlusB>(&['A', 'B', 'C']);
    println!("  reachable: {:?}", exploration.reachable_names());
    println!("  dead edges: {:?}", exploration.dead_edges());

    println!("\nCheckpoint and resume:");
    let paused = Session::new(APlusB::initial(), RunConfig::default()).feed_all("AAA".chars());
    match paused.checkpoint().to_json() {
        Ok(json) => {
            println!("  paused in {} after {} symbols", paused.current_state(), paused.consumed());
            let resumed = Checkpoint::<APlusB>::from_json(&json).and_then(Checkpoint::resume);
            match resumed {
                Ok(session) => {
                    let state = session.feed('B').finish().into_state();
                    println!("  resumed and fed 'B': {} ({})", state, state.name());
                }
                Err(e) => println!("  resume failed: {e}"),
            }
        }
        Err(e) => println!("  capture failed: {e}"),
    }

    println!("\n=== Example Complete ===");
}
