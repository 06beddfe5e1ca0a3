//! Independent runs share nothing and can proceed on many threads at once.

use stepwise::core::{Accepting, Automaton};
use stepwise::driver::{RunConfig, Runner};
use stepwise::matchers::a_plus_b::{is_match, APlusB};

fn cases() -> Vec<(String, bool)> {
    (0..64)
        .flat_map(|n| {
            let a_run = "A".repeat(n);
            [
                (format!("{a_run}B"), n > 0),
                (format!("{a_run}BB"), false),
                (a_run.clone(), false),
                (format!("{a_run}C"), false),
            ]
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_matches_agree_with_expected() {
    let handles: Vec<_> = cases()
        .into_iter()
        .map(|(input, expected)| {
            tokio::spawn(async move { (is_match(&input), expected, input) })
        })
        .collect();

    for handle in handles {
        let (actual, expected, input) = handle.await.unwrap();
        assert_eq!(actual, expected, "{input:?}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_runner_records_independent_histories() {
    let runner = Runner::new(RunConfig::builder().record_history(true).build());

    let handles: Vec<_> = (1..=16)
        .map(|n| {
            tokio::task::spawn_blocking(move || {
                let input = format!("{}B", "A".repeat(n));
                (n, runner.run(APlusB::initial(), input.chars()))
            })
        })
        .collect();

    for handle in handles {
        let (n, result) = handle.await.unwrap();
        assert_eq!(result.consumed(), n + 1);
        assert_eq!(result.history().unwrap().len(), n + 2);
        assert!(result.has_tag::<Accepting>());
    }
}
