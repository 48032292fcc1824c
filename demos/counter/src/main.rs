//! Counter example binary
//!
//! Walks a step counter through every action and prints the state after each.

use composable_state_runtime::Store;
use counter::{CounterAction, CounterReducer, CounterState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,composable_state_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter Example ===\n");

    let store = Store::new(CounterState::default(), CounterReducer::new(), ());

    let state = store.state(|s| *s).await;
    println!("Initial: value={} step={}", state.value, state.step);

    let script = [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::SetStep(5),
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::IncrementByAmount(100),
        CounterAction::Reset,
    ];

    for action in script {
        println!("\n>>> Sending: {action:?}");
        store.send(action).await?;
        let state = store.state(|s| *s).await;
        tracing::info!(value = state.value, step = state.step, "Counter updated");
        println!("value={} step={}", state.value, state.step);
    }

    println!("\n=== Done ===");
    Ok(())
}
