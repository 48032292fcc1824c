//! Simple CLI demo for the todo example.

use composable_state_core::environment::{MonotonicIds, SystemClock};
use composable_state_runtime::Store;
use std::sync::Arc;
use todo::{Filter, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState};

fn print_list(title: &str, state: &TodoState) {
    println!("\n{title} (filter: {:?})", state.filter);
    for todo in state.visible() {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{status}] #{} {}", todo.id, todo.text);
    }
    println!(
        "  {} active, {} completed",
        state.active_count(),
        state.completed_count()
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Todo Example ===");

    let env = TodoEnvironment::new(Arc::new(SystemClock), Arc::new(MonotonicIds::default()));
    let store = Store::new(TodoState::new(), TodoReducer::new(), env);

    for text in ["Buy milk", "Write documentation", "Deploy to production"] {
        store.send(TodoAction::AddTodo(text.to_string())).await?;
    }
    print_list("Added three todos", &store.state(Clone::clone).await);

    store.send(TodoAction::ToggleTodo(TodoId::new(1))).await?;
    print_list("Completed 'Buy milk'", &store.state(Clone::clone).await);

    store.send(TodoAction::SetFilter(Filter::Active)).await?;
    print_list("Showing active only", &store.state(Clone::clone).await);

    store.send(TodoAction::DeleteTodo(TodoId::new(3))).await?;
    store.send(TodoAction::ClearCompleted).await?;
    store.send(TodoAction::SetFilter(Filter::All)).await?;
    print_list("Deleted one, cleared completed", &store.state(Clone::clone).await);

    Ok(())
}
