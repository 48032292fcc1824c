//! Reducer logic for the todo list.

use crate::types::{Todo, TodoAction, TodoId, TodoState};
use composable_state_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator},
    reducer::Reducer,
};
use std::sync::Arc;

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of todo ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddTodo(text) => {
                let id = TodoId::new(env.ids.next_id());
                state.items.push(Todo::new(id, text, env.clock.now()));
            },

            TodoAction::ToggleTodo(id) => {
                if let Some(todo) = state.items.iter_mut().find(|t| t.id == id) {
                    todo.completed = !todo.completed;
                }
            },

            TodoAction::DeleteTodo(id) => {
                state.items.retain(|t| t.id != id);
            },

            TodoAction::SetFilter(filter) => {
                state.filter = filter;
            },

            TodoAction::ClearCompleted => {
                state.items.retain(|t| !t.completed);
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Filter;
    use composable_state_testing::{ReducerTest, SequentialIds, assertions, test_clock};

    fn env() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIds::new()))
    }

    #[test]
    fn add_todo_appends_with_fresh_id() {
        ReducerTest::new(TodoReducer::new())
            .with_env(env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddTodo("Buy milk".into()))
            .when_action(TodoAction::AddTodo("Walk dog".into()))
            .then_state(|state| {
                let texts: Vec<_> = state.items.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["Buy milk", "Walk dog"]);
                assert_eq!(state.items[0].id, TodoId::new(1));
                assert_eq!(state.items[1].id, TodoId::new(2));
                assert!(state.items.iter().all(|t| !t.completed));
                assert_eq!(state.items[0].created_at, test_clock().now());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_todo_takes_any_text() {
        ReducerTest::new(TodoReducer::new())
            .with_env(env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddTodo("   ".into()))
            .when_action(TodoAction::AddTodo(String::new()))
            .when_action(TodoAction::AddTodo("x".repeat(1000)))
            .then_state(|state| {
                assert_eq!(state.items.len(), 3);
                assert_eq!(state.items[0].text, "   ");
                assert_eq!(state.items[1].text, "");
                assert_eq!(state.items[2].text.len(), 1000);
                assert!(state.items.iter().all(|t| !t.completed));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn toggle_flips_and_flips_back() {
        ReducerTest::new(TodoReducer::new())
            .with_env(env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddTodo("Task".into()))
            .when_action(TodoAction::ToggleTodo(TodoId::new(1)))
            .then_state(|state| assert!(state.items[0].completed))
            .run();

        ReducerTest::new(TodoReducer::new())
            .with_env(env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddTodo("Task".into()))
            .when_action(TodoAction::ToggleTodo(TodoId::new(1)))
            .when_action(TodoAction::ToggleTodo(TodoId::new(1)))
            .then_state(|state| assert!(!state.items[0].completed))
            .run();
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddTodo("Task".into()))
            .when_action(TodoAction::ToggleTodo(TodoId::new(99)))
            .then_state(|state| {
                assert_eq!(state.items.len(), 1);
                assert!(!state.items[0].completed);
            })
            .run();
    }

    #[test]
    fn delete_and_clear_completed() {
        ReducerTest::new(TodoReducer::new())
            .with_env(env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddTodo("One".into()))
            .when_action(TodoAction::AddTodo("Two".into()))
            .when_action(TodoAction::AddTodo("Three".into()))
            .when_action(TodoAction::DeleteTodo(TodoId::new(2)))
            .when_action(TodoAction::ToggleTodo(TodoId::new(3)))
            .when_action(TodoAction::ClearCompleted)
            .then_state(|state| {
                let texts: Vec<_> = state.items.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["One"]);
            })
            .run();
    }

    #[test]
    fn set_filter_changes_visible() {
        ReducerTest::new(TodoReducer::new())
            .with_env(env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddTodo("One".into()))
            .when_action(TodoAction::AddTodo("Two".into()))
            .when_action(TodoAction::ToggleTodo(TodoId::new(1)))
            .when_action(TodoAction::SetFilter(Filter::Active))
            .then_state(|state| {
                assert_eq!(state.filter, Filter::Active);
                let visible: Vec<_> = state.visible().iter().map(|t| t.text.as_str()).collect();
                assert_eq!(visible, vec!["Two"]);
                assert_eq!(state.active_count(), 1);
                assert_eq!(state.completed_count(), 1);
            })
            .run();
    }
}
