//! User directory example binary
//!
//! Walks the mock API through list, create, list, delete, and a second delete
//! of the same user, printing each result as it arrives.

use composable_state_mock_api::{MockUserApi, NewUser, UserRecord};
use composable_state_runtime::Store;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_directory::{
    Config, DirectoryAction, DirectoryEnvironment, DirectoryReducer, DirectoryState,
};

const RESULT_TIMEOUT: Duration = Duration::from_secs(30);

fn print_users(users: &[UserRecord]) {
    for user in users {
        println!("  #{} {} <{}> [{}]", user.id, user.name, user.email, user.role);
    }
    println!("  ({} users)", users.len());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(?config, "Starting user directory");
    println!("=== User Directory Example ===\n");

    let api = MockUserApi::with_config(config.api_config());
    let env = DirectoryEnvironment::new(api, config.query_config());
    let store = Store::new(DirectoryState::default(), DirectoryReducer::new(), env);

    let script = [
        DirectoryAction::LoadUsers,
        DirectoryAction::CreateUser(NewUser::new("Eve", "eve@example.com", "QA")),
        DirectoryAction::LoadUsers,
        DirectoryAction::SelectUser(1),
        DirectoryAction::DeleteUser(2),
        DirectoryAction::DeleteUser(2),
        DirectoryAction::LoadUsers,
    ];

    for action in script {
        println!(">>> {action:?}");
        let result = store
            .send_and_wait_for(action, DirectoryAction::is_result, RESULT_TIMEOUT)
            .await?;

        match result {
            DirectoryAction::UsersLoaded(users) => print_users(&users),
            DirectoryAction::UserSelected(user) => println!("  selected {user:?}"),
            DirectoryAction::UserCreated(user) => println!("  created #{} {}", user.id, user.name),
            DirectoryAction::UserDeleted(confirmation) => {
                println!("  deleted #{}", confirmation.deleted_id);
            },
            DirectoryAction::RequestFailed(error) => println!("  error: {error}"),
            other => println!("  unexpected {other:?}"),
        }
        println!();
    }

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
