//! App store example binary
//!
//! Sends actions to each slice of a combined store and prints the result.

use app_store::cart::{CartAction, CartItem};
use app_store::settings::{SettingsAction, Theme};
use app_store::user::{ProfileUpdate, UserAction};
use app_store::{AppAction, AppEnvironment, AppState, app_reducer};
use composable_state_core::environment::SystemClock;
use composable_state_runtime::Store;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_state(state: &AppState) {
    match &state.user.user {
        Some(user) => println!(
            "  user: {} ({}) email={:?}",
            user.username, user.role, user.email
        ),
        None => println!("  user: <logged out>"),
    }
    println!(
        "  settings: theme={:?} language={} notifications={}",
        state.settings.theme, state.settings.language, state.settings.notifications
    );
    println!(
        "  cart: {} item(s), total {:.2}",
        state.cart.items.len(),
        state.cart.total
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app_store=debug,composable_state_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== App Store Example ===\n");

    let env = AppEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(AppState::default(), app_reducer(), env);

    let script = [
        AppAction::User(UserAction::Login {
            username: "alice".to_string(),
            role: None,
        }),
        AppAction::User(UserAction::UpdateProfile(ProfileUpdate {
            email: Some("alice@example.com".to_string()),
            ..ProfileUpdate::default()
        })),
        AppAction::Settings(SettingsAction::SetTheme(Theme::Dark)),
        AppAction::Settings(SettingsAction::SetLanguage("de".to_string())),
        AppAction::Cart(CartAction::AddItem(CartItem::new(1, "Notebook", Some(4.5)))),
        AppAction::Cart(CartAction::AddItem(CartItem::new(2, "Pen", Some(1.25)))),
        AppAction::Cart(CartAction::RemoveItem(1)),
        AppAction::User(UserAction::Logout),
    ];

    for action in script {
        println!(">>> {action:?}");
        store.send(action).await?;
        print_state(&store.state(Clone::clone).await);
        println!();
    }

    Ok(())
}
