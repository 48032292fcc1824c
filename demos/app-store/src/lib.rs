//! # App Store Example
//!
//! Three independent slices (session, preferences, cart) merged into one
//! application store.
//!
//! Each slice is written against its own state and action types. [`pullback`]
//! lifts a slice into [`AppState`]/[`AppAction`], and [`combine_reducers`]
//! runs every lifted slice for each action; a slice ignores actions that are
//! not addressed to it.
//!
//! ```no_run
//! use app_store::{AppAction, AppEnvironment, AppState, app_reducer};
//! use app_store::cart::{CartAction, CartItem};
//! use composable_state_core::environment::SystemClock;
//! use composable_state_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), composable_state_runtime::error::StoreError> {
//! let env = AppEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(AppState::default(), app_reducer(), env);
//!
//! store
//!     .send(AppAction::Cart(CartAction::AddItem(CartItem::new(1, "Book", Some(9.5)))))
//!     .await?;
//! let total = store.state(|s| s.cart.total).await;
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod settings;
pub mod user;

use cart::{CartAction, CartReducer, CartState};
use composable_state_core::composition::{CombinedReducer, combine_reducers, pullback};
use composable_state_core::environment::Clock;
use settings::{SettingsAction, SettingsReducer, SettingsState};
use std::sync::Arc;
use user::{UserAction, UserReducer, UserState};

/// Dependencies shared by every slice
#[derive(Clone)]
pub struct AppEnvironment {
    /// Clock for session timestamps
    pub clock: Arc<dyn Clock>,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Whole-application state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Session slice
    pub user: UserState,
    /// Preferences slice
    pub settings: SettingsState,
    /// Cart slice
    pub cart: CartState,
}

/// Whole-application actions, one variant per slice
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// Session action
    User(UserAction),
    /// Preferences action
    Settings(SettingsAction),
    /// Cart action
    Cart(CartAction),
}

impl AppAction {
    fn as_user(self) -> Option<UserAction> {
        match self {
            Self::User(action) => Some(action),
            _ => None,
        }
    }

    fn as_settings(self) -> Option<SettingsAction> {
        match self {
            Self::Settings(action) => Some(action),
            _ => None,
        }
    }

    fn as_cart(self) -> Option<CartAction> {
        match self {
            Self::Cart(action) => Some(action),
            _ => None,
        }
    }
}

/// The application reducer: every slice pulled back into [`AppState`]
#[must_use]
pub fn app_reducer() -> CombinedReducer<AppState, AppAction, AppEnvironment> {
    combine_reducers(vec![
        Box::new(pullback(
            UserReducer,
            |app: &mut AppState| &mut app.user,
            AppAction::as_user,
            AppAction::User,
        )),
        Box::new(pullback(
            SettingsReducer,
            |app: &mut AppState| &mut app.settings,
            AppAction::as_settings,
            AppAction::Settings,
        )),
        Box::new(pullback(
            CartReducer,
            |app: &mut AppState| &mut app.cart,
            AppAction::as_cart,
            AppAction::Cart,
        )),
    ])
}
