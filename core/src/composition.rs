//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state
//! - **`pullback`**: Focus a slice reducer on a subset of state *and* actions,
//!   which is how independent slices are merged into one application store
//!
//! # Examples
//!
//! ## Merging slices into one store
//!
//! ```
//! use composable_state_core::{smallvec, Effect, Reducer, SmallVec};
//! use composable_state_core::composition::{combine_reducers, pullback};
//!
//! #[derive(Clone, Default)]
//! struct ThemeState { dark: bool }
//!
//! #[derive(Clone, Default)]
//! struct AppState { theme: ThemeState, visits: u32 }
//!
//! #[derive(Clone)]
//! enum ThemeAction { Toggle }
//!
//! #[derive(Clone)]
//! enum AppAction { Theme(ThemeAction), Visit }
//!
//! struct ThemeReducer;
//!
//! impl Reducer for ThemeReducer {
//!     type State = ThemeState;
//!     type Action = ThemeAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ThemeState,
//!         action: ThemeAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<ThemeAction>; 4]> {
//!         match action {
//!             ThemeAction::Toggle => state.dark = !state.dark,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let theme = pullback(
//!     ThemeReducer,
//!     |app: &mut AppState| &mut app.theme,
//!     |action: AppAction| match action {
//!         AppAction::Theme(a) => Some(a),
//!         AppAction::Visit => None,
//!     },
//!     AppAction::Theme,
//! );
//!
//! let app = combine_reducers(vec![Box::new(theme)]);
//! let mut state = AppState::default();
//! app.reduce(&mut state, AppAction::Theme(ThemeAction::Toggle), &());
//! assert!(state.theme.dark);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;
use std::sync::Arc;

/// A type-erased reducer that can be shared across tasks
pub type BoxedReducer<S, A, E> =
    Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Runs every reducer in `reducers`, in order, on the same state and action.
///
/// Effects are concatenated in reducer order. Slices written against their
/// own types are usually wrapped in [`pullback`] first; see the module docs.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer {
        reducers: Arc::new(reducers),
    }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`]. Cloning is cheap: the reducer list is shared.
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Arc<Vec<BoxedReducer<S, A, E>>>,
}

impl<S, A, E> Clone for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            reducers: Arc::clone(&self.reducers),
        }
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in self.reducers.iter() {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Runs `reducer` on a copy of a sub-state, then writes the copy back.
///
/// The action type is shared with the parent. Prefer [`pullback`] when the
/// slice also has its own action type.
///
/// ```
/// use composable_state_core::{Effect, Reducer, SmallVec};
/// use composable_state_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct Cart { items: u32 }
///
/// #[derive(Default)]
/// struct App { cart: Cart, title: String }
///
/// struct AddItem;
///
/// impl Reducer for AddItem {
///     type State = Cart;
///     type Action = ();
///     type Environment = ();
///
///     fn reduce(&self, cart: &mut Cart, _action: (), _env: &()) -> SmallVec<[Effect<()>; 4]> {
///         cart.items += 1;
///         SmallVec::new()
///     }
/// }
///
/// let scoped = scope_reducer(
///     AddItem,
///     |app: &App| &app.cart,
///     |app: &mut App, cart: Cart| app.cart = cart,
/// );
/// let mut app = App::default();
/// scoped.reduce(&mut app, (), &());
/// assert_eq!(app.cart.items, 1);
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<fn() -> (A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut sub_state = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut sub_state, action, env);
        (self.set_state)(state, sub_state);
        effects
    }
}

/// Embeds a slice reducer into a parent store.
///
/// - `state` borrows the slice out of the parent state
/// - `extract` picks the parent actions the slice handles (`None` = ignore)
/// - `embed` wraps slice actions produced by effects back into parent actions
///
/// Effects returned by the slice are lifted with [`Effect::map`].
pub fn pullback<S, SubS, A, SubA, E, R>(
    reducer: R,
    state: fn(&mut S) -> &mut SubS,
    extract: fn(A) -> Option<SubA>,
    embed: fn(SubA) -> A,
) -> PulledBackReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    PulledBackReducer {
        reducer,
        state,
        extract,
        embed,
        _phantom: std::marker::PhantomData,
    }
}

/// A slice reducer lifted into a parent state and action type.
///
/// Created by [`pullback`].
pub struct PulledBackReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    state: fn(&mut S) -> &mut SubS,
    extract: fn(A) -> Option<SubA>,
    embed: fn(SubA) -> A,
    _phantom: std::marker::PhantomData<fn() -> E>,
}

impl<S, SubS, A, SubA, E, R> Clone for PulledBackReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            state: self.state,
            extract: self.extract,
            embed: self.embed,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S, SubS, A, SubA, E, R> Reducer for PulledBackReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
    A: Send + 'static,
    SubA: Send + 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(sub_action) = (self.extract)(action) else {
            return SmallVec::new();
        };

        let embed = self.embed;
        self.reducer
            .reduce((self.state)(state), sub_action, env)
            .into_iter()
            .map(|effect| effect.map(embed))
            .collect()
    }
}
