//! Shopping cart slice.

use crate::AppEnvironment;
use composable_state_core::{SmallVec, effect::Effect, reducer::Reducer};
use serde::{Deserialize, Serialize};

/// A product in the cart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier; the same product may be added more than once
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price; unpriced items count as 0
    pub price: Option<f64>,
}

impl CartItem {
    /// Build a cart item
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Cart contents and running total
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Items in the order they were added
    pub items: Vec<CartItem>,
    /// Sum of prices
    pub total: f64,
}

/// Cart actions
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    /// Append an item and add its price
    AddItem(CartItem),
    /// Remove every item with this id, subtracting one unit's price
    RemoveItem(i64),
    /// Empty the cart
    ClearCart,
}

/// Reducer for the cart slice
#[derive(Clone, Copy, Debug, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CartAction::AddItem(item) => {
                state.total += item.price_or_zero();
                state.items.push(item);
            },
            CartAction::RemoveItem(id) => {
                // Only the first match's price comes off the total
                let price = state
                    .items
                    .iter()
                    .find(|item| item.id == id)
                    .map_or(0.0, CartItem::price_or_zero);
                state.items.retain(|item| item.id != id);
                state.total -= price;
            },
            CartAction::ClearCart => {
                state.items.clear();
                state.total = 0.0;
            },
        }

        SmallVec::new()
    }
}
