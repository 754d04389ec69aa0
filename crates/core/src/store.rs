//! App Store
//!
//! The single owner of storefront UI state. Views send [`Action`]s through
//! [`AppStore::dispatch`] and listeners are told about every new state.

use std::{fmt, num::NonZeroU32, sync::Arc};

use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::{
    cart::{Cart, CartEvent, CheckoutError, Order},
    catalog::Catalog,
    i18n::{Direction, Language},
    products::ProductId,
};

new_key_type! {
    /// Subscription Key
    pub struct SubscriptionKey;
}

/// Colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light scheme
    #[default]
    Light,

    /// Dark scheme
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Storefront UI state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Colour scheme
    pub theme: Theme,

    /// Display language
    pub language: Language,

    /// Shopping cart
    pub cart: Cart,

    /// Whether the cart drawer is open
    pub cart_open: bool,
}

impl AppState {
    /// Layout direction for the current language.
    pub fn direction(&self) -> Direction {
        self.language.direction()
    }
}

/// State transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch between light and dark
    ToggleTheme,

    /// Change the display language
    SetLanguage(Language),

    /// Add units of a catalog product and open the drawer
    AddToCart {
        /// Product to add
        product: ProductId,

        /// Units to add
        quantity: NonZeroU32,
    },

    /// Remove a product's line
    RemoveFromCart(ProductId),

    /// Adjust a line's quantity, clamped at one
    UpdateQuantity {
        /// Product whose line changes
        product: ProductId,

        /// Signed change
        delta: i64,
    },

    /// Empty the cart
    ClearCart,

    /// Open or close the cart drawer
    SetCartOpen(bool),
}

/// Errors raised by store actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The product is not in the catalog.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    /// Checkout failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

type Listener = Box<dyn FnMut(&AppState)>;

/// App Store
pub struct AppStore {
    catalog: Arc<Catalog>,
    state: AppState,
    listeners: SlotMap<SubscriptionKey, Listener>,
}

impl fmt::Debug for AppStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl AppStore {
    /// Create a store with an empty cart in the catalog's currency.
    pub fn new(catalog: Arc<Catalog>, language: Language) -> Self {
        let cart = Cart::new(catalog.currency());

        AppStore {
            catalog,
            state: AppState {
                theme: Theme::default(),
                language,
                cart,
                cart_open: false,
            },
            listeners: SlotMap::with_key(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Catalog the store sells from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Register a listener that runs after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriptionKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if the key was unknown.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    /// Apply an action and notify listeners.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] when adding a product that is
    /// not in the catalog. State is unchanged and listeners are not called.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        self.reduce(action)?;
        self.notify();

        Ok(())
    }

    /// Check out the cart and close the drawer.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Checkout`] when the cart is empty or its total
    /// cannot be priced. State is unchanged and listeners are not called.
    pub fn checkout(&mut self) -> Result<Order, StoreError> {
        let order = self.state.cart.checkout()?;

        self.state.cart_open = false;
        self.notify();

        Ok(order)
    }

    fn reduce(&mut self, action: Action) -> Result<(), StoreError> {
        let state = &mut self.state;

        match action {
            Action::ToggleTheme => state.theme = state.theme.toggled(),
            Action::SetLanguage(language) => state.language = language,
            Action::AddToCart { product, quantity } => {
                let product = self
                    .catalog
                    .get(product)
                    .ok_or(StoreError::ProductNotFound(product))?;

                match state.cart.add_quantity(product, quantity) {
                    CartEvent::OpenRequested { .. } => state.cart_open = true,
                }
            }
            Action::RemoveFromCart(product) => {
                state.cart.remove(product);
            }
            Action::UpdateQuantity { product, delta } => {
                state.cart.set_quantity_delta(product, delta);
            }
            Action::ClearCart => state.cart.clear(),
            Action::SetCartOpen(open) => state.cart_open = open,
        }

        Ok(())
    }

    fn notify(&mut self) {
        for listener in self.listeners.values_mut() {
            listener(&self.state);
        }
    }
}
