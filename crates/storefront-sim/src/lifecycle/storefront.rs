use crate::cart_actor;
use crate::catalog::{self, CatalogSource};
use crate::checkout::{self, CheckoutState};
use crate::clients::{CartClient, CatalogClient, CheckoutClient, SessionClient, UserClient};
use crate::error::StorefrontError;
use crate::model::{
    cart_total, OrderReceipt, OrderSnapshot, Password, PaymentMethod, Product, ProductId, User,
    UserCreate, UserId,
};
use crate::session;
use crate::user_actor;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// One thing a customer can do. Each action touches exactly one component, except
/// `AddToCart`, which looks the product up in the catalog before adding it.
#[derive(Debug, Clone)]
pub enum Action {
    LoadCatalog,
    ViewCatalog,
    Search(String),
    ResetCatalog,
    Register(UserCreate),
    Login { email: String, password: Password },
    Logout,
    AddToCart(ProductId),
    ClearCart,
    ViewCart,
    SelectPayment(PaymentMethod),
    RequestConfirmation,
    ConfirmOrder,
    CancelOrder,
}

/// What the cart view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub items: Vec<Product>,
    pub total: Decimal,
    pub payment_method: Option<PaymentMethod>,
    pub user: Option<User>,
}

/// The successful result of an [`Action`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    CatalogLoaded(Vec<Product>),
    Products(Vec<Product>),
    SearchResults(Vec<Product>),
    Registered(UserId),
    LoggedIn(User),
    LoggedOut(Option<User>),
    AddedToCart { product: Product, cart_size: usize },
    CartCleared(usize),
    Cart(CartView),
    PaymentSelected(PaymentMethod),
    AwaitingConfirmation(OrderSnapshot),
    OrderPlaced(OrderReceipt),
    OrderCancelled,
}

impl Outcome {
    /// The one-line message a customer sees, if this outcome has one.
    pub fn notice(&self) -> Option<String> {
        match self {
            Outcome::CatalogLoaded(products) => Some(format!("Loaded {} products", products.len())),
            Outcome::SearchResults(products) if products.is_empty() => {
                Some("No Products Found: These products are not available".to_string())
            }
            Outcome::Registered(_) => Some("You have successfully signed up!".to_string()),
            Outcome::LoggedIn(_) => Some("You are logged in successfully!".to_string()),
            Outcome::LoggedOut(Some(_)) => Some("You have been logged out".to_string()),
            Outcome::LoggedOut(None) => Some("Nobody is logged in".to_string()),
            Outcome::AddedToCart { .. } => Some("Item added to cart!".to_string()),
            Outcome::CartCleared(_) => Some("Cart cleared!".to_string()),
            Outcome::PaymentSelected(method) => Some(format!("Payment method: {method}")),
            Outcome::OrderPlaced(_) => Some("Your order has been placed!".to_string()),
            Outcome::OrderCancelled => Some("Order cancelled".to_string()),
            _ => None,
        }
    }
}

/// The running storefront: every actor, started and wired.
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::start(Arc::new(StaticCatalogSource::new(products)), 32);
/// storefront.dispatch(Action::LoadCatalog).await?;
/// storefront.dispatch(Action::AddToCart(ProductId(1))).await?;
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    pub catalog: CatalogClient,
    /// Only the session talks to the user directory; this handle is held for shutdown.
    users: UserClient,
    pub session: SessionClient,
    pub cart: CartClient,
    pub checkout: CheckoutClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Creates every actor and spawns it with its dependencies injected.
    ///
    /// The catalog is not loaded yet; dispatch [`Action::LoadCatalog`] for that.
    pub fn start(source: Arc<dyn CatalogSource>, buffer_size: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (user_actor, users) = user_actor::new(buffer_size);
        let (cart_actor, cart) = cart_actor::new(buffer_size);
        let (catalog_actor, catalog) = catalog::new(buffer_size);
        let (session_actor, session) = session::new(buffer_size);
        let (checkout_actor, checkout) = checkout::new(buffer_size);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(cart_actor.run()),
            tokio::spawn(catalog_actor.run(source)),
            tokio::spawn(session_actor.run(users.clone())),
            tokio::spawn(checkout_actor.run((session.clone(), cart.clone()))),
        ];
        info!(actors = handles.len(), "Storefront started");

        Self {
            catalog,
            users,
            session,
            cart,
            checkout,
            handles,
        }
    }

    /// Applies one action and reports its outcome.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, action: Action) -> Result<Outcome, StorefrontError> {
        debug!("Dispatching");
        let outcome = match action {
            Action::LoadCatalog => Outcome::CatalogLoaded(self.catalog.load().await?),
            Action::ViewCatalog => Outcome::Products(self.catalog.display().await?),
            Action::Search(query) => Outcome::SearchResults(self.catalog.filter(&query).await?),
            Action::ResetCatalog => Outcome::Products(self.catalog.reset().await?),
            Action::Register(params) => Outcome::Registered(self.session.register(params).await?),
            Action::Login { email, password } => {
                Outcome::LoggedIn(self.session.login(&email, password.expose()).await?)
            }
            Action::Logout => Outcome::LoggedOut(self.session.logout().await?),
            Action::AddToCart(id) => {
                let product = self.catalog.find(id).await?;
                self.cart.add(product.clone()).await?;
                let cart_size = self.cart.size().await?;
                Outcome::AddedToCart { product, cart_size }
            }
            Action::ClearCart => Outcome::CartCleared(self.cart.clear().await?),
            Action::ViewCart => Outcome::Cart(self.cart_view().await?),
            Action::SelectPayment(method) => {
                self.checkout.select_payment(method).await?;
                Outcome::PaymentSelected(method)
            }
            Action::RequestConfirmation => {
                Outcome::AwaitingConfirmation(self.checkout.request_confirmation().await?)
            }
            Action::ConfirmOrder => Outcome::OrderPlaced(self.checkout.confirm().await?),
            Action::CancelOrder => {
                self.checkout.cancel().await?;
                Outcome::OrderCancelled
            }
        };
        Ok(outcome)
    }

    async fn cart_view(&self) -> Result<CartView, StorefrontError> {
        let items = self.cart.items().await?;
        let total = cart_total(&items);
        let payment_method = self.checkout.status().await?.payment_method();
        let user = self.session.current().await?;
        Ok(CartView {
            items,
            total,
            payment_method,
            user,
        })
    }

    /// The checkout state machine's current state.
    pub async fn checkout_state(&self) -> Result<CheckoutState, StorefrontError> {
        Ok(self.checkout.status().await?)
    }

    /// Gracefully shuts down every actor.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.checkout);
        drop(self.session);
        drop(self.cart);
        drop(self.users);
        drop(self.catalog);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
