//! # Checkout Client
//!
//! High-level API for the checkout actor. Wraps a `StateClient<Checkout>`.
use crate::checkout::{Checkout, CheckoutCommand, CheckoutError, CheckoutReply, CheckoutState};
use crate::model::{OrderReceipt, OrderSnapshot, PaymentMethod};
use actor_framework::{FrameworkError, StateClient};
use tracing::{debug, instrument};

/// Client for interacting with the checkout actor.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: StateClient<Checkout>,
}

impl CheckoutClient {
    pub fn new(inner: StateClient<Checkout>) -> Self {
        Self { inner }
    }

    fn map_error(e: FrameworkError) -> CheckoutError {
        e.downcast_entity::<CheckoutError>()
            .unwrap_or_else(|e| CheckoutError::ActorCommunication(e.to_string()))
    }

    async fn transition(&self, command: CheckoutCommand) -> Result<CheckoutState, CheckoutError> {
        match self.inner.send(command).await.map_err(Self::map_error)? {
            CheckoutReply::State(state) => Ok(state),
            _ => unreachable!("Invalid reply type"),
        }
    }

    #[instrument(skip(self))]
    pub async fn select_payment(&self, method: PaymentMethod) -> Result<(), CheckoutError> {
        debug!("Sending request");
        self.transition(CheckoutCommand::SelectPayment(method))
            .await
            .map(|_| ())
    }

    /// Captures user, payment method and cart contents for confirmation.
    #[instrument(skip(self))]
    pub async fn request_confirmation(&self) -> Result<OrderSnapshot, CheckoutError> {
        debug!("Sending request");
        match self.transition(CheckoutCommand::RequestConfirmation).await? {
            CheckoutState::AwaitingConfirmation(snapshot) => Ok(snapshot),
            _ => unreachable!("Invalid reply type"),
        }
    }

    /// Places the pending order and empties the cart. The user who requested
    /// confirmation must still be the one logged in.
    #[instrument(skip(self))]
    pub async fn confirm(&self) -> Result<OrderReceipt, CheckoutError> {
        debug!("Sending request");
        match self
            .inner
            .send(CheckoutCommand::Confirm)
            .await
            .map_err(Self::map_error)?
        {
            CheckoutReply::Placed(receipt) => Ok(receipt),
            _ => unreachable!("Invalid reply type"),
        }
    }

    /// Drops the pending order. The cart is left alone.
    #[instrument(skip(self))]
    pub async fn cancel(&self) -> Result<(), CheckoutError> {
        debug!("Sending request");
        self.transition(CheckoutCommand::Cancel).await.map(|_| ())
    }

    pub async fn status(&self) -> Result<CheckoutState, CheckoutError> {
        self.transition(CheckoutCommand::Status).await
    }
}
