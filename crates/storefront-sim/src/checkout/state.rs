//! [`ActorState`] implementation for [`Checkout`].

use super::{CheckoutError, PreconditionFailure};
use crate::clients::{CartClient, SessionClient};
use crate::model::{cart_total, OrderId, OrderReceipt, OrderSnapshot, PaymentMethod};
use actor_framework::ActorState;
use async_trait::async_trait;
use tracing::{info, warn};

/// Where the customer is in the checkout flow.
///
/// A placed order is not a state of its own: `Confirm` hands back an [`OrderReceipt`] and
/// the machine is already back at `Idle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CheckoutState {
    #[default]
    Idle,
    PaymentSelected(PaymentMethod),
    AwaitingConfirmation(OrderSnapshot),
}

impl CheckoutState {
    /// The selected payment method, whether or not confirmation is pending.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        match self {
            CheckoutState::Idle => None,
            CheckoutState::PaymentSelected(method) => Some(*method),
            CheckoutState::AwaitingConfirmation(snapshot) => Some(snapshot.payment_method),
        }
    }
}

#[derive(Debug, Default)]
pub struct Checkout {
    state: CheckoutState,
    orders_placed: u32,
}

#[derive(Debug)]
pub enum CheckoutCommand {
    SelectPayment(PaymentMethod),
    RequestConfirmation,
    Confirm,
    Cancel,
    Status,
}

#[derive(Debug, Clone)]
pub enum CheckoutReply {
    State(CheckoutState),
    Placed(OrderReceipt),
}

#[async_trait]
impl ActorState for Checkout {
    type Command = CheckoutCommand;
    type Reply = CheckoutReply;
    type Context = (SessionClient, CartClient);
    type Error = CheckoutError;

    async fn handle(
        &mut self,
        command: CheckoutCommand,
        ctx: &(SessionClient, CartClient),
    ) -> Result<CheckoutReply, CheckoutError> {
        let (session, cart) = ctx;
        match command {
            CheckoutCommand::SelectPayment(method) => {
                if let CheckoutState::AwaitingConfirmation(_) = self.state {
                    return Err(PreconditionFailure::ConfirmationPending.into());
                }
                self.state = CheckoutState::PaymentSelected(method);
                info!(%method, "Payment method selected");
                Ok(CheckoutReply::State(self.state.clone()))
            }
            CheckoutCommand::RequestConfirmation => {
                // The session check comes first, whatever else is missing
                let user = session
                    .current()
                    .await?
                    .ok_or(PreconditionFailure::NoActiveSession)?;
                let payment_method = match &self.state {
                    CheckoutState::Idle => return Err(PreconditionFailure::NoPaymentMethod.into()),
                    CheckoutState::PaymentSelected(method) => *method,
                    CheckoutState::AwaitingConfirmation(_) => {
                        return Err(PreconditionFailure::ConfirmationPending.into())
                    }
                };
                let items = cart.items().await?;
                let total = cart_total(&items);

                info!(user_id = %user.id, items = items.len(), %total, "Awaiting confirmation");
                self.state = CheckoutState::AwaitingConfirmation(OrderSnapshot {
                    user,
                    payment_method,
                    items,
                    total,
                });
                Ok(CheckoutReply::State(self.state.clone()))
            }
            CheckoutCommand::Confirm => {
                let snapshot = match &self.state {
                    CheckoutState::AwaitingConfirmation(snapshot) => snapshot.clone(),
                    _ => return Err(PreconditionFailure::NothingToConfirm.into()),
                };
                // The order belongs to whoever requested it, and they must still be logged in
                match session.current().await? {
                    None => return Err(PreconditionFailure::NoActiveSession.into()),
                    Some(user) if user.id != snapshot.user.id => {
                        warn!(
                            requested_by = %snapshot.user.id,
                            current = %user.id,
                            "Session changed before confirmation"
                        );
                        return Err(PreconditionFailure::SessionChanged.into());
                    }
                    Some(_) => {}
                }
                cart.clear().await?;

                self.orders_placed += 1;
                self.state = CheckoutState::Idle;
                let receipt = OrderReceipt {
                    order_id: OrderId(self.orders_placed),
                    user: snapshot.user,
                    payment_method: snapshot.payment_method,
                    item_count: snapshot.items.len(),
                    total: snapshot.total,
                };
                info!(order_id = %receipt.order_id, total = %receipt.total, "Order placed");
                Ok(CheckoutReply::Placed(receipt))
            }
            CheckoutCommand::Cancel => {
                if !matches!(self.state, CheckoutState::AwaitingConfirmation(_)) {
                    return Err(PreconditionFailure::NothingToConfirm.into());
                }
                self.state = CheckoutState::Idle;
                info!("Order cancelled");
                Ok(CheckoutReply::State(self.state.clone()))
            }
            CheckoutCommand::Status => Ok(CheckoutReply::State(self.state.clone())),
        }
    }
}
