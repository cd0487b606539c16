use actor_framework::mock::{MockClient, MockStateClient};
use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use storefront_sim::checkout::{CheckoutError, CheckoutState, PreconditionFailure};
use storefront_sim::clients::{CartClient, SessionClient};
use storefront_sim::model::{
    CartLine, CartLineId, Password, PaymentMethod, Product, User, UserId,
};
use storefront_sim::session::{Session, SessionReply};
use storefront_sim::{cart_actor::CartError, checkout};

fn alice() -> User {
    User {
        id: UserId(1),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        phone: String::new(),
        password: Password::new("p"),
    }
}

fn bob() -> User {
    User {
        id: UserId(2),
        name: "Bob".into(),
        email: "bob@example.com".into(),
        phone: String::new(),
        password: Password::new("q"),
    }
}

fn line(id: u32, product: Product) -> CartLine {
    CartLine {
        id: CartLineId(id),
        product,
    }
}

/// Real checkout actor; session and cart are mocked.
///
/// Every command the checkout actor sends to its dependencies must be scripted on the
/// mocks in order, so these tests also pin down which calls each step makes.
#[tokio::test]
async fn test_checkout_with_mocked_dependencies() {
    let mut session_mock = MockStateClient::<Session>::new();
    let mut cart_mock = MockClient::<CartLine>::new();

    let shoe = Product::new(1, "Red Shoe", Decimal::new(10, 0), "");
    let hat = Product::new(2, "Blue Hat", Decimal::new(5, 0), "");

    // request_confirmation: current user, then cart contents
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(alice())));
    cart_mock
        .expect_list()
        .return_ok(vec![line(1, shoe.clone()), line(2, hat.clone())]);
    // confirm: same user still logged in, then clear the cart
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(alice())));
    cart_mock.expect_clear().return_ok(2);

    let session = SessionClient::new(session_mock.client());
    let cart = CartClient::new(cart_mock.client());

    let (actor, client) = checkout::new(8);
    let handle = tokio::spawn(actor.run((session, cart)));

    client.select_payment(PaymentMethod::PayPal).await.unwrap();
    let snapshot = client.request_confirmation().await.unwrap();
    assert_eq!(snapshot.user, alice());
    assert_eq!(snapshot.items, vec![shoe, hat]);
    assert_eq!(snapshot.total, Decimal::new(15, 0));

    let receipt = client.confirm().await.unwrap();
    assert_eq!(receipt.order_id.to_string(), "order_1");
    assert_eq!(receipt.item_count, 2);
    assert_eq!(receipt.payment_method, PaymentMethod::PayPal);
    assert_eq!(client.status().await.unwrap(), CheckoutState::Idle);

    session_mock.verify();
    cart_mock.verify();

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_session_is_checked_before_payment() {
    let mut session_mock = MockStateClient::<Session>::new();
    let cart_mock = MockClient::<CartLine>::new();
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(None));

    let (actor, client) = checkout::new(8);
    tokio::spawn(actor.run((
        SessionClient::new(session_mock.client()),
        CartClient::new(cart_mock.client()),
    )));

    // Nothing selected either, but the missing session is what gets reported
    assert_eq!(
        client.request_confirmation().await,
        Err(CheckoutError::Precondition(PreconditionFailure::NoActiveSession))
    );
    assert_eq!(client.status().await.unwrap(), CheckoutState::Idle);
    session_mock.verify();
}

#[tokio::test]
async fn test_payment_required_once_logged_in() {
    let mut session_mock = MockStateClient::<Session>::new();
    let cart_mock = MockClient::<CartLine>::new();
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(alice())));

    let (actor, client) = checkout::new(8);
    tokio::spawn(actor.run((
        SessionClient::new(session_mock.client()),
        CartClient::new(cart_mock.client()),
    )));

    assert_eq!(
        client.request_confirmation().await,
        Err(CheckoutError::Precondition(PreconditionFailure::NoPaymentMethod))
    );
}

#[tokio::test]
async fn test_failed_cart_clear_keeps_order_pending() {
    let mut session_mock = MockStateClient::<Session>::new();
    let mut cart_mock = MockClient::<CartLine>::new();
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(alice())));
    cart_mock.expect_list().return_ok(vec![]);
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(alice())));
    cart_mock.expect_clear().return_err(FrameworkError::ActorClosed);

    let (actor, client) = checkout::new(8);
    tokio::spawn(actor.run((
        SessionClient::new(session_mock.client()),
        CartClient::new(cart_mock.client()),
    )));

    client.select_payment(PaymentMethod::CreditCard).await.unwrap();
    client.request_confirmation().await.unwrap();

    let result = client.confirm().await;
    assert!(matches!(
        result,
        Err(CheckoutError::Cart(CartError::ActorCommunication(_)))
    ));
    assert!(matches!(
        client.status().await.unwrap(),
        CheckoutState::AwaitingConfirmation(_)
    ));
    cart_mock.verify();
}

#[tokio::test]
async fn test_out_of_order_steps_are_rejected() {
    let mut session_mock = MockStateClient::<Session>::new();
    let mut cart_mock = MockClient::<CartLine>::new();
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(alice())));
    cart_mock.expect_list().return_ok(vec![]);

    let (actor, client) = checkout::new(8);
    tokio::spawn(actor.run((
        SessionClient::new(session_mock.client()),
        CartClient::new(cart_mock.client()),
    )));

    let nothing = Err(CheckoutError::Precondition(PreconditionFailure::NothingToConfirm));
    assert_eq!(client.confirm().await.map(|_| ()), nothing);
    assert_eq!(client.cancel().await, nothing);

    client.select_payment(PaymentMethod::CreditCard).await.unwrap();
    client.request_confirmation().await.unwrap();

    let pending = Err(CheckoutError::Precondition(PreconditionFailure::ConfirmationPending));
    assert_eq!(client.select_payment(PaymentMethod::PayPal).await, pending);

    // Cancel returns to Idle without touching the cart
    client.cancel().await.unwrap();
    assert_eq!(client.status().await.unwrap(), CheckoutState::Idle);
    cart_mock.verify();
}

#[tokio::test]
async fn test_confirm_after_logout_is_rejected() {
    let mut session_mock = MockStateClient::<Session>::new();
    let mut cart_mock = MockClient::<CartLine>::new();
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(alice())));
    cart_mock.expect_list().return_ok(vec![line(1, Product::new(
        1,
        "Red Shoe",
        Decimal::new(10, 0),
        "",
    ))]);
    // Logged out between review and confirmation
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(None));

    let (actor, client) = checkout::new(8);
    tokio::spawn(actor.run((
        SessionClient::new(session_mock.client()),
        CartClient::new(cart_mock.client()),
    )));

    client.select_payment(PaymentMethod::PayPal).await.unwrap();
    client.request_confirmation().await.unwrap();

    assert_eq!(
        client.confirm().await.map(|_| ()),
        Err(CheckoutError::Precondition(PreconditionFailure::NoActiveSession))
    );
    assert!(matches!(
        client.status().await.unwrap(),
        CheckoutState::AwaitingConfirmation(_)
    ));

    // No clear was scripted: the cart was never touched
    session_mock.verify();
    cart_mock.verify();
}

#[tokio::test]
async fn test_confirm_by_another_user_is_rejected() {
    let mut session_mock = MockStateClient::<Session>::new();
    let mut cart_mock = MockClient::<CartLine>::new();
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(alice())));
    cart_mock.expect_list().return_ok(vec![]);
    session_mock
        .expect_command()
        .return_ok(SessionReply::Current(Some(bob())));

    let (actor, client) = checkout::new(8);
    tokio::spawn(actor.run((
        SessionClient::new(session_mock.client()),
        CartClient::new(cart_mock.client()),
    )));

    client.select_payment(PaymentMethod::CreditCard).await.unwrap();
    let snapshot = client.request_confirmation().await.unwrap();
    assert_eq!(snapshot.user.id, UserId(1));

    assert_eq!(
        client.confirm().await.map(|_| ()),
        Err(CheckoutError::Precondition(PreconditionFailure::SessionChanged))
    );
    assert_eq!(
        client.status().await.unwrap(),
        CheckoutState::AwaitingConfirmation(snapshot)
    );
    session_mock.verify();
    cart_mock.verify();
}

#[tokio::test]
async fn test_second_confirmation_request_while_pending() {
    let mut session_mock = MockStateClient::<Session>::new();
    let mut cart_mock = MockClient::<CartLine>::new();
    for _ in 0..2 {
        session_mock
            .expect_command()
            .return_ok(SessionReply::Current(Some(alice())));
    }
    cart_mock.expect_list().return_ok(vec![]);

    let (actor, client) = checkout::new(8);
    tokio::spawn(actor.run((
        SessionClient::new(session_mock.client()),
        CartClient::new(cart_mock.client()),
    )));

    client.select_payment(PaymentMethod::PayPal).await.unwrap();
    let first = client.request_confirmation().await.unwrap();

    assert_eq!(
        client.request_confirmation().await,
        Err(CheckoutError::Precondition(PreconditionFailure::ConfirmationPending))
    );
    assert_eq!(
        client.status().await.unwrap(),
        CheckoutState::AwaitingConfirmation(first)
    );
    session_mock.verify();
    cart_mock.verify();
}
