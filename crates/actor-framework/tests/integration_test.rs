use actor_framework::{ActorEntity, ActorState, FrameworkError, ResourceActor, StateActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    title: String,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TicketError {
    #[error("title must not be empty")]
    EmptyTitle,
}

impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.title.is_empty() {
            return Err(TicketError::EmptyTitle);
        }
        Ok(Self {
            id,
            title: params.title,
        })
    }
}

// --- Test State ---

#[derive(Debug, Default)]
struct Door {
    open: bool,
}

#[derive(Debug)]
enum DoorCommand {
    Open,
    Close,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum DoorError {
    #[error("door is already {0}")]
    AlreadyThere(&'static str),
}

#[async_trait]
impl ActorState for Door {
    type Command = DoorCommand;
    type Reply = bool;
    type Context = ();
    type Error = DoorError;

    async fn handle(&mut self, command: DoorCommand, _ctx: &()) -> Result<bool, DoorError> {
        match (command, self.open) {
            (DoorCommand::Open, true) => Err(DoorError::AlreadyThere("open")),
            (DoorCommand::Close, false) => Err(DoorError::AlreadyThere("closed")),
            (DoorCommand::Open, false) => {
                self.open = true;
                Ok(true)
            }
            (DoorCommand::Close, true) => {
                self.open = false;
                Ok(false)
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_collection_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. Create keeps creation order
    for title in ["first", "second", "third"] {
        client
            .create(TicketCreate {
                title: title.into(),
            })
            .await
            .unwrap();
    }
    let titles: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);

    // 2. Get
    let ticket = client.get(2).await.unwrap().unwrap();
    assert_eq!(ticket.title, "second");
    assert!(client.get(99).await.unwrap().is_none());

    // 3. Rejected create surfaces the entity error and does not consume an id
    let err = client
        .create(TicketCreate {
            title: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<TicketError>().unwrap(),
        TicketError::EmptyTitle
    );
    assert_eq!(client.len().await.unwrap(), 3);

    // 4. Clear reports removed count; ids keep growing afterwards
    assert_eq!(client.clear().await.unwrap(), 3);
    assert_eq!(client.len().await.unwrap(), 0);
    let id = client
        .create(TicketCreate {
            title: "fourth".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 4);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_state_actor_transitions() {
    let (actor, client) = StateActor::new(Door::default(), 4);
    let handle = tokio::spawn(actor.run(()));

    assert!(client.send(DoorCommand::Open).await.unwrap());

    let err = client.send(DoorCommand::Open).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<DoorError>().unwrap(),
        DoorError::AlreadyThere("open")
    );

    // Failed command left the door open
    assert!(!client.send(DoorCommand::Close).await.unwrap());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = StateActor::new(Door::default(), 4);
    drop(actor);

    let result = client.send(DoorCommand::Open).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
