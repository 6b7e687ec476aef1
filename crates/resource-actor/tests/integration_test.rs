use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleUser {
    id: u32,
    name: String,
    is_admin: bool,
}

#[derive(Debug)]
struct SimpleUserCreate {
    name: String,
}

#[derive(Debug)]
enum UserPatch {
    Rename(String),
    PromoteToAdmin,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum SimpleUserError {
    #[error("name taken: {0}")]
    NameTaken(String),
    #[error("name must not be empty")]
    EmptyName,
    #[error("admins cannot be deleted")]
    AdminDelete,
}

#[async_trait]
impl ActorEntity for SimpleUser {
    type Id = u32;
    type Create = SimpleUserCreate;
    type Replace = SimpleUserCreate;
    type Patch = Vec<UserPatch>;
    type Context = ();
    type Error = SimpleUserError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    fn next_id(store: &[Self]) -> Result<u32, Self::Error> {
        Ok(store.iter().map(|user| user.id).max().unwrap_or(0) + 1)
    }

    fn from_create_params(params: SimpleUserCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id: 0,
            name: params.name,
            is_admin: false,
        })
    }

    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(SimpleUserError::EmptyName);
        }
        Ok(())
    }

    async fn before_create(
        params: &SimpleUserCreate,
        store: &[Self],
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        if store.iter().any(|user| user.name == params.name) {
            return Err(SimpleUserError::NameTaken(params.name.clone()));
        }
        Ok(())
    }

    async fn on_replace(&mut self, params: SimpleUserCreate, _ctx: &()) -> Result<(), Self::Error> {
        self.name = params.name;
        Ok(())
    }

    async fn on_patch(&mut self, patch: Vec<UserPatch>, _ctx: &()) -> Result<(), Self::Error> {
        for op in patch {
            match op {
                UserPatch::Rename(name) => self.name = name,
                UserPatch::PromoteToAdmin => self.is_admin = true,
            }
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.is_admin {
            return Err(SimpleUserError::AdminDelete);
        }
        Ok(())
    }
}

fn create(name: &str) -> SimpleUserCreate {
    SimpleUserCreate {
        name: name.to_string(),
    }
}

fn entity_error(err: FrameworkError) -> SimpleUserError {
    match err {
        FrameworkError::EntityError(source) => *source
            .downcast::<SimpleUserError>()
            .expect("entity error should carry a SimpleUserError"),
        other => panic!("expected an entity error, got {other:?}"),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let alice: SimpleUser = client.create(create("Alice")).await.unwrap();
    assert_eq!(alice.id, 1); // First ID should be 1

    // 2. Patch
    let patched = client
        .patch(alice.id, vec![UserPatch::PromoteToAdmin])
        .await
        .unwrap();
    assert!(patched.is_admin);
    assert_eq!(client.get(alice.id).await.unwrap(), patched);

    // 3. Replace
    let replaced = client.replace(alice.id, create("Bob")).await.unwrap();
    assert_eq!(replaced.name, "Bob");
    assert_eq!(replaced.id, 1);

    // 4. Delete is refused by the hook, then allowed for a plain user
    let refused = client.delete(alice.id).await.unwrap_err();
    assert_eq!(entity_error(refused), SimpleUserError::AdminDelete);

    let carol = client.create(create("Carol")).await.unwrap();
    client.delete(carol.id).await.unwrap();
    assert!(matches!(
        client.get(carol.id).await,
        Err(FrameworkError::NotFound(_))
    ));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_list_keeps_insertion_order_after_delete() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    for name in ["c", "a", "b"] {
        client.create(create(name)).await.unwrap();
    }
    client.delete(2).await.unwrap();

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.name)
        .collect();
    assert_eq!(names, vec!["c", "b"]);
}

#[tokio::test]
async fn test_ids_follow_current_maximum() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    for name in ["one", "two", "three"] {
        client.create(create(name)).await.unwrap();
    }

    // Deleting the maximum lowers the next id.
    client.delete(3).await.unwrap();
    assert_eq!(client.create(create("four")).await.unwrap().id, 3);

    // Deleting from the middle does not.
    client.delete(2).await.unwrap();
    assert_eq!(client.create(create("five")).await.unwrap().id, 4);
}

#[tokio::test]
async fn test_failed_patch_leaves_record_untouched() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    let user = client.create(create("Dora")).await.unwrap();

    // Promotion applies to the working copy, the empty name fails validation afterwards.
    let err = client
        .patch(
            user.id,
            vec![UserPatch::PromoteToAdmin, UserPatch::Rename(String::new())],
        )
        .await
        .unwrap_err();
    assert_eq!(entity_error(err), SimpleUserError::EmptyName);

    assert_eq!(client.get(user.id).await.unwrap(), user);
}

#[tokio::test]
async fn test_rejected_create_allocates_nothing() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create("Eve")).await.unwrap();
    let err = client.create(create("Eve")).await.unwrap_err();
    assert_eq!(entity_error(err), SimpleUserError::NameTaken("Eve".into()));

    assert_eq!(client.list().await.unwrap().len(), 1);
    assert_eq!(client.create(create("Frank")).await.unwrap().id, 2);
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    assert!(matches!(client.get(9).await, Err(FrameworkError::NotFound(id)) if id == "9"));
    assert!(matches!(
        client.replace(9, create("x")).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(
        client.patch(9, vec![]).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(
        client.delete(9).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_seeded_actor_serves_existing_records() {
    let seed = vec![
        SimpleUser {
            id: 4,
            name: "seeded".into(),
            is_admin: false,
        },
        SimpleUser {
            id: 2,
            name: "also seeded".into(),
            is_admin: false,
        },
    ];
    let (actor, client) = ResourceActor::with_records(10, seed.clone());
    tokio::spawn(actor.run(()));

    assert_eq!(client.list().await.unwrap(), seed);
    assert_eq!(client.create(create("new")).await.unwrap().id, 5);
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    drop(actor);

    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}
