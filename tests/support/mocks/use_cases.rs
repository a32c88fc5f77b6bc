use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use user_api::application::{
    ApplicationResult,
    dto::UserDto,
    error::ApplicationError,
    queries::users::{FindUserByIdUseCase, ListUserUseCase},
};

type ListResponder = Box<dyn Fn() -> ApplicationResult<Vec<UserDto>> + Send + Sync>;
type FindResponder = Box<dyn Fn(i64) -> ApplicationResult<UserDto> + Send + Sync>;

/// List use-case answering with a canned result and counting calls.
pub struct StubListUsers {
    respond: ListResponder,
    calls: AtomicUsize,
}

impl StubListUsers {
    pub fn returning(users: Vec<UserDto>) -> Self {
        Self {
            respond: Box::new(move || Ok(users.clone())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(make_error: impl Fn() -> ApplicationError + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(move || Err(make_error())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListUserUseCase for StubListUsers {
    async fn execute(&self) -> ApplicationResult<Vec<UserDto>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)()
    }
}

/// Find use-case answering through a closure and recording requested ids.
pub struct StubFindUserById {
    respond: FindResponder,
    requested: Mutex<Vec<i64>>,
}

impl StubFindUserById {
    pub fn with(respond: impl Fn(i64) -> ApplicationResult<UserDto> + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Knows exactly the given users; any other id fails with not-found.
    pub fn knowing(users: Vec<UserDto>) -> Self {
        Self::with(move |id| {
            users
                .iter()
                .find(|user| user.id == id)
                .cloned()
                .ok_or_else(|| ApplicationError::not_found(format!("user {id} not found")))
        })
    }

    pub fn requested(&self) -> Vec<i64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl FindUserByIdUseCase for StubFindUserById {
    async fn execute(&self, id: i64) -> ApplicationResult<UserDto> {
        self.requested.lock().unwrap().push(id);
        (self.respond)(id)
    }
}
