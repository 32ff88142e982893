mod mock;
mod repository;

pub use mock::MockTodoRepository;
pub use repository::TodoRepository;
