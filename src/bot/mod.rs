pub mod cache;
pub mod dispatcher;
pub mod handler;
pub mod replies;
pub mod router;
pub mod teams;

pub use cache::SportsCache;
pub use dispatcher::Dispatcher;
pub use handler::CommandHandler;
