pub mod handler;
pub mod messages;

pub use handler::run_session;
