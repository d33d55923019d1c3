pub mod schedule;
pub mod session;

pub use session::SessionService;
