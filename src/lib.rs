pub mod cli;
pub mod domain;
pub mod errors;
pub mod mailer;
pub mod prelude;
pub mod store;
