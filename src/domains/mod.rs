pub mod agent;
pub mod message;
