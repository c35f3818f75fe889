pub mod framework;
pub mod moniker;
pub mod platform;
pub mod publish;
