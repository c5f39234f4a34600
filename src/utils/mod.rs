pub mod flexible;
pub mod secret;
