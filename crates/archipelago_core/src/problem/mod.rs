pub mod activity;
pub mod courier;
pub mod location;
