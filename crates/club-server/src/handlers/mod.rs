pub mod contact;
pub mod featured;
pub mod login;
pub mod members;
pub mod news;
pub mod public;
pub mod visitors;
