//! AWS-oriented adapters and handlers for the message board.
//!
//! This crate owns runtime integration details (Lambda handlers, the DynamoDB
//! table adapter, and configuration loading) on top of the contract defined in
//! `message_board_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
