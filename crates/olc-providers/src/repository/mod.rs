//! Work Item Repository Adapters

pub mod rest;

pub use rest::RestWorkItemRepository;
