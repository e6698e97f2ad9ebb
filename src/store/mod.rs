mod client;

pub use client::{StoreClient, StoreError};
