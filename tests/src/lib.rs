//! End-to-end tests driving the services over the in-memory store.

mod accounts;
mod dashboards;
mod fixtures;
mod gallery;
mod search;
