pub mod aggregates;
pub mod analytics;
pub mod announcement;
pub mod cache;
pub mod coach;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod drilldown;
pub mod error;
pub mod event;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod registration;
pub mod review;
pub mod season;
pub mod session;
pub mod sports;
pub mod staff;
pub mod store;
pub mod support;
pub mod tui;
pub mod types;
