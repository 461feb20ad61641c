pub mod config;
pub mod logging;

pub mod dedup;
pub mod domain_filter;
pub mod host_check;
pub mod input;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod root_domain;
