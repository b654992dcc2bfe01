//! CLI commands for evalcheck

pub mod check;
pub mod criteria;
pub mod dispatch;
pub mod logic;
pub mod prompts;
