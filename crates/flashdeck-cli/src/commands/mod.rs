pub mod add;
pub mod ask;
pub mod exit;
pub mod export;
pub mod hardest;
pub mod import;
pub mod log;
pub mod remove;
pub mod reset;
