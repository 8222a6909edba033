pub mod client;
pub mod create;
pub mod meta;
pub mod run;
