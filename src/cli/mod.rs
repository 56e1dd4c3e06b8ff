//! Command handlers for the `cogsamples` binary.

mod invoke;
mod list;
mod run;

pub(crate) use invoke::cmd_invoke;
pub(crate) use list::cmd_list;
pub(crate) use run::cmd_run;
