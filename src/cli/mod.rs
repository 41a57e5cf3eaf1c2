mod annotations;
mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
#[cfg(test)]
pub(crate) use args::TabArg;
pub(crate) use output::{format_json, format_plain};
