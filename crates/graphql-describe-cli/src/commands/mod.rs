mod describe;
mod schema_file_args;
mod validate;

use crate::Cli;
use crate::CommandResult;
use describe::DescribeCmd;
use schema_file_args::SchemaFileArgs;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-describe")]
pub(crate) enum CommandEnum {
    /// Print the flattened type model of a schema as JSON.
    Describe(Box<DescribeCmd>),

    /// Check that a schema can be described and summarize what it contains.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Describe(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
