use crate::commands::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct DescribeCmd {
    #[arg(
        help="Print the model as single-line JSON instead of pretty-printing it.",
        long,
    )]
    compact: bool,

    #[command(flatten)]
    input: SchemaFileArgs,
}
impl DescribeCmd {
    fn describe_to_json(&self) -> anyhow::Result<String> {
        let model = self.input.collect_files()?.describe()?;
        log::debug!("Serializing {} type records.", model.len());
        let json =
            if self.compact {
                serde_json::to_string(&model)?
            } else {
                serde_json::to_string_pretty(&model)?
            };
        Ok(json)
    }
}

#[inherent::inherent]
impl RunnableCommand for DescribeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.describe_to_json() {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(err) => CommandResult::failure("Unable to describe schema", &err),
        }
    }
}
