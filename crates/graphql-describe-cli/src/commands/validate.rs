use crate::commands::SchemaFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    input: SchemaFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema_files = match self.input.collect_files() {
            Ok(schema_files) => schema_files,
            Err(err) => return CommandResult::failure("GraphQL validation errors", &err),
        };

        match schema_files.describe() {
            Ok(model) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Described {} type definitions.\n",
                    "  * Found {} directive definitions.\n",
                    "  * Schema block: {}.",
                ),
                output_utils::GREEN_CHECK,
                schema_files.file_paths.len(),
                schema_files.num_skipped_files,
                model.len(),
                model.directive_names().len(),
                if model.schema_definition().is_some() { "present" } else { "absent" },
            )),

            Err(err) => CommandResult::failure("Errors validating schema", &err),
        }
    }
}
