use anyhow::Context;
use graphql_describe::SchemaModel;
use graphql_describe::SchemaSource;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Input arguments shared by every command that loads a schema from disk.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files. A single explicit file is used regardless of its \
             extension (e.g. an introspection `.json` result).",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}
impl SchemaFileArgs {
    /// Find every schema file at or under the given paths.
    pub(crate) fn collect_files(&self) -> anyhow::Result<SchemaFiles> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan filesystem entries at/under {path:?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let ext = entry_path.extension().map(|s| s.to_string_lossy());
                if ext.is_some_and(|ext| graphql_file_exts.contains(&*ext)) {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    file_paths.push(std::fs::canonicalize(entry_path)?);
                } else {
                    log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                    num_skipped_files += 1;
                }
            }
        }

        // A single file path argument is presumed to be exactly the file the
        // user wants loaded, whatever its extension.
        if file_paths.is_empty()
            && let [first_arg_path] = self.file_or_dir_paths.as_slice()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path = std::fs::canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to load {canonicalized_first_arg_path:#?} even \
                though it doesn't match any of the --graphql-file-exts \
                ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(canonicalized_first_arg_path);
        }

        if file_paths.is_empty() {
            anyhow::bail!(
                "No GraphQL files found at/under {:?}",
                self.file_or_dir_paths,
            );
        }

        log::debug!("Found {} GraphQL files to load.", file_paths.len());
        Ok(SchemaFiles {
            file_paths,
            num_skipped_files,
        })
    }
}

#[derive(Debug)]
pub(crate) struct SchemaFiles {
    pub(crate) file_paths: Vec<PathBuf>,
    pub(crate) num_skipped_files: usize,
}
impl SchemaFiles {
    pub(crate) fn describe(&self) -> anyhow::Result<SchemaModel> {
        let source = SchemaSource::from_files(&self.file_paths)?;
        let model = graphql_describe::describe_schema(source)
            .with_context(|| format!(
                "Failed to describe the schema in {} file(s)",
                self.file_paths.len(),
            ))?;
        Ok(model)
    }
}
