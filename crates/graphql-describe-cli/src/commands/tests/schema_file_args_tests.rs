use crate::commands::CommandEnum;
use crate::commands::SchemaFileArgs;
use crate::Cli;
use clap::Parser;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("graphql-describe")
        .join("tests")
        .join("fixtures")
}

fn file_args(file_or_dir_paths: Vec<PathBuf>, exts: &[&str]) -> SchemaFileArgs {
    SchemaFileArgs {
        graphql_file_exts: exts.iter().map(|ext| ext.to_string()).collect(),
        file_or_dir_paths,
    }
}

#[test]
fn directory_scan_filters_by_extension() -> anyhow::Result<()> {
    let schema_files = file_args(vec![fixtures_dir()], &["graphql"]).collect_files()?;

    assert_eq!(schema_files.file_paths.len(), 8);
    assert_eq!(schema_files.num_skipped_files, 1);
    assert!(schema_files.file_paths.iter().all(|path| {
        path.extension().is_some_and(|ext| ext == "graphql")
    }));
    Ok(())
}

#[test]
fn extensions_may_have_leading_dot() -> anyhow::Result<()> {
    let schema_files = file_args(vec![fixtures_dir()], &[".json"]).collect_files()?;

    assert_eq!(schema_files.file_paths.len(), 1);
    assert!(schema_files.file_paths[0].ends_with("introspection.json"));
    Ok(())
}

/// Tests that a single explicit file is loaded even when its extension is not
/// one of the GraphQL extensions.
#[test]
fn single_file_ignores_extension_filter() -> anyhow::Result<()> {
    let schema_files = file_args(
        vec![fixtures_dir().join("introspection.json")],
        &["graphql"],
    ).collect_files()?;

    assert_eq!(schema_files.file_paths.len(), 1);
    assert_eq!(schema_files.num_skipped_files, 0);

    let model = schema_files.describe()?;
    assert!(model.get("User").is_some());
    Ok(())
}

#[test]
fn fragment_files_are_described_together() -> anyhow::Result<()> {
    let schema_files = file_args(
        vec![fixtures_dir().join("student.graphql"), fixtures_dir().join("school.graphql")],
        &["graphql"],
    ).collect_files()?;

    let model = schema_files.describe()?;
    assert_eq!(model["Query"].fields.len(), 2);
    Ok(())
}

#[test]
fn no_matching_files_is_an_error() {
    let result = file_args(vec![fixtures_dir()], &["proto"]).collect_files();

    assert!(result.is_err());
}

#[test]
fn describe_subcommand_parses() {
    let cli = Cli::try_parse_from([
        "graphql-describe",
        "-v",
        "describe",
        "--compact",
        "--graphql-file-exts",
        "graphql,gql",
        "schema.graphql",
    ]).expect("arguments should parse");

    assert!(cli.verbose);
    assert!(matches!(cli.cmd, Some(CommandEnum::Describe(_))));
}
