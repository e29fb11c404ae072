mod schema_file_args_tests;
