pub mod cli_builder;
