// Configuration file name
pub const CONFIG_FILENAME: &str = "tabledef.yaml";

// Environment variable consulted when no output file is configured
pub const OUTPUT_FILE_ENV: &str = "TABLEDEF_OUTPUT_FILE";
