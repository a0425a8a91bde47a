use std::path::PathBuf;

use envconfig::Envconfig;

/// Process settings read from the environment
#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    /// surface the cause of rejected requests in the response body
    #[envconfig(from = "CHARACTERS_DEBUG", default = "true")]
    pub debug: bool,

    /// URL the GraphQL Playground page sends its queries to
    #[envconfig(from = "CHARACTERS_ENDPOINT", default = "/graphql")]
    pub endpoint: String,

    /// JSON file replacing the bundled sample characters
    #[envconfig(from = "CHARACTERS_DATA_PATH")]
    pub data_path: Option<PathBuf>,
}
