// Adapters layer: concrete implementations for the external systems the
// pipeline talks to (Bedrock model service, external fetch command, HTTP).

pub mod bedrock;
pub mod command;
pub mod http;

pub use bedrock::BedrockGenerator;
pub use command::CommandFetcher;
pub use http::HttpFetcher;
