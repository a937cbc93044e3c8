pub mod config;

pub use config::AwsClientConfig;
