//! Registry implementations for fetching upstream tags

pub mod docker_hub;

pub use docker_hub::DockerHubRegistry;
