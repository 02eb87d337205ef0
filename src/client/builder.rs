use crate::client::core::SimplificationClient;
use crate::config::ServiceConfig;
use crate::generator::ExpressionGenerator;
use crate::request::ApiRequestBuilder;
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use std::sync::Mutex;

/// Builder for creating clients with custom configuration.
///
/// Starts from [`ServiceConfig::default`]; individual setters override single fields.
#[derive(Debug, Default)]
pub struct SimplificationClientBuilder {
    config: Option<ServiceConfig>,
    base_url_override: Option<String>,
    timeout_ms: Option<u64>,
    bearer_token: Option<String>,
    seed: Option<u64>,
}

impl SimplificationClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration (e.g. one loaded with [`ServiceConfig::from_env`]).
    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the base URL, primarily for testing against mock servers.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Seed the expression generator so generated expressions are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn resolve_config(&mut self) -> Result<ServiceConfig> {
        let mut config = self.config.take().unwrap_or_default();
        if let Some(url) = self.base_url_override.take() {
            config.base_url = url;
        }
        if let Some(ms) = self.timeout_ms {
            config.timeout_ms = ms;
        }
        if let Some(token) = self.bearer_token.take() {
            config.bearer_token = Some(token);
        }
        config.validate()?;
        Ok(config)
    }

    /// Build the client over the HTTP transport.
    pub fn build(mut self) -> Result<SimplificationClient<HttpTransport>> {
        let config = self.resolve_config()?;
        let transport = HttpTransport::new(&config)?;
        Ok(self.assemble(config, transport))
    }

    /// Build the client over a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(mut self, transport: T) -> Result<SimplificationClient<T>> {
        let config = self.resolve_config()?;
        Ok(self.assemble(config, transport))
    }

    fn assemble<T: Transport>(&self, config: ServiceConfig, transport: T) -> SimplificationClient<T> {
        let generator = match self.seed {
            Some(seed) => ExpressionGenerator::with_seed(seed),
            None => ExpressionGenerator::new(),
        };
        SimplificationClient {
            requests: ApiRequestBuilder::new(&config),
            config,
            generator: Mutex::new(generator),
            transport,
        }
    }
}
