use std::sync::Arc;

use crate::lookup::{CachedParameterSource, ParameterSource, StaticParameterSource};
use crate::publish::DatasheetPublisher;
use crate::search::{SearchBackend, SearchOrchestrator};

/// Shared state handed to every handler.
pub struct HandlerState<B, P> {
    pub orchestrator: Arc<SearchOrchestrator<B>>,

    pub parameters: Arc<CachedParameterSource<P>>,

    /// Values served when the lookup endpoint fails.
    pub fallback: StaticParameterSource,

    pub publisher: Arc<DatasheetPublisher>,
}

impl<B, P> Clone for HandlerState<B, P> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
            parameters: Arc::clone(&self.parameters),
            fallback: self.fallback,
            publisher: Arc::clone(&self.publisher),
        }
    }
}

impl<B, P> HandlerState<B, P>
where
    B: SearchBackend + 'static,
    P: ParameterSource + 'static,
{
    pub fn new(
        orchestrator: SearchOrchestrator<B>,
        parameters: CachedParameterSource<P>,
        publisher: DatasheetPublisher,
    ) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            parameters: Arc::new(parameters),
            fallback: StaticParameterSource,
            publisher: Arc::new(publisher),
        }
    }
}
