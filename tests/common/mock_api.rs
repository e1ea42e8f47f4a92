//! Scripted in-process `ProductApi` for view and orchestrator tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use rentcat::catalog::{ApiError, CatalogQuery, ListParams, Product, ProductApi, SearchParams};
use std::collections::VecDeque;
use tokio::sync::oneshot;

/// One scripted answer. With a gate, the call blocks until the gate fires.
pub struct Step {
    gate: Option<oneshot::Receiver<()>>,
    reply: Result<Vec<Product>, ApiError>,
}

impl Step {
    pub fn ok(products: Vec<Product>) -> Self {
        Self {
            gate: None,
            reply: Ok(products),
        }
    }

    pub fn fail(err: ApiError) -> Self {
        Self {
            gate: None,
            reply: Err(err),
        }
    }

    /// Hold the reply until the returned sender fires (or is dropped).
    pub fn gated(mut self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        self.gate = Some(rx);
        (self, tx)
    }
}

/// Records every call and answers from a queue (empty list when exhausted).
#[derive(Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<CatalogQuery>>,
    script: Mutex<VecDeque<Step>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, step: Step) {
        self.script.lock().push_back(step);
    }

    pub fn calls(&self) -> Vec<CatalogQuery> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<CatalogQuery> {
        self.calls.lock().last().cloned()
    }

    async fn answer(&self, query: CatalogQuery) -> Result<Vec<Product>, ApiError> {
        self.calls.lock().push(query);
        let step = self.script.lock().pop_front();
        let Some(step) = step else {
            return Ok(Vec::new());
        };
        if let Some(gate) = step.gate {
            let _ = gate.await;
        }
        step.reply
    }
}

#[async_trait]
impl ProductApi for ScriptedApi {
    async fn list(&self, params: &ListParams) -> Result<Vec<Product>, ApiError> {
        self.answer(CatalogQuery::List(params.clone())).await
    }

    async fn search(&self, params: &SearchParams) -> Result<Vec<Product>, ApiError> {
        self.answer(CatalogQuery::Search(params.clone())).await
    }
}
