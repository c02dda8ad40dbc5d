//! Selector queries over the document tree.

use crate::document::Document;
use crate::element::NodeId;
use crate::error::DomError;
use crate::selector::Selector;

impl Document {
    /// First element in tree order (body included) matching `selector`.
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        let body = self.body();
        Ok(std::iter::once(body)
            .chain(self.descendants(body))
            .find(|&node| selector.matches(self, node)))
    }

    /// Every element in tree order (body included) matching `selector`.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        let body = self.body();
        Ok(std::iter::once(body)
            .chain(self.descendants(body))
            .filter(|&node| selector.matches(self, node))
            .collect())
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query_selector_in(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Option<NodeId>, DomError> {
        self.require(scope)?;
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .find(|&node| selector.matches(self, node)))
    }

    /// Every descendant of `scope` matching `selector`, in tree order.
    pub fn query_selector_all_in(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>, DomError> {
        self.require(scope)?;
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|&node| selector.matches(self, node))
            .collect())
    }

    pub fn matches(&self, node: NodeId, selector: &str) -> Result<bool, DomError> {
        self.require(node)?;
        Ok(Selector::parse(selector)?.matches(self, node))
    }

    /// Nearest inclusive ancestor of `node` matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        self.require(node)?;
        let selector = Selector::parse(selector)?;
        Ok(std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|&candidate| selector.matches(self, candidate)))
    }
}
