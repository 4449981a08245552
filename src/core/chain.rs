// src/core/chain.rs
//! Fallback extraction chains.
//!
//! A field is read by an ordered list of strategies, each a CSS selector plus
//! an extractor applied to the matched elements. The first strategy that
//! yields a value wins; if none does, the field is `None`. Layout changes on
//! the remote side therefore null out one field instead of failing the page.

use scraper::{ElementRef, Html, Selector};

use crate::core::html::selector;
use crate::error::Result;

/// Reads a value from one matched element, or declines with `None`
/// (the next matched element, then the next strategy, is tried).
pub type Extractor = for<'a> fn(ElementRef<'a>) -> Option<String>;

/// First `Some` produced by `f` over `items`, in order.
pub fn first_match<T, U>(items: impl IntoIterator<Item = T>, f: impl FnMut(T) -> Option<U>) -> Option<U> {
    items.into_iter().find_map(f)
}

pub struct Strategy {
    css: String,
    selector: Selector,
    extract: Extractor,
}

impl Strategy {
    pub fn new(css: &str, extract: Extractor) -> Result<Self> {
        Ok(Self { css: s!(css), selector: selector(css)?, extract })
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn apply(&self, doc: &Html) -> Option<String> {
        first_match(doc.select(&self.selector), self.extract)
    }
}

/// Which strategy produced a value, by position in the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub value: String,
}

pub struct FieldChain {
    name: String,
    strategies: Vec<Strategy>,
}

impl FieldChain {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), strategies: Vec::new() }
    }

    /// Append a strategy tried after all existing ones.
    pub fn then(mut self, css: &str, extract: Extractor) -> Result<Self> {
        self.strategies.push(Strategy::new(css, extract)?);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn resolve(&self, doc: &Html) -> Option<String> {
        self.resolve_hit(doc).map(|hit| hit.value)
    }

    pub fn resolve_hit(&self, doc: &Html) -> Option<Hit> {
        let hit = first_match(self.strategies.iter().enumerate(), |(index, s)| {
            s.apply(doc).map(|value| Hit { index, value })
        });
        match &hit {
            Some(h) if h.index > 0 => {
                logd!(field = %self.name, css = %self.strategies[h.index].css, "primary selector missed, used fallback");
            }
            None => logd!(field = %self.name, "no selector matched"),
            _ => {}
        }
        hit
    }
}
