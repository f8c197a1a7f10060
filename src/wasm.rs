// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! `CatalogSearch` wraps a [`Catalog`] for JavaScript hosts. Options arrive as
//! loosely typed objects, so they are checked here and a wrongly typed
//! `prefix` or `fuzzy` is thrown back as an error instead of being coerced.

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::records::records_from_json;
use crate::search::SearchOptions;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value, Serializer};
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Serialize maps as plain objects, not `Map`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(to_js_error)
}

/// Map a JS `maxResults` onto a count. Fractions round down.
fn suggestion_limit(max_results: Option<f64>, default: usize) -> usize {
    match max_results {
        None => default,
        Some(n) if n.is_nan() || n <= 0.0 => 0,
        Some(n) => n.min(usize::MAX as f64) as usize,
    }
}

#[wasm_bindgen]
pub struct CatalogSearch {
    catalog: Catalog,
}

#[wasm_bindgen]
impl CatalogSearch {
    /// Create an empty catalog. `config` is an optional `SearchConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<CatalogSearch, JsValue> {
        let config: SearchConfig = match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value(value).map_err(to_js_error)?
            }
            _ => SearchConfig::default(),
        };
        let catalog = Catalog::new(config).map_err(to_js_error)?;
        Ok(CatalogSearch { catalog })
    }

    /// (Re)build both indices from an array of records or a `{ values }` sheet payload.
    #[wasm_bindgen]
    pub fn build(&mut self, records: JsValue) -> Result<(), JsValue> {
        let payload: serde_json::Value = from_value(records).map_err(to_js_error)?;
        let records = records_from_json(payload).map_err(to_js_error)?;
        self.catalog.load(&records);
        Ok(())
    }

    /// Ranked results as `{ id, score, matchedFields }` objects.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, options: Option<JsValue>) -> Result<JsValue, JsValue> {
        let options = match options {
            Some(value) if !value.is_undefined() => {
                let json: serde_json::Value = from_value(value).map_err(to_js_error)?;
                SearchOptions::from_json(&json).map_err(to_js_error)?
            }
            _ => SearchOptions::default(),
        };
        let results = self.catalog.search(query, &options).map_err(to_js_error)?;
        to_js(&results)
    }

    /// Suggested completions for `prefix`, best first. A zero, negative or NaN
    /// `maxResults` yields an empty list.
    #[wasm_bindgen]
    pub fn suggestions(&self, prefix: &str, max_results: Option<f64>) -> Result<JsValue, JsValue> {
        let limit = suggestion_limit(max_results, self.catalog.config().max_suggestions);
        to_value(&self.catalog.suggestions(prefix, limit)).map_err(to_js_error)
    }

    /// The full record, or `undefined` for an unknown id.
    #[wasm_bindgen(js_name = getObjectById)]
    pub fn get_object_by_id(&self, id: &str) -> Result<JsValue, JsValue> {
        match self.catalog.get_object_by_id(id) {
            Some(record) => to_js(record),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.catalog.is_ready()
    }

    #[wasm_bindgen]
    pub fn size(&self) -> usize {
        self.catalog.size()
    }

    #[wasm_bindgen(js_name = termCount)]
    pub fn term_count(&self) -> usize {
        self.catalog.terms_index().term_count()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.catalog.clear();
    }
}
