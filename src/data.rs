//! Descriptor loading: a single-shot fetch with built-in demo fallback.
//!
//! One request per page, no retry, no timeout. Every degraded path logs a
//! warning and substitutes demo data rather than surfacing an error to the
//! user.

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::components::node_map::{MapData, demo_map};
use crate::components::starfield::{StarRecord, demo_records};

const STARS_URL: &str = "data/stars.json";
const MAP_URL: &str = "data/mapdata.json";

/// Fetch a URL and return the body as text.
async fn fetch_text(url: &str) -> Result<String> {
	let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
	let promise: js_sys::Promise = window.fetch_with_str(url);
	let response = JsFuture::from(promise)
		.await
		.map_err(|e| anyhow!("fetch {url} failed: {e:?}"))?;
	let response: Response = response
		.dyn_into()
		.map_err(|_| anyhow!("fetch {url}: not a Response"))?;
	if !response.ok() {
		return Err(anyhow!("fetch {url}: HTTP {}", response.status()));
	}
	let body = JsFuture::from(
		response
			.text()
			.map_err(|e| anyhow!("fetch {url}: no body: {e:?}"))?,
	)
	.await
	.map_err(|e| anyhow!("fetch {url}: read failed: {e:?}"))?;
	body.as_string()
		.ok_or_else(|| anyhow!("fetch {url}: body is not text"))
}

/// Parse a star descriptor array, dropping malformed records individually.
///
/// Wrong-typed records are dropped with a warning; out-of-range fractional
/// coordinates are tolerated with a warning, matching the loader this
/// replaces.
pub fn parse_star_records(json: &str) -> Result<Vec<StarRecord>> {
	let values: Vec<serde_json::Value> =
		serde_json::from_str(json).context("star data is not a JSON array")?;

	let mut records = Vec::with_capacity(values.len());
	for value in values {
		match serde_json::from_value::<StarRecord>(value) {
			Ok(record) => {
				if !(0.0..=1.0).contains(&record.x) || !(0.0..=1.0).contains(&record.y) {
					warn!(
						"star '{}' has out-of-range coordinates ({}, {})",
						record.title, record.x, record.y
					);
				}
				records.push(record);
			}
			Err(e) => warn!("dropping malformed star record: {e}"),
		}
	}
	Ok(records)
}

/// Load `stars.json`, falling back to demo records on any failure.
pub async fn load_star_records() -> Vec<StarRecord> {
	match fetch_text(STARS_URL).await.and_then(|t| parse_star_records(&t)) {
		Ok(records) => {
			info!("loaded {} stars", records.len());
			records
		}
		Err(e) => {
			warn!("failed to load star data: {e:#}, using demo data");
			demo_records()
		}
	}
}

/// Load `mapdata.json`, falling back to the demo map on any failure.
pub async fn load_map_data() -> MapData {
	match fetch_text(MAP_URL)
		.await
		.and_then(|t| serde_json::from_str::<MapData>(&t).context("map data did not parse"))
	{
		Ok(data) => {
			info!("loaded map: {} nodes, {} links", data.nodes.len(), data.links.len());
			data
		}
		Err(e) => {
			warn!("failed to load map data: {e:#}, using demo data");
			demo_map()
		}
	}
}
