//! star-portfolio: decorative canvas effects for a personal portfolio.
//!
//! This crate provides a WASM-based portfolio front-end: an interactive
//! starfield whose stars carry contact/tech/project details behind
//! hoverable, pinnable tooltips, and a spring-physics node map for
//! navigation, plus a text marquee and a cursor-following mascot.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Activates the `js` feature so rand can draw entropy in the browser.
use getrandom as _;

pub mod components;
pub mod data;
pub mod pages;
pub mod theme;

pub use components::node_map::{MapData, NodeMap};
pub use components::starfield::{StarRecord, Starfield};

use crate::pages::home::Home;
use crate::pages::map::MapPage;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("star-portfolio: logging initialized");
}

/// Main application component: routes between the sky and map pages.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Star Path" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/map") view=MapPage />
			</Routes>
		</Router>
	}
}
