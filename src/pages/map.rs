//! The map page: the draggable node map.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::node_map::{MapData, NodeMap};
use crate::data;

/// Navigation map page.
#[component]
pub fn MapPage() -> impl IntoView {
	let (map, set_map) = signal(None::<MapData>);
	spawn_local(async move {
		set_map.set(Some(data::load_map_data().await));
	});

	view! {
		<div class="map-page">
			<NodeMap data=map />
			<div class="map-overlay">
				<h1>"Map"</h1>
				<p class="subtitle">"Drag nodes around. One of them leads back home."</p>
			</div>
		</div>
	}
}
