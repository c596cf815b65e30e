//! The sky page: starfield, marquee, and the cursor mascot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::follower::CursorFollower;
use crate::components::marquee::Marquee;
use crate::components::starfield::{Starfield, StarRecord};
use crate::data;

/// Landing page rendering the interactive night sky.
#[component]
pub fn Home() -> impl IntoView {
	let (records, set_records) = signal(None::<Vec<StarRecord>>);
	spawn_local(async move {
		set_records.set(Some(data::load_star_records().await));
	});

	view! {
		<div class="sky-page">
			<Marquee text="Welcome to my star path — hover a star to see what it holds." />
			<Starfield records=records />
			<CursorFollower />
			<div class="sky-overlay">
				<h1>"Star Path"</h1>
				<p class="subtitle">"Hover a star for details. Click to keep the card open."</p>
			</div>
		</div>
	}
}
