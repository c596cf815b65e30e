//! Fallback page for unknown routes.

use leptos::prelude::*;

/// 404 page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"This corner of the sky is empty."</p>
			<a href="/">"Back to the stars"</a>
		</div>
	}
}
