//! Leptos component wrapping the starfield canvas and its tooltip overlay.
//!
//! The component creates an HTML canvas plus one tooltip element and wires
//! up mouse and click handlers, including a document-level click listener
//! that dismisses a pinned tooltip when the user clicks elsewhere on the
//! page. An animation loop runs via `requestAnimationFrame`; the pending
//! frame handle is stored so teardown can cancel it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlDivElement, MouseEvent, Window};

use crate::theme::StarfieldTheme;

use super::pointer::PointerUpdate;
use super::render;
use super::state::StarfieldState;
use super::tooltip;
use super::types::StarRecord;

/// Bundles scene state with its visual configuration.
struct StarfieldContext {
	state: StarfieldState,
	theme: StarfieldTheme,
}

/// Renders the interactive starfield, sized to the viewport.
///
/// Pass star records via the `records` signal; the scene is built once the
/// data arrives and the canvas is mounted. Hovering a star shows its
/// tooltip, clicking pins it open until dismissed.
#[component]
pub fn Starfield(#[prop(into)] records: Signal<Option<Vec<StarRecord>>>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip_ref = NodeRef::<leptos::html::Div>::new();
	let context: Rc<RefCell<Option<StarfieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let doc_click_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (context_init, animate_init, resize_cb_init, doc_click_init, frame_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		doc_click_cb.clone(),
		frame.clone(),
	);

	Effect::new(move |_| {
		let Some(records) = records.get() else {
			return;
		};
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// Data and canvas are both ready exactly once.
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: web_sys::CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*context_init.borrow_mut() = Some(StarfieldContext {
			state: StarfieldState::new(records, w, h, SmallRng::from_entropy()),
			theme: StarfieldTheme::default(),
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// Clicks that land outside both canvas and tooltip dismiss a
		// pinned tooltip.
		let (context_doc, canvas_doc) = (context_init.clone(), canvas.clone());
		let tooltip_doc = tooltip_ref;
		*doc_click_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let Some(target) = ev.target() else {
				return;
			};
			let Ok(node) = target.dyn_into::<web_sys::Node>() else {
				return;
			};
			if canvas_doc.contains(Some(&node)) {
				return;
			}
			if let Some(tooltip) = tooltip_doc.get()
				&& tooltip.contains(Some(&node))
			{
				return;
			}
			if let Some(ref mut c) = *context_doc.borrow_mut()
				&& c.state.outside_click() == PointerUpdate::Hide
				&& let Some(tooltip) = tooltip_doc.get()
			{
				hide_tooltip(&tooltip);
			}
		}));
		if let (Some(doc), Some(ref cb)) = (window.document(), &*doc_click_init.borrow()) {
			let _ = doc.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner, frame_anim) = (
			context_init.clone(),
			animate_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick();
				render::render(&c.state, &ctx, &c.theme);
			}
			if let (Some(win), Some(ref cb)) = (web_sys::window(), &*animate_inner.borrow()) {
				frame_anim.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			frame_init.set(
				window
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok(),
			);
		}
	});

	// The loop must stop re-arming itself once the component goes away,
	// and page-level listeners must not outlive it.
	let cleanup_state = send_wrapper::SendWrapper::new((
		frame,
		animate,
		resize_cb,
		doc_click_cb,
	));
	on_cleanup(move || {
		let (frame_cleanup, animate_cleanup, resize_cleanup, doc_click_cleanup) = &*cleanup_state;
		if let Some(win) = web_sys::window() {
			if let Some(handle) = frame_cleanup.take() {
				let _ = win.cancel_animation_frame(handle);
			}
			if let Some(cb) = resize_cleanup.borrow_mut().take() {
				let _ =
					win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			if let (Some(doc), Some(cb)) = (win.document(), doc_click_cleanup.borrow_mut().take()) {
				let _ =
					doc.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
			}
		}
		*animate_cleanup.borrow_mut() = None;
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let update = c.state.pointer_moved(x, y);
			if let Some(tooltip) = tooltip_ref.get() {
				apply_update(
					&c.state,
					&tooltip,
					update,
					ev.client_x() as f64,
					ev.client_y() as f64,
				);
			}
			let cursor = if c.state.pointer.hovered().is_some() {
				"pointer"
			} else {
				"default"
			};
			let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			let update = c.state.pointer_left();
			if update == PointerUpdate::Hide
				&& let Some(tooltip) = tooltip_ref.get()
			{
				hide_tooltip(&tooltip);
			}
		}
	};

	let context_cl = context.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_cl.borrow_mut() {
			let update = c.state.clicked(x, y);
			if let Some(tooltip) = tooltip_ref.get() {
				apply_update(
					&c.state,
					&tooltip,
					update,
					ev.client_x() as f64,
					ev.client_y() as f64,
				);
			}
		}
	};

	view! {
		<div class="starfield">
			<canvas
				node_ref=canvas_ref
				class="starfield-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				on:click=on_click
				style="display: block;"
			/>
			<div node_ref=tooltip_ref class="star-tooltip hidden"></div>
		</div>
	}
}

/// Apply a pointer transition's tooltip effect to the DOM.
fn apply_update(
	state: &StarfieldState,
	tooltip: &HtmlDivElement,
	update: PointerUpdate,
	anchor_x: f64,
	anchor_y: f64,
) {
	match update {
		PointerUpdate::ShowHover(index) => {
			show_tooltip(tooltip, &state.stars[index].record, anchor_x, anchor_y, false);
		}
		PointerUpdate::ShowPinned(index) => {
			show_tooltip(tooltip, &state.stars[index].record, anchor_x, anchor_y, true);
		}
		PointerUpdate::Hide => hide_tooltip(tooltip),
		PointerUpdate::None => {}
	}
}

/// Fill the tooltip element, measure it invisibly, then place it so it
/// stays inside the viewport.
fn show_tooltip(
	tooltip: &HtmlDivElement,
	record: &StarRecord,
	anchor_x: f64,
	anchor_y: f64,
	pinned: bool,
) {
	tooltip.set_inner_html(&tooltip::content_html(record));

	let style = web_sys::HtmlElement::style(tooltip);
	// Measure with the element laid out but not yet painted.
	let _ = style.set_property("visibility", "hidden");
	let _ = tooltip.class_list().remove_1("hidden");
	let rect = tooltip.get_bounding_client_rect();

	let window = web_sys::window().unwrap();
	let (vw, vh) = (
		window.inner_width().unwrap().as_f64().unwrap(),
		window.inner_height().unwrap().as_f64().unwrap(),
	);
	let placement = tooltip::place(anchor_x, anchor_y, rect.width(), rect.height(), vw, vh);

	let _ = style.set_property("left", &format!("{}px", placement.left));
	let _ = style.set_property("top", &format!("{}px", placement.top));
	// A pinned tooltip accepts clicks so its links stay usable.
	let _ = style.set_property("pointer-events", if pinned { "auto" } else { "none" });
	if pinned {
		let _ = tooltip.class_list().add_1("pinned");
	} else {
		let _ = tooltip.class_list().remove_1("pinned");
	}
	let _ = style.set_property("visibility", "visible");
}

fn hide_tooltip(tooltip: &HtmlDivElement) {
	let _ = tooltip.class_list().add_1("hidden");
	let _ = tooltip.class_list().remove_1("pinned");
	let _ = web_sys::HtmlElement::style(tooltip).set_property("pointer-events", "none");
}
