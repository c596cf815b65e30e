//! Leptos component wrapping the node map canvas.
//!
//! Wires mouse and single-touch handlers for node dragging, runs the
//! spring physics from a `requestAnimationFrame` loop, and performs the
//! navigation when the special node's activation fade completes. The
//! pending frame handle is stored so teardown can cancel the loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use crate::theme::MapTheme;

use super::render;
use super::state::NodeMapState;
use super::types::MapData;

/// Bundles map state with its visual configuration.
struct MapContext {
	state: NodeMapState,
	theme: MapTheme,
}

/// Renders the draggable node map, sized to the viewport.
///
/// Pass map data via the `data` signal. Nodes can be dragged with the
/// mouse or one finger; clicking the special node fades the scene out and
/// returns to the sky page.
#[component]
pub fn NodeMap(#[prop(into)] data: Signal<Option<MapData>>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<MapContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (context_init, animate_init, resize_cb_init, frame_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		frame.clone(),
	);

	Effect::new(move |_| {
		let Some(data) = data.get() else {
			return;
		};
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
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

		let theme = MapTheme::default();
		*context_init.borrow_mut() = Some(MapContext {
			state: NodeMapState::new(&data, w, h, theme.node_radius),
			theme,
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

		let (context_anim, animate_inner, frame_anim) = (
			context_init.clone(),
			animate_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let navigate = c.state.tick();
				render::render(&c.state, &ctx, &c.theme);
				if navigate && let Some(win) = web_sys::window() {
					let _ = win.location().set_href("/");
				}
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

	let cleanup_state =
		send_wrapper::SendWrapper::new((frame, animate, resize_cb));
	on_cleanup(move || {
		let (frame_cleanup, animate_cleanup, resize_cleanup) = &*cleanup_state;
		if let Some(win) = web_sys::window() {
			if let Some(handle) = frame_cleanup.take() {
				let _ = win.cancel_animation_frame(handle);
			}
			if let Some(cb) = resize_cleanup.borrow_mut().take() {
				let _ =
					win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		*animate_cleanup.borrow_mut() = None;
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let (x, y) = canvas_point(canvas_ref, ev.client_x() as f64, ev.client_y() as f64);
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.state.begin_drag(x, y);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = canvas_point(canvas_ref, ev.client_x() as f64, ev.client_y() as f64);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.drag_move(x, y);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.state.end_drag();
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.end_drag();
		}
	};

	let context_cl = context.clone();
	let on_click = move |ev: MouseEvent| {
		let (x, y) = canvas_point(canvas_ref, ev.client_x() as f64, ev.client_y() as f64);
		if let Some(ref mut c) = *context_cl.borrow_mut() {
			c.state.clicked(x, y);
		}
	};

	// Single-touch maps onto the same drag gestures.
	let context_ts = context.clone();
	let on_touchstart = move |ev: TouchEvent| {
		if let Some(touch) = ev.touches().get(0) {
			let (x, y) = canvas_point(canvas_ref, touch.client_x() as f64, touch.client_y() as f64);
			if let Some(ref mut c) = *context_ts.borrow_mut() {
				c.state.begin_drag(x, y);
			}
		}
	};

	let context_tm = context.clone();
	let on_touchmove = move |ev: TouchEvent| {
		if let Some(touch) = ev.touches().get(0) {
			let (x, y) = canvas_point(canvas_ref, touch.client_x() as f64, touch.client_y() as f64);
			if let Some(ref mut c) = *context_tm.borrow_mut() {
				if c.state.drag.node.is_some() {
					// Keep the page from scrolling under the drag.
					ev.prevent_default();
				}
				c.state.drag_move(x, y);
			}
		}
	};

	let context_te = context.clone();
	let on_touchend = move |_: TouchEvent| {
		if let Some(ref mut c) = *context_te.borrow_mut() {
			c.state.end_drag();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="node-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:click=on_click
			on:touchstart=on_touchstart
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style="display: block; cursor: grab;"
		/>
	}
}

/// Translate client coordinates into canvas-relative coordinates.
fn canvas_point(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	client_x: f64,
	client_y: f64,
) -> (f64, f64) {
	let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
	let rect = canvas.get_bounding_client_rect();
	(client_x - rect.left(), client_y - rect.top())
}
