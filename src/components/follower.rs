//! Cursor-following mascot element.
//!
//! An absolutely-positioned element lazily pursuing the pointer: each
//! frame it eases 10% of the remaining distance (with a fixed offset so it
//! trails below-left of the cursor) and rotates toward its direction of
//! travel. It stays invisible for a short warm-up so it does not dart
//! across the page on load.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

/// Frames before the mascot is revealed (~2 s at 60 fps).
const WARMUP_FRAMES: u32 = 120;
/// Per-frame easing factor toward the pointer.
const PURSUIT: f64 = 0.1;
/// Offset keeping the mascot out from directly under the cursor.
const OFFSET: f64 = 40.0;

/// A mascot glyph that follows the mouse around the page.
#[component]
pub fn CursorFollower(#[prop(default = "🦆".to_string(), into)] glyph: String) -> impl IntoView {
	let mascot_ref = NodeRef::<leptos::html::Div>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mouse_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (animate_init, mouse_cb_init, frame_init) =
		(animate.clone(), mouse_cb.clone(), frame.clone());

	Effect::new(move |_| {
		let Some(mascot) = mascot_ref.get() else {
			return;
		};
		if animate_init.borrow().is_some() {
			return;
		}
		let window: Window = web_sys::window().unwrap();

		let target: Rc<Cell<(f64, f64)>> = Rc::new(Cell::new((0.0, 0.0)));

		let target_mouse = target.clone();
		*mouse_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			target_mouse.set((ev.client_x() as f64, ev.client_y() as f64));
		}));
		if let (Some(doc), Some(ref cb)) = (window.document(), &*mouse_cb_init.borrow()) {
			let _ = doc.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let position = Cell::new((0.0f64, 0.0f64));
		let warmup = Cell::new(0u32);
		let (animate_inner, frame_anim) = (animate_init.clone(), frame_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let (tx, ty) = target.get();
			let (mut x, mut y) = position.get();
			x += (tx - x - OFFSET) * PURSUIT;
			y += (ty - y - OFFSET) * PURSUIT;
			position.set((x, y));

			if warmup.get() < WARMUP_FRAMES {
				warmup.set(warmup.get() + 1);
				if warmup.get() == WARMUP_FRAMES {
					let _ = web_sys::HtmlElement::style(&mascot).set_property("opacity", "1");
				}
			} else {
				let angle = (ty - y).atan2(tx - x).to_degrees();
				let style = web_sys::HtmlElement::style(&mascot);
				let _ = style.set_property("left", &format!("{x}px"));
				let _ = style.set_property("top", &format!("{y}px"));
				let _ = style.set_property("transform", &format!("rotate({angle}deg)"));
			}

			if let (Some(win), Some(cb)) = (web_sys::window(), &*animate_inner.borrow()) {
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

	let cleanup_state = send_wrapper::SendWrapper::new((frame, animate, mouse_cb));
	on_cleanup(move || {
		let (frame_cleanup, animate_cleanup, mouse_cleanup) = &*cleanup_state;
		if let Some(win) = web_sys::window() {
			if let Some(handle) = frame_cleanup.take() {
				let _ = win.cancel_animation_frame(handle);
			}
			if let (Some(doc), Some(cb)) = (win.document(), mouse_cleanup.borrow_mut().take()) {
				let _ = doc
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}
		*animate_cleanup.borrow_mut() = None;
	});

	view! {
		<div
			node_ref=mascot_ref
			class="cursor-follower"
			style="position: fixed; left: 0; top: 0; opacity: 0; transition: opacity 1s; pointer-events: none;"
		>
			{glyph}
		</div>
	}
}
