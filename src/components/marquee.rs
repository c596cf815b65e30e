//! Scrolling marquee text rendered to a fullscreen canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use crate::theme::MarqueeStyle;

/// A line of text drifting leftward across the viewport, wrapping back to
/// the right edge once it has fully scrolled off.
#[component]
pub fn Marquee(#[prop(into)] text: String) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (animate_init, resize_cb_init, frame_init) =
		(animate.clone(), resize_cb.clone(), frame.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animate_init.borrow().is_some() {
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

		let canvas_resize = canvas.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			canvas_resize.set_width(win.inner_width().unwrap().as_f64().unwrap() as u32);
			canvas_resize.set_height(win.inner_height().unwrap().as_f64().unwrap() as u32);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let style = MarqueeStyle::default();
		let text = text.clone();
		let offset = Cell::new(w);
		let (animate_inner, frame_anim) = (animate_init.clone(), frame_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let (cw, ch) = (canvas.width() as f64, canvas.height() as f64);
			ctx.clear_rect(0.0, 0.0, cw, ch);
			ctx.set_font(&style.font);
			ctx.set_fill_style_str(&style.color.to_css());
			let _ = ctx.fill_text(&text, offset.get(), ch / 2.0);

			offset.set(offset.get() - style.speed);
			let text_width = ctx
				.measure_text(&text)
				.map(|metrics| metrics.width())
				.unwrap_or(0.0);
			if offset.get() < -text_width {
				offset.set(cw);
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

	view! { <canvas node_ref=canvas_ref class="marquee-canvas" style="display: block;" /> }
}
