// File: crates/graphmaker/src/preview.rs
// Summary: Optional on-screen preview of the finished chart via RGBA blit (CPU) using winit + softbuffer.

use anyhow::Result;
use graph_core::{Chart, RenderOptions};

/// Whether a desktop session is there to open a window on. X11 and Wayland
/// sessions advertise themselves through `DISPLAY`/`WAYLAND_DISPLAY`.
pub fn display_available(var: impl Fn(&str) -> Option<std::ffi::OsString>) -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|k| var(k).is_some_and(|v| !v.is_empty()))
}

/// Pack RGBA8 pixels into softbuffer's `0RGB` words. Stops at the shorter buffer.
#[cfg_attr(not(feature = "preview"), allow(dead_code))]
pub fn pack_0rgb(rgba: &[u8], frame: &mut [u32]) {
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
}

/// Show `chart` in a window until it is closed. A no-op without a display
/// or when built without the `preview` feature.
pub fn show(chart: &Chart, opts: &RenderOptions) -> Result<()> {
    if !display_available(|k| std::env::var_os(k)) {
        tracing::info!("no display; skipping preview");
        return Ok(());
    }
    window::run(chart, opts)
}

#[cfg(feature = "preview")]
mod window {
    use std::num::NonZeroU32;

    use anyhow::{anyhow, Result};
    use graph_core::{Chart, RenderOptions};
    use winit::dpi::LogicalSize;
    use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
    use winit::event_loop::{ControlFlow, EventLoop};
    use winit::platform::run_return::EventLoopExtRunReturn;
    use winit::window::{Window, WindowBuilder};

    pub fn run(chart: &Chart, opts: &RenderOptions) -> Result<()> {
        let mut event_loop = EventLoop::new();
        let title = if chart.title.is_empty() { "GraphMaker" } else { chart.title.as_str() };
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
            .build(&event_loop)
            .map_err(|e| anyhow!("failed to open preview window: {e}"))?;

        let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

        let mut failure = None;
        event_loop.run_return(|event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event: WindowEvent::CloseRequested, .. }
                | Event::WindowEvent {
                    event: WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Escape), .. },
                        ..
                    },
                    ..
                } => *cf = ControlFlow::Exit,
                Event::WindowEvent { event: WindowEvent::Resized(_), .. } => window.request_redraw(),
                Event::RedrawRequested(_) => {
                    if let Err(e) = present(chart, opts, &window, &mut surface) {
                        failure = Some(e);
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });
        failure.map_or(Ok(()), Err)
    }

    /// Re-render at the window's current size and blit it.
    fn present(chart: &Chart, opts: &RenderOptions, window: &Window, surface: &mut softbuffer::Surface) -> Result<()> {
        let size = window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        surface.resize(w, h).map_err(|e| anyhow!("softbuffer resize: {e}"))?;

        let frame_opts = RenderOptions { width: size.width as i32, height: size.height as i32, ..*opts };
        let (rgba, _, _, _) = chart.render_to_rgba8(&frame_opts)?;
        let mut frame = surface.buffer_mut().map_err(|e| anyhow!("softbuffer frame: {e}"))?;
        super::pack_0rgb(&rgba, &mut frame);
        frame.present().map_err(|e| anyhow!("softbuffer present: {e}"))?;
        tracing::debug!(width = size.width, height = size.height, "preview frame presented");
        Ok(())
    }
}

#[cfg(not(feature = "preview"))]
mod window {
    use anyhow::Result;
    use graph_core::{Chart, RenderOptions};

    pub fn run(_chart: &Chart, _opts: &RenderOptions) -> Result<()> {
        tracing::debug!("built without the `preview` feature; skipping preview");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn packs_rgba_into_0rgb_words() {
        let rgba = [0x44, 0x01, 0x54, 0xff, 0xe7, 0xe7, 0xe6, 0x80];
        let mut frame = [0u32; 3];
        pack_0rgb(&rgba, &mut frame);
        assert_eq!(frame, [0x0044_0154, 0x00e7_e7e6, 0]);
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn needs_a_display_server_on_unix() {
        assert!(!display_available(|_| None));
        assert!(!display_available(|_| Some(OsString::new())));
        assert!(display_available(|k| (k == "WAYLAND_DISPLAY").then(|| OsString::from("wayland-0"))));
        assert!(display_available(|k| (k == "DISPLAY").then(|| OsString::from(":0"))));
    }

    #[cfg(any(target_os = "macos", target_os = "windows"))]
    #[test]
    fn desktop_platforms_always_have_a_display() {
        assert!(display_available(|_| None::<OsString>));
    }
}
