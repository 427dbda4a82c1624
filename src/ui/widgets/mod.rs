// SPDX-License-Identifier: MPL-2.0
pub mod star_canvas;

pub use star_canvas::StarCanvas;
