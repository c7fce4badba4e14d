// SPDX-License-Identifier: MIT OR Apache-2.0

mod editor;
pub mod store;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use editor::{AccessListEditor, EditorError, EditorState, Transition};
