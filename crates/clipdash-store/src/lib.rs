//! Client-side state stores for the ClipDash views.
//!
//! Two stores back the pages: [`VideoStore`] for projects, candidates, and
//! the in-progress subtitle edit, and [`AuthStore`] for the login state.
//! Both are explicitly constructed objects handed to the view layer, not
//! ambient globals, and both follow the same single-writer discipline as
//! the playback core: views read through accessors and mutate through
//! methods, with a change ping to subscribers after every mutation.
//!
//! Playback state (current time, play/pause, duration) deliberately does
//! not live here; the editor session owns it exclusively.

pub mod auth_store;
pub mod video_store;

pub use auth_store::AuthStore;
pub use video_store::VideoStore;
