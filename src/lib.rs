//! Path addressing and cursor persistence for embedded move-tree editors.
//!
//! A game record is a tree of moves with a single cursor. Hosts deep-link
//! into it with a short path string (`"5N2B1"`) and persist the cursor as a
//! compact `"<depth>,<sibling>"` address so it survives a full rebuild of
//! the editor.
//!
//! # Module Structure
//!
//! - `moves` — Board primitives (Color, Point, Size, Move)
//! - `tree` — Arena-backed move tree and its node view
//! - `navigate` — The navigation seam (Navigate, Stride, Outcome)
//! - `path` — Path mini-language (Mode, Segment, Path)
//! - `address` — Cursor position codec
//! - `navigator` — Executes paths and addresses against a tree
//! - `options` — Embedding configuration
//! - `input` — Keyboard and wheel mapping
//! - `loader` — Remote record fetching with last-request-wins delivery
//! - `session` — The editor session tying it all together

mod address;
mod input;
mod loader;
mod moves;
mod navigate;
mod navigator;
mod options;
mod path;
mod session;
mod tree;

#[cfg(feature = "client")]
pub mod wasm;

pub use address::*;
pub use input::*;
pub use loader::*;
pub use moves::*;
pub use navigate::*;
pub use navigator::*;
pub use options::*;
pub use path::*;
pub use session::*;
pub use tree::*;

// ============================================================================
// BOARD PARAMETERS
// ============================================================================
/// Board side length used when none (or an invalid one) is configured.
pub const DEFAULT_SIZE: u8 = 19;
/// Largest board side the record format can address.
pub const MAX_SIZE: u8 = 52;
/// Smallest board side.
pub const MIN_SIZE: u8 = 1;

// ============================================================================
// INPUT PARAMETERS
// ============================================================================
/// Nodes skipped by page up / page down.
pub const PAGE_STRIDE: usize = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging for command line tools.
/// DEBUG level when `verbose`, INFO otherwise.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
