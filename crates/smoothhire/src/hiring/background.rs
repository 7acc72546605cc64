//! Decorative backdrop: a tiled plus-cross pattern drifting diagonally.
//!
//! Pure styling; nothing here reads or writes screen state.

/// Edge length of one tile, in pixels. One animation cycle moves exactly one tile.
pub const TILE_SIZE: u32 = 60;

/// Seconds per animation cycle.
pub const CYCLE_SECONDS: u32 = 10;

const TILE_SVG: &str = "data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cg fill='%239C92AC' fill-opacity='0.4'%3E%3Cpath d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zm0-30V0h-2v4h-4v2h4v4h2V6h4V4h-4zM6 34v-4H4v4H0v2h4v4h2v-4h4v-2H6zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E";

/// Stylesheet fragment for the `.backdrop` element.
pub fn stylesheet() -> String {
    format!(
        ".backdrop {{ position: fixed; inset: 0; z-index: 0; opacity: 0.2; \
background-image: url(\"{TILE_SVG}\"); \
animation: backdrop-drift {CYCLE_SECONDS}s linear infinite; }}\n\
@keyframes backdrop-drift {{ from {{ background-position: 0px 0px; }} \
to {{ background-position: {TILE_SIZE}px {TILE_SIZE}px; }} }}\n"
    )
}
