// panenav - paned terminal navigation engine
//
// Two navigators over one design: a miller-column file browser and a
// dual-column time/value grid editor. Both subdivide a fixed terminal
// viewport into adjacent scrollable panes, keep a single active selection
// visible, and run a blocking event loop until the user confirms or cancels.
//
// Architecture:
// - viewport: per-pane row budget from terminal height
// - entry/listing/preview/grid: pane content providers
// - scroll: selection-chasing and free-scrolling offset control
// - input: raw event -> command classification (mode before scheme)
// - browser/editor: the two state machines and their public entry points
// - render: pure state -> widget functions
//
// The engine takes its configuration and translation lookup as explicit
// constructor arguments; there is no process-wide state.

pub mod browser;
pub mod cli;
pub mod config;
pub mod demo;
pub mod editor;
pub mod entry;
pub mod grid;
pub mod input;
pub mod listing;
pub mod preview;
pub mod render;
pub mod scroll;
pub mod term;
pub mod theme;
pub mod translate;
pub mod util;
pub mod viewport;

pub use browser::{BrowseResult, FileBrowser};
pub use config::NavigatorConfig;
pub use editor::{EditResult, GridEditor};
pub use input::Transition;
pub use translate::Translator;
