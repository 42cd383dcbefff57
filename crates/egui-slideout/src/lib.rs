mod animation;
mod config;
mod errors;
mod gesture;
mod geometry;
mod sidebar;
mod view;

pub use animation::SLIDE_DURATION;
pub use config::{MenuLocation, SidebarConfig};
pub use errors::SidebarError;
pub use gesture::{DragEvent, DragPhase, GestureInterpreter, GestureOutcome, Settle};
pub use sidebar::{area, AreaHandle, AreaView, Sidebar, SlideState, Subscription};
pub use view::{SidebarView, SidebarViewState};
