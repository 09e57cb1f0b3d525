use std::error::Error;

use crate::task::Task;

/// Where validated tasks go: the hosting application's store.
///
/// The board hands a task over and moves on. It does not wait for the write
/// to land somewhere durable, and it does not retry: an error returned here
/// is logged by the board and otherwise dropped. Implementations talking to
/// slow backends should accept the task quickly and do the slow part
/// elsewhere (see [`ChannelStore`](crate::store::ChannelStore)).
///
/// The store owns id assignment: the first save of a task replaces its
/// placeholder id with a permanent one.
pub trait TaskStore {
    /// Persist one validated task, new or updated
    fn save_task(&mut self, task: Task) -> Result<(), Box<dyn Error>>;
}

/// The host-side fullscreen capability.
///
/// Going fullscreen is a platform call only the embedding UI can make. The
/// host registers this handle on the board
/// (see [`attach_fullscreen_surface`](crate::board::PlanningBoard::attach_fullscreen_surface));
/// the board keeps track of the intent and calls back through it.
pub trait FullscreenSurface {
    /// Put the board's chart area into fullscreen
    fn enter_fullscreen(&mut self);
    /// Leave fullscreen again
    fn exit_fullscreen(&mut self);
}
