mod game_vm;
mod timer_vm;

pub use game_vm::GameVm;
pub use timer_vm::{TimerDisplayVm, map_timer_display};
