pub mod attendance_event;
pub mod attendance_kind;
pub mod membership;
pub mod month_key;
pub mod visit;
