pub mod space;
pub mod sprint;
pub mod task;
pub mod template;

pub use space::*;
pub use sprint::*;
pub use task::*;
pub use template::*;
