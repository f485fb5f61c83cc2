pub mod advisory;
pub mod enums;
pub mod patient;
pub mod questionnaire;

pub use advisory::*;
pub use enums::*;
pub use patient::*;
pub use questionnaire::*;
