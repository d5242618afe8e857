use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

pub use channel::*;
pub use count::*;
pub use field::*;
pub use selection::*;
pub use video::*;

mod channel;
mod count;
mod field;
mod selection;
mod video;
