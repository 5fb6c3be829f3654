// Image loading module.
// Turns catalog image references into decoded bitmaps off the UI thread.

pub mod decode;
pub mod loader;
pub mod reference;
pub mod state;

pub use decode::DecodedImage;
pub use loader::ImageLoader;
pub use reference::{ImageRef, ImageSource, RequestOptions};
pub use state::{ImageLoadState, ImageSlot, LoadCompletion, LoadRequest, Ticket, Tickets};
