mod paste;

pub use paste::{read_image_to_data_url, use_paste_images};
