pub mod analyze_frame_use_case;
pub mod infrastructure;
pub mod latest_channel;
