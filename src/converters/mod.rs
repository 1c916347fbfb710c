pub mod elementor;
