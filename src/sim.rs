pub mod particles;
pub mod scrollspy;
pub mod starfield;
pub mod typewriter;
pub mod wireframe;
