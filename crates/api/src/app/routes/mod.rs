pub mod margin;
pub mod system;
