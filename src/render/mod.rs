pub(crate) mod aliased;
pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod draw;
pub(crate) mod pipeline;
